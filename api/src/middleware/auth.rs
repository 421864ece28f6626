//! Bearer token authentication
//!
//! `JwtAuth` resolves the `Authorization: Bearer` header into an
//! [`AuthContext`] stored in the request extensions. Requests without the
//! header pass through anonymously; a header carrying a bad, expired or
//! revoked token is rejected with 401 before reaching a handler. Handlers
//! that need a caller take `AuthContext` as an extractor, which answers 401
//! for anonymous requests.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use bnb_core::domain::value_objects::Actor;
use bnb_core::errors::{AuthError, DomainError, TokenError};
use futures_util::future::LocalBoxFuture;
use std::{
    fmt,
    future::{ready, Ready},
    rc::Rc,
};

use crate::app::AppState;
use crate::handlers::error::{classify, handle_domain_error};

/// Authenticated caller injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub actor: Actor,
    /// Raw bearer token, needed to revoke it on logout
    pub token: String,
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match bearer_token(&req) {
                BearerToken::Absent => {
                    return service.call(req).await.map(ServiceResponse::map_into_left_body);
                }
                BearerToken::Malformed => {
                    let error = DomainError::Token(TokenError::InvalidTokenFormat);
                    return Ok(req.into_response(handle_domain_error(&error)).map_into_right_body());
                }
                BearerToken::Present(token) => token,
            };

            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                log::error!("JwtAuth mounted without application state");
                let error = DomainError::Internal {
                    message: "authentication is not configured".to_string(),
                };
                return Ok(req.into_response(handle_domain_error(&error)).map_into_right_body());
            };

            match state.auth.authenticate(&token).await {
                Ok(actor) => {
                    req.extensions_mut().insert(AuthContext { actor, token });
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(error) => {
                    log::debug!("Rejected bearer token on {}: {}", req.path(), error);
                    Ok(req.into_response(handle_domain_error(&error)).map_into_right_body())
                }
            }
        })
    }
}

#[derive(Debug, PartialEq)]
enum BearerToken {
    Absent,
    Malformed,
    Present(String),
}

fn bearer_token(req: &ServiceRequest) -> BearerToken {
    let Some(value) = req.headers().get(AUTHORIZATION) else {
        return BearerToken::Absent;
    };
    match value.to_str().ok().and_then(|v| v.strip_prefix("Bearer ")) {
        Some(token) if !token.trim().is_empty() => BearerToken::Present(token.trim().to_string()),
        _ => BearerToken::Malformed,
    }
}

/// 401 returned by the `AuthContext` extractor for anonymous requests
#[derive(Debug)]
pub struct AuthenticationRequired;

impl fmt::Display for AuthenticationRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", AuthError::MissingCredentials)
    }
}

impl ResponseError for AuthenticationRequired {
    fn status_code(&self) -> actix_web::http::StatusCode {
        classify(&DomainError::Auth(AuthError::MissingCredentials)).0
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&DomainError::Auth(AuthError::MissingCredentials))
    }
}

impl FromRequest for AuthContext {
    type Error = AuthenticationRequired;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthContext>()
                .cloned()
                .ok_or(AuthenticationRequired),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[::core::prelude::v1::test]
    fn test_bearer_token_extraction() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_srv_request();
        assert_eq!(bearer_token(&req), BearerToken::Present("abc.def.ghi".to_string()));

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Token abc.def.ghi"))
            .to_srv_request();
        assert_eq!(bearer_token(&req), BearerToken::Malformed);

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert_eq!(bearer_token(&req), BearerToken::Malformed);

        let req = test::TestRequest::default().to_srv_request();
        assert_eq!(bearer_token(&req), BearerToken::Absent);
    }
}
