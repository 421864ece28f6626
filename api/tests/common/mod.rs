//! Shared setup for route tests: in-memory storage behind the real app

#![allow(dead_code)]

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse},
    http::{header, StatusCode},
    test, web, App, Error,
};
use bnb_api::{create_app, AppState, Repositories};
use bnb_core::domain::entities::user::{Role, User};
use bnb_core::repositories::UserRepository;
use bnb_core::services::{AuthServiceConfig, TokenServiceConfig};
use bnb_shared::config::{CorsConfig, ServerConfig};
use serde_json::{json, Value};

pub const PASSWORD: &str = "correct horse battery";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub repos: Repositories,
}

impl TestContext {
    pub fn new() -> Self {
        let repos = Repositories::in_memory();
        let tokens = TokenServiceConfig {
            jwt_secret: "route-test-secret".to_string(),
            access_token_expiry_seconds: 900,
            issuer: "fullstackbnb-test".to_string(),
        };
        let state = web::Data::new(AppState::new(repos.clone(), tokens, AuthServiceConfig::fast()));
        Self { state, repos }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        create_app(self.state.clone(), &ServerConfig::default(), &CorsConfig::development())
    }

    /// Admins cannot sign up through the API, so they are stored directly
    pub async fn seed_admin(&self, username: &str) {
        let hash = self.state.auth.password_hasher().hash(PASSWORD).await.unwrap();
        self.repos
            .users
            .create(User::new(
                username.to_string(),
                format!("{}@example.com", username),
                hash,
                Role::Admin,
            ))
            .await
            .unwrap();
    }
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

/// Send a request and return status plus JSON body (`Null` for empty bodies)
pub async fn send<S, B>(app: &S, req: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub async fn register<S, B>(app: &S, username: &str, role: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": PASSWORD,
            "role": role,
        }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "register {}: {}", username, body);
    body
}

pub async fn login<S, B>(app: &S, username: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({
            "email": format!("{}@example.com", username),
            "password": PASSWORD,
        }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK, "login {}: {}", username, body);
    body["accessToken"].as_str().unwrap().to_string()
}

/// Register then log in; returns the access token
pub async fn sign_up<S, B>(app: &S, username: &str, role: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    register(app, username, role).await;
    login(app, username).await
}

/// Create a listing as the given host and return its id
pub async fn create_listing<S, B>(app: &S, host_token: &str, price_per_night: f64) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/listings")
        .insert_header(bearer(host_token))
        .set_json(json!({
            "title": "Seaside cottage",
            "description": "Two rooms by the water",
            "pricePerNight": price_per_night,
            "location": "Lisbon",
            "imageUrl": "https://img.example.com/cottage.jpg",
        }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "create listing: {}", body);
    body["id"].as_str().unwrap().to_string()
}

pub async fn book<S, B>(
    app: &S,
    guest_token: &str,
    listing_id: &str,
    check_in: &str,
    check_out: &str,
) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(guest_token))
        .set_json(json!({
            "listingId": listing_id,
            "checkIn": check_in,
            "checkOut": check_out,
        }))
        .to_request();
    send(app, req).await
}
