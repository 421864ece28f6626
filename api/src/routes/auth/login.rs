use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/auth/login
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "tokenType": "Bearer",
///     "expiresIn": 10800,
///     "user": { "id": "...", "username": "...", "email": "...", "role": "guest" }
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Unknown email or wrong password (indistinguishable)
pub async fn login(state: web::Data<AppState>, request: web::Json<LoginRequest>) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state.auth.login(&request.email, &request.password).await {
        Ok(response) => HttpResponse::Ok().json(LoginResponse::from(response)),
        Err(error) => handle_domain_error(&error),
    }
}
