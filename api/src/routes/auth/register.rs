use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{RegisterRequest, UserResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/auth/register
///
/// # Request Body
///
/// ```json
/// {
///     "username": "sea_breeze",
///     "email": "guest@example.com",
///     "password": "at least 8 chars",
///     "role": "guest"
/// }
/// ```
///
/// `role` is optional and may only be `guest` or `host`.
///
/// # Response
///
/// ## Success (201 Created)
/// The created user, without password hash.
///
/// ## Errors
/// - 400 Bad Request: Invalid username, email, password or role
/// - 403 Forbidden: Requested role cannot be self-assigned
/// - 409 Conflict: Username or email already taken
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state.auth.register(request.into()).await {
        Ok(user) => {
            log::info!("Registered user {}", user.id);
            HttpResponse::Created().json(UserResponse::from(user))
        }
        Err(error) => handle_domain_error(&error),
    }
}
