use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::MessageResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the bearer token used for this request. Later requests carrying
/// it are rejected with 401 `TOKEN_REVOKED`.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
pub async fn logout(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.auth.logout(&auth.token).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Logged out successfully")),
        Err(error) => handle_domain_error(&error),
    }
}
