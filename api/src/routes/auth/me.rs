use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::UserResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/auth/me
pub async fn me(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.auth.me(&auth.actor).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}
