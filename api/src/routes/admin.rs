use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::AnalyticsResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/admin").route("/analytics", web::get().to(analytics)));
}

/// GET /api/v1/admin/analytics
///
/// Booking count, revenue of non-cancelled bookings and booking counts per
/// location (busiest first).
pub async fn analytics(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.admin.analytics(&auth.actor).await {
        Ok(analytics) => HttpResponse::Ok().json(AnalyticsResponse::from(analytics)),
        Err(error) => handle_domain_error(&error),
    }
}
