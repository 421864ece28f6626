//! Host dashboard: own listings, bookings on them, status updates, earnings

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::{BookingResponse, BookingStatusRequest, EarningsResponse, ListingResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/host")
            .route("/listings", web::get().to(host_listings))
            .route("/bookings", web::get().to(host_bookings))
            .route("/bookings/{id}", web::put().to(update_booking_status))
            .route("/earnings", web::get().to(host_earnings)),
    );
}

pub async fn host_listings(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.listings.host_listings(&auth.actor).await {
        Ok(listings) => HttpResponse::Ok().json(
            listings
                .into_iter()
                .map(ListingResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}

pub async fn host_bookings(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.bookings.host_bookings(&auth.actor).await {
        Ok(bookings) => HttpResponse::Ok().json(
            bookings
                .into_iter()
                .map(BookingResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}

/// PUT /api/v1/host/bookings/{id}
///
/// Moves a pending booking to `completed` or `cancelled`. Both are final;
/// any other move answers 409 `INVALID_STATUS_TRANSITION`.
pub async fn update_booking_status(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<BookingStatusRequest>,
) -> HttpResponse {
    match state
        .bookings
        .update_status(&auth.actor, path.into_inner(), &request.status)
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(BookingResponse::from(booking)),
        Err(error) => handle_domain_error(&error),
    }
}

/// GET /api/v1/host/earnings
///
/// Sum of completed bookings across the caller's listings.
pub async fn host_earnings(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.bookings.host_earnings(&auth.actor).await {
        Ok(earnings) => HttpResponse::Ok().json(EarningsResponse::from(earnings)),
        Err(error) => handle_domain_error(&error),
    }
}
