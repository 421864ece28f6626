//! Guest booking endpoints

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::{BookingResponse, CreateBookingRequest, MessageResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bookings")
            .route("", web::get().to(list_bookings))
            .route("", web::post().to(create_booking))
            .route("/{id}", web::get().to(get_booking))
            .route("/{id}", web::delete().to(cancel_booking)),
    );
}

/// Handler for POST /api/v1/bookings
///
/// # Request Body
///
/// ```json
/// { "listingId": "...", "checkIn": "2024-06-01", "checkOut": "2024-06-05" }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "id": "...",
///     "listingId": "...",
///     "userId": "...",
///     "checkIn": "2024-06-01",
///     "checkOut": "2024-06-05",
///     "totalPrice": 400.0,
///     "status": "pending"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or malformed dates, check-out not after check-in
/// - 403 Forbidden: Hosts cannot book
/// - 404 Not Found: Unknown listing
/// - 409 Conflict: `DATES_UNAVAILABLE`, the range overlaps an active booking
pub async fn create_booking(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateBookingRequest>,
) -> HttpResponse {
    match state
        .bookings
        .create_booking(&auth.actor, request.into_inner().into())
        .await
    {
        Ok(booking) => HttpResponse::Created().json(BookingResponse::from(booking)),
        Err(error) => handle_domain_error(&error),
    }
}

/// GET /api/v1/bookings (admin only)
pub async fn list_bookings(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.bookings.list_all_bookings(&auth.actor).await {
        Ok(bookings) => HttpResponse::Ok().json(
            bookings
                .into_iter()
                .map(BookingResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}

/// GET /api/v1/bookings/{id} (guest, listing host or admin)
pub async fn get_booking(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.bookings.get_booking(&auth.actor, path.into_inner()).await {
        Ok(booking) => HttpResponse::Ok().json(BookingResponse::from(booking)),
        Err(error) => handle_domain_error(&error),
    }
}

/// DELETE /api/v1/bookings/{id}
///
/// Cancelling removes the booking, which frees its dates.
pub async fn cancel_booking(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state
        .bookings
        .cancel_booking(&auth.actor, path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Booking cancelled")),
        Err(error) => handle_domain_error(&error),
    }
}
