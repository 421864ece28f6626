//! Listing catalogue, host listing management, moderation and availability

use actix_web::{web, HttpResponse};
use bnb_core::domain::entities::listing::Listing;
use bnb_core::domain::value_objects::ListingFilter;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{
    AvailabilityRequest, AvailabilityResponse, CreateListingRequest, ListingImageResponse,
    ListingQuery, ListingResponse, ListingStatusRequest, MessageResponse, UpdateListingRequest,
};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/listings")
            .route("", web::get().to(list_listings))
            .route("", web::post().to(create_listing))
            .route("/{id}", web::get().to(get_listing))
            .route("/{id}", web::put().to(update_listing))
            .route("/{id}", web::delete().to(delete_listing))
            .route("/{id}/image", web::get().to(listing_image))
            .route("/{id}/status", web::put().to(set_listing_status))
            .route("/{id}/availability", web::post().to(check_availability)),
    );
}

fn listings_json(listings: Vec<Listing>) -> HttpResponse {
    HttpResponse::Ok().json(
        listings
            .into_iter()
            .map(ListingResponse::from)
            .collect::<Vec<_>>(),
    )
}

/// GET /api/v1/listings?title=&location=&minPrice=&maxPrice=
///
/// Public. Text filters are case-insensitive substrings; price bounds are
/// inclusive.
pub async fn list_listings(
    state: web::Data<AppState>,
    query: web::Query<ListingQuery>,
) -> HttpResponse {
    let filter = ListingFilter::from(query.into_inner());
    match state.listings.list(&filter).await {
        Ok(listings) => listings_json(listings),
        Err(error) => handle_domain_error(&error),
    }
}

/// GET /api/v1/listings/{id}
pub async fn get_listing(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.listings.get(path.into_inner()).await {
        Ok(listing) => HttpResponse::Ok().json(ListingResponse::from(listing)),
        Err(error) => handle_domain_error(&error),
    }
}

/// GET /api/v1/listings/{id}/image
pub async fn listing_image(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    let listing_id = path.into_inner();
    match state.listings.image_url(listing_id).await {
        Ok(image_url) => HttpResponse::Ok().json(ListingImageResponse {
            listing_id,
            image_url,
        }),
        Err(error) => handle_domain_error(&error),
    }
}

/// POST /api/v1/listings (hosts)
///
/// ## Errors
/// - 400 Bad Request: Missing title or location, non-positive price, bad image URL
/// - 403 Forbidden: Caller is not a host
pub async fn create_listing(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateListingRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state.listings.create(&auth.actor, request.into()).await {
        Ok(listing) => HttpResponse::Created().json(ListingResponse::from(listing)),
        Err(error) => handle_domain_error(&error),
    }
}

/// PUT /api/v1/listings/{id} (owning host)
pub async fn update_listing(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateListingRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .listings
        .update(&auth.actor, path.into_inner(), request.into())
        .await
    {
        Ok(listing) => HttpResponse::Ok().json(ListingResponse::from(listing)),
        Err(error) => handle_domain_error(&error),
    }
}

/// DELETE /api/v1/listings/{id} (owning host or admin)
///
/// Bookings, favorites and reviews of the listing go with it.
pub async fn delete_listing(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.listings.delete(&auth.actor, path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Listing deleted")),
        Err(error) => handle_domain_error(&error),
    }
}

/// PUT /api/v1/listings/{id}/status (admin moderation)
pub async fn set_listing_status(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<ListingStatusRequest>,
) -> HttpResponse {
    match state
        .listings
        .set_status(&auth.actor, path.into_inner(), &request.status)
        .await
    {
        Ok(listing) => HttpResponse::Ok().json(ListingResponse::from(listing)),
        Err(error) => handle_domain_error(&error),
    }
}

/// POST /api/v1/listings/{id}/availability
///
/// Public. Answers whether `[checkIn, checkOut)` is free on the listing,
/// naming one blocking booking when it is not. Nothing is reserved.
///
/// # Request Body
///
/// ```json
/// { "checkIn": "2024-06-01", "checkOut": "2024-06-05" }
/// ```
pub async fn check_availability(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<AvailabilityRequest>,
) -> HttpResponse {
    match state
        .bookings
        .check_availability(path.into_inner(), &request.check_in, &request.check_out)
        .await
    {
        Ok(availability) => HttpResponse::Ok().json(AvailabilityResponse::from(availability)),
        Err(error) => handle_domain_error(&error),
    }
}
