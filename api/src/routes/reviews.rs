use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{CreateReviewRequest, MessageResponse, ReviewQuery, ReviewResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reviews")
            .route("", web::get().to(list_reviews))
            .route("", web::post().to(create_review))
            .route("/{id}", web::delete().to(delete_review)),
    );
}

/// GET /api/v1/reviews?listingId=
///
/// Public. Without `listingId` every review is returned.
pub async fn list_reviews(
    state: web::Data<AppState>,
    query: web::Query<ReviewQuery>,
) -> HttpResponse {
    match state.reviews.list(query.listing_id).await {
        Ok(reviews) => HttpResponse::Ok().json(
            reviews
                .into_iter()
                .map(ReviewResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}

/// POST /api/v1/reviews
///
/// ## Errors
/// - 400 Bad Request: Rating outside 1..=5 or comment too long
/// - 403 Forbidden: Hosts cannot review their own listings
/// - 404 Not Found: Unknown listing
pub async fn create_review(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateReviewRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state.reviews.create(&auth.actor, request.into()).await {
        Ok(review) => HttpResponse::Created().json(ReviewResponse::from(review)),
        Err(error) => handle_domain_error(&error),
    }
}

/// DELETE /api/v1/reviews/{id} (author or admin)
pub async fn delete_review(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.reviews.delete(&auth.actor, path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Review deleted")),
        Err(error) => handle_domain_error(&error),
    }
}
