use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{AddFavoriteRequest, FavoriteResponse, MessageResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/favorites")
            .route("", web::get().to(list_favorites))
            .route("", web::post().to(add_favorite))
            .route("/{id}", web::delete().to(remove_favorite)),
    );
}

/// POST /api/v1/favorites
///
/// Saves a listing for the caller. A blank note is replaced by the default
/// note; saving the same listing twice answers 409.
pub async fn add_favorite(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<AddFavoriteRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .favorites
        .add(&auth.actor, request.listing_id, request.note)
        .await
    {
        Ok(favorite) => HttpResponse::Created().json(FavoriteResponse::from(favorite)),
        Err(error) => handle_domain_error(&error),
    }
}

pub async fn list_favorites(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.favorites.list(&auth.actor).await {
        Ok(favorites) => HttpResponse::Ok().json(
            favorites
                .into_iter()
                .map(FavoriteResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}

pub async fn remove_favorite(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.favorites.remove(&auth.actor, path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Favorite removed")),
        Err(error) => handle_domain_error(&error),
    }
}
