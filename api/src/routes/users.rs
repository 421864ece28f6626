//! Account management: profiles, deletion, roles and a user's bookings

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{BookingResponse, ChangeRoleRequest, MessageResponse, UpdateUserRequest, UserResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(list_users))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user))
            .route("/{id}/role", web::put().to(change_role))
            .route("/{id}/bookings", web::get().to(user_bookings)),
    );
}

/// GET /api/v1/users (admin)
pub async fn list_users(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.users.list_users(&auth.actor).await {
        Ok(users) => {
            HttpResponse::Ok().json(users.into_iter().map(UserResponse::from).collect::<Vec<_>>())
        }
        Err(error) => handle_domain_error(&error),
    }
}

/// GET /api/v1/users/{id} (self or admin)
pub async fn get_user(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.users.get_user(&auth.actor, path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}

/// PUT /api/v1/users/{id}
///
/// Changes any of `username`, `email` and `password`. Roles change through
/// `PUT /users/{id}/role` only.
pub async fn update_user(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateUserRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .users
        .update_user(&auth.actor, path.into_inner(), request.into())
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}

/// DELETE /api/v1/users/{id}
///
/// Removes the account together with its bookings, favorites and reviews,
/// and for hosts their listings.
pub async fn delete_user(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = path.into_inner();
    match state.users.delete_user(&auth.actor, user_id).await {
        Ok(()) => {
            log::info!("User {} deleted by {}", user_id, auth.actor.id);
            HttpResponse::Ok().json(MessageResponse::new("User deleted"))
        }
        Err(error) => handle_domain_error(&error),
    }
}

/// PUT /api/v1/users/{id}/role (admin)
pub async fn change_role(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<ChangeRoleRequest>,
) -> HttpResponse {
    match state
        .users
        .change_role(&auth.actor, path.into_inner(), &request.role)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}

/// GET /api/v1/users/{id}/bookings (self or admin)
pub async fn user_bookings(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state
        .bookings
        .list_user_bookings(&auth.actor, path.into_inner())
        .await
    {
        Ok(bookings) => HttpResponse::Ok().json(
            bookings
                .into_iter()
                .map(BookingResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}
