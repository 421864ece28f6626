//! Route table mounted under `/api/v1`

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod favorites;
pub mod host;
pub mod listings;
pub mod reviews;
pub mod users;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    auth::configure(cfg);
    users::configure(cfg);
    listings::configure(cfg);
    bookings::configure(cfg);
    host::configure(cfg);
    favorites::configure(cfg);
    reviews::configure(cfg);
    admin::configure(cfg);
}
