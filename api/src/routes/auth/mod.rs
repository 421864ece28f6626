//! Authentication route handlers
//!
//! - Registration and login
//! - Logout (revokes the presented token)
//! - Current user profile

pub mod login;
pub mod logout;
pub mod me;
pub mod register;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register::register))
            .route("/login", web::post().to(login::login))
            .route("/logout", web::post().to(logout::logout))
            .route("/me", web::get().to(me::me)),
    );
}
