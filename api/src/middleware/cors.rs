//! CORS middleware built from [`CorsConfig`].
//!
//! `*` in the allowed origins (the development default) allows any origin;
//! otherwise only the listed origins are accepted.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use bnb_shared::config::CorsConfig;

pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        log::info!("CORS: allowing any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            log::info!("CORS: allowing origin {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
