//! # Fullstackbnb API
//!
//! HTTP layer of the Fullstackbnb backend: request and response bodies,
//! bearer-token authentication, error translation and the route table
//! mounted under `/api/v1`.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState, Repositories};
