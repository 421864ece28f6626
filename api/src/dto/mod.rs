//! Request and response bodies; every JSON key is camelCase

pub mod auth;
pub mod booking;
pub mod listing;
pub mod social;
pub mod user;

pub use auth::*;
pub use booking::*;
pub use listing::*;
pub use social::*;
pub use user::*;
