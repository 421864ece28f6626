//! Authorization policy
//!
//! Every service checks permissions through one function,
//! [`is_authorized`], once per operation and after the target resource has
//! been resolved.

mod rules;


pub use rules::{authorize, is_authorized, Action, Resource};
