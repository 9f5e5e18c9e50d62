//! Request extractors shared by handlers.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT bearer token.
//! - [`json::ValidatedJson`] -- Deserializes and validates a JSON request body.
//! - [`path::PathParam`] -- Path parameters with JSON rejections.

pub mod auth;
pub mod json;
pub mod path;
