pub mod auth;
pub mod root;
pub mod staff;
