//! Middleware del sistema
//! 
//! Autenticación JWT por rol y CORS.

pub mod auth;
pub mod cors;

pub use auth::{require_admin, require_user, AuthenticatedAdmin, AuthenticatedUser};
pub use cors::cors_layer;
