//! Controllers
//! 
//! Orquestan validación, repositorios y servicios para cada recurso.
//! Los handlers de `routes` construyen un controller por request.

pub mod auth_controller;
pub mod itinerary_controller;
pub mod ticket_controller;
pub mod user_controller;
