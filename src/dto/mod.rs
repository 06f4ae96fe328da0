//! DTOs de la API
//! 
//! Requests y responses JSON; los modelos de base de datos viven en `models`.

pub mod auth_dto;
pub mod itinerary_dto;
pub mod seat_dto;
pub mod ticket_dto;
