//! Services module
//! 
//! Lógica de negocio pura: generación del mapa de asientos y validación de
//! los campos condicionales del ticket. Ninguno de estos servicios hace I/O.

pub mod seat_map_service;
pub mod ticket_validator;
