//! Backend de venta de pasajes de avión y autobús
//! 
//! Itinerarios, mapas de asientos, tickets y cuentas de pasajeros y
//! administradores sobre axum + PostgreSQL.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
