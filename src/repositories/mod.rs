//! Repositorios
//! 
//! Cada repositorio es un trait async con su implementación PostgreSQL.
//! Los handlers sólo ven los traits a través del `AppState`.

pub mod admin_repository;
pub mod itinerary_repository;
pub mod ticket_repository;
pub mod user_repository;

pub use admin_repository::{AdminRepository, PgAdminRepository};
pub use itinerary_repository::{ItineraryRepository, PgItineraryRepository, TRIP_HAS_TICKETS};
pub use ticket_repository::{PgTicketRepository, TicketRepository};
pub use user_repository::{PgUserRepository, UserRepository, EMAIL_ALREADY_REGISTERED};
