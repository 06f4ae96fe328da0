//! Modelos del sistema
//! 
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL (ver `migrations/`).

pub mod itinerary;
pub mod ticket;
pub mod user;

pub use itinerary::{Itinerary, ItineraryFilters, NewItinerary, TransportKind};
pub use ticket::{
    AirlineClass, BusSeatType, NewTicket, Ticket, TicketFilters, SEAT_ALREADY_OCCUPIED,
    TICKET_STATUS_CONFIRMED,
};
pub use user::{Admin, NewAccount, User, UserChanges};
