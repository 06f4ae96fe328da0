//! Modelo de Ticket (passagem)
//! 
//! Un ticket es la compra de un pasajero para un itinerario, opcionalmente
//! ligada a un asiento. Mapea a la tabla `tickets`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

use super::itinerary::TransportKind;

/// Estado fijo con el que se devuelven los tickets emitidos
pub const TICKET_STATUS_CONFIRMED: &str = "CONFIRMED";

/// Mensaje del conflicto de asiento, compartido por la consulta y la compra
pub const SEAT_ALREADY_OCCUPIED: &str = "seat already occupied";

/// Clase aérea - mapea al ENUM airline_class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "airline_class", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AirlineClass {
    Economy,
    Business,
    FirstClass,
}

/// Tipo de poltrona de autobús - mapea al ENUM bus_seat_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "bus_seat_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusSeatType {
    Sleeper,
    SemiSleeper,
    Executive,
    Conventional,
}

/// Ticket principal - mapea a la tabla tickets
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub id: Uuid,
    pub passenger_name: String,
    pub phone: String,
    pub transport_kind: TransportKind,
    pub airline_class: Option<AirlineClass>,
    pub bus_seat_type: Option<BusSeatType>,
    pub seat_number: Option<String>,
    pub itinerary_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Datos para insertar un ticket nuevo
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub passenger_name: String,
    pub phone: String,
    pub transport_kind: TransportKind,
    pub airline_class: Option<AirlineClass>,
    pub bus_seat_type: Option<BusSeatType>,
    pub seat_number: Option<String>,
    pub itinerary_id: Uuid,
    pub user_id: Uuid,
}

impl NewTicket {
    pub fn into_ticket(self, id: Uuid, created_at: DateTime<Utc>) -> Ticket {
        Ticket {
            id,
            passenger_name: self.passenger_name,
            phone: self.phone,
            transport_kind: self.transport_kind,
            airline_class: self.airline_class,
            bus_seat_type: self.bus_seat_type,
            seat_number: self.seat_number,
            itinerary_id: self.itinerary_id,
            user_id: self.user_id,
            created_at,
        }
    }
}

/// Filtros para búsqueda de tickets
#[derive(Debug, Clone, Default)]
pub struct TicketFilters {
    pub itinerary_id: Option<Uuid>,
    pub transport_kind: Option<TransportKind>,
    /// Subcadena del nombre, sin distinguir mayúsculas
    pub passenger_name: Option<String>,
    pub user_id: Option<Uuid>,
}

impl TicketFilters {
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.itinerary_id.map_or(true, |id| ticket.itinerary_id == id)
            && self.transport_kind.map_or(true, |k| ticket.transport_kind == k)
            && self.user_id.map_or(true, |u| ticket.user_id == u)
            && self.passenger_name.as_deref().map_or(true, |name| {
                ticket
                    .passenger_name
                    .to_lowercase()
                    .contains(&name.to_lowercase())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_class_wire_names() {
        assert_eq!(
            serde_json::to_string(&AirlineClass::FirstClass).unwrap(),
            "\"FIRST_CLASS\""
        );
        let seat: BusSeatType = serde_json::from_str("\"SEMI_SLEEPER\"").unwrap();
        assert_eq!(seat, BusSeatType::SemiSleeper);
    }

    #[test]
    fn test_passenger_name_filter_is_case_insensitive() {
        let ticket = NewTicket {
            passenger_name: "Maria da Silva".to_string(),
            phone: "81999990000".to_string(),
            transport_kind: TransportKind::Bus,
            airline_class: None,
            bus_seat_type: Some(BusSeatType::Executive),
            seat_number: None,
            itinerary_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
        }
        .into_ticket(Uuid::new_v4(), Utc::now());

        let filters = TicketFilters {
            passenger_name: Some("SILVA".to_string()),
            ..Default::default()
        };
        assert!(filters.matches(&ticket));

        let filters = TicketFilters {
            transport_kind: Some(TransportKind::Flight),
            ..Default::default()
        };
        assert!(!filters.matches(&ticket));
    }
}
