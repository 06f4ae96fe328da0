use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::TransportKind;

// Un asiento de la grilla
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatStatus {
    pub label: String,
    pub occupied: bool,
}

// Mapa completo de asientos de un itinerario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMapResponse {
    pub grid: Vec<Vec<SeatStatus>>,
    pub rows: u32,
    pub columns: u32,
    pub transport_kind: TransportKind,
    pub total_seats: u32,
    pub occupied_seats: u32,
}

// Query de la consulta de reserva de asiento
#[derive(Debug, Deserialize)]
pub struct ReserveSeatQuery {
    pub itinerary_id: Uuid,
    pub seat_number: String,
    pub user_id: Option<Uuid>,
}

// Resultado consultivo de la reserva (no escribe nada)
#[derive(Debug, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub success: bool,
    pub message: String,
}

impl ReservationResponse {
    pub fn available() -> Self {
        Self {
            success: true,
            message: "seat available".to_string(),
        }
    }

    pub fn rejected(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}
