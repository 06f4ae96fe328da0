use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::{
    AirlineClass, BusSeatType, Itinerary, Ticket, TransportKind, TICKET_STATUS_CONFIRMED,
};
use crate::services::ticket_validator::seat_class_violation;
use crate::utils::validation::{validate_not_blank, validate_phone};

/// Distingue "campo ausente" (None) de "campo en null" (Some(None))
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn validate_create_seat_class(request: &CreateTicketRequest) -> Result<(), ValidationError> {
    match seat_class_violation(request.transport_kind, request.airline_class, request.bus_seat_type) {
        Some((field, message)) => {
            let mut error = ValidationError::new("seat_class");
            error.message = Some(message.into());
            error.add_param("field".into(), &field);
            Err(error)
        }
        None => Ok(()),
    }
}

// Request para comprar un ticket
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_create_seat_class"))]
pub struct CreateTicketRequest {
    #[validate(custom = "validate_not_blank")]
    pub passenger_name: String,

    #[validate(custom = "validate_phone")]
    pub phone: String,

    pub transport_kind: TransportKind,

    pub airline_class: Option<AirlineClass>,

    pub bus_seat_type: Option<BusSeatType>,

    /// Se normaliza y valida contra la disposición del itinerario en el controller
    pub seat_number: Option<String>,

    pub itinerary_id: Uuid,

    pub user_id: Uuid,
}

// Request para actualizar un ticket; `null` borra los campos opcionales
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTicketRequest {
    #[validate(custom = "validate_not_blank")]
    pub passenger_name: Option<String>,

    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,

    pub transport_kind: Option<TransportKind>,

    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub airline_class: Option<Option<AirlineClass>>,

    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub bus_seat_type: Option<Option<BusSeatType>>,

    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub seat_number: Option<Option<String>>,

    pub itinerary_id: Option<Uuid>,
}

impl UpdateTicketRequest {
    /// Superpone el parche sobre el ticket almacenado
    pub fn apply(self, ticket: &mut Ticket) {
        if let Some(name) = self.passenger_name {
            ticket.passenger_name = name.trim().to_string();
        }
        if let Some(phone) = self.phone {
            ticket.phone = phone.trim().to_string();
        }
        if let Some(kind) = self.transport_kind {
            ticket.transport_kind = kind;
        }
        if let Some(airline_class) = self.airline_class {
            ticket.airline_class = airline_class;
        }
        if let Some(bus_seat_type) = self.bus_seat_type {
            ticket.bus_seat_type = bus_seat_type;
        }
        if let Some(seat_number) = self.seat_number {
            ticket.seat_number = seat_number;
        }
        if let Some(itinerary_id) = self.itinerary_id {
            ticket.itinerary_id = itinerary_id;
        }
    }
}

// Query de búsqueda de tickets
#[derive(Debug, Default, Deserialize)]
pub struct TicketSearchQuery {
    pub itinerary_id: Option<Uuid>,
    pub transport_kind: Option<TransportKind>,
    pub passenger_name: Option<String>,
}

// Ticket enriquecido con los datos de su itinerario
#[derive(Debug, Serialize, Deserialize)]
pub struct TicketDetails {
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
    pub status: String,
    pub trip: TripSummary,
}

// Campos del itinerario copiados en cada ticket
#[derive(Debug, Serialize, Deserialize)]
pub struct TripSummary {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub carrier: String,
    pub departure_time: String,
    pub duration: String,
    pub price: Decimal,
    pub transport_kind: TransportKind,
    pub seat_class: String,
}

impl From<&Itinerary> for TripSummary {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            origin: itinerary.origin.clone(),
            destination: itinerary.destination.clone(),
            date: itinerary.date,
            carrier: itinerary.carrier.clone(),
            departure_time: itinerary.departure_time.clone(),
            duration: itinerary.duration.clone(),
            price: itinerary.price,
            transport_kind: itinerary.transport_kind,
            seat_class: itinerary.seat_class.clone(),
        }
    }
}

impl TicketDetails {
    pub fn compose(ticket: Ticket, itinerary: &Itinerary) -> Self {
        Self {
            id: ticket.id,
            passenger_name: ticket.passenger_name,
            phone: ticket.phone,
            transport_kind: ticket.transport_kind,
            airline_class: ticket.airline_class,
            bus_seat_type: ticket.bus_seat_type,
            seat_number: ticket.seat_number,
            itinerary_id: ticket.itinerary_id,
            user_id: ticket.user_id,
            created_at: ticket.created_at,
            status: TICKET_STATUS_CONFIRMED.to_string(),
            trip: TripSummary::from(itinerary),
        }
    }
}
