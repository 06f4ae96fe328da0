use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::{Itinerary, TransportKind};
use crate::utils::validation::{validate_departure_time, validate_not_blank};

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        let mut error = ValidationError::new("price");
        error.message = Some("price cannot be negative".into());
        return Err(error);
    }
    Ok(())
}

// Request para crear un itinerario (el admin sale del token)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateItineraryRequest {
    #[validate(custom = "validate_not_blank")]
    pub origin: String,

    #[validate(custom = "validate_not_blank")]
    pub destination: String,

    pub date: NaiveDate,

    #[validate(length(min = 2, max = 100, message = "carrier must have between 2 and 100 characters"))]
    pub carrier: String,

    #[validate(custom = "validate_departure_time")]
    pub departure_time: String,

    #[validate(custom = "validate_not_blank")]
    pub duration: String,

    #[validate(custom = "validate_price")]
    pub price: Decimal,

    pub transport_kind: TransportKind,

    #[validate(custom = "validate_not_blank")]
    pub seat_class: String,
}

// Request para actualizar un itinerario existente
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateItineraryRequest {
    #[validate(custom = "validate_not_blank")]
    pub origin: Option<String>,

    #[validate(custom = "validate_not_blank")]
    pub destination: Option<String>,

    pub date: Option<NaiveDate>,

    #[validate(length(min = 2, max = 100, message = "carrier must have between 2 and 100 characters"))]
    pub carrier: Option<String>,

    #[validate(custom = "validate_departure_time")]
    pub departure_time: Option<String>,

    #[validate(custom = "validate_not_blank")]
    pub duration: Option<String>,

    #[validate(custom = "validate_price")]
    pub price: Option<Decimal>,

    pub transport_kind: Option<TransportKind>,

    #[validate(custom = "validate_not_blank")]
    pub seat_class: Option<String>,
}

impl UpdateItineraryRequest {
    /// Superpone los campos presentes sobre el itinerario almacenado
    pub fn apply(self, itinerary: &mut Itinerary) {
        if let Some(origin) = self.origin {
            itinerary.origin = origin.trim().to_string();
        }
        if let Some(destination) = self.destination {
            itinerary.destination = destination.trim().to_string();
        }
        if let Some(date) = self.date {
            itinerary.date = date;
        }
        if let Some(carrier) = self.carrier {
            itinerary.carrier = carrier.trim().to_string();
        }
        if let Some(departure_time) = self.departure_time {
            itinerary.departure_time = departure_time.trim().to_string();
        }
        if let Some(duration) = self.duration {
            itinerary.duration = duration.trim().to_string();
        }
        if let Some(price) = self.price {
            itinerary.price = price;
        }
        if let Some(kind) = self.transport_kind {
            itinerary.transport_kind = kind;
        }
        if let Some(seat_class) = self.seat_class {
            itinerary.seat_class = seat_class.trim().to_string();
        }
    }
}

// Query de búsqueda; la fecha llega como texto y se valida en el controller
#[derive(Debug, Default, Deserialize)]
pub struct ItinerarySearchQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
}

// Response de itinerario
#[derive(Debug, Serialize, Deserialize)]
pub struct ItineraryResponse {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub carrier: String,
    pub departure_time: String,
    pub duration: String,
    pub price: Decimal,
    pub transport_kind: TransportKind,
    pub seat_class: String,
    pub admin_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Itinerary> for ItineraryResponse {
    fn from(itinerary: Itinerary) -> Self {
        Self {
            id: itinerary.id,
            origin: itinerary.origin,
            destination: itinerary.destination,
            date: itinerary.date,
            carrier: itinerary.carrier,
            departure_time: itinerary.departure_time,
            duration: itinerary.duration,
            price: itinerary.price,
            transport_kind: itinerary.transport_kind,
            seat_class: itinerary.seat_class,
            admin_id: itinerary.admin_id,
            created_at: itinerary.created_at,
        }
    }
}
