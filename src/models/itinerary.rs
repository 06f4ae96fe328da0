//! Modelo de Itinerary
//! 
//! Un itinerario es un viaje programado (vuelo o autobús) entre dos ciudades.
//! Mapea exactamente a la tabla `itineraries`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo de transporte - mapea al ENUM transport_kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "transport_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Flight,
    Bus,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Flight => "flight",
            TransportKind::Bus => "bus",
        }
    }
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Itinerary principal - mapea a la tabla itineraries
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Itinerary {
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

/// Datos para insertar un itinerario nuevo
#[derive(Debug, Clone)]
pub struct NewItinerary {
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
}

impl NewItinerary {
    pub fn into_itinerary(self, id: Uuid, created_at: DateTime<Utc>) -> Itinerary {
        Itinerary {
            id,
            origin: self.origin,
            destination: self.destination,
            date: self.date,
            carrier: self.carrier,
            departure_time: self.departure_time,
            duration: self.duration,
            price: self.price,
            transport_kind: self.transport_kind,
            seat_class: self.seat_class,
            admin_id: self.admin_id,
            created_at,
        }
    }
}

/// Filtros para búsqueda de itinerarios; los campos vacíos no filtran
#[derive(Debug, Clone, Default)]
pub struct ItineraryFilters {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ItineraryFilters {
    pub fn matches(&self, itinerary: &Itinerary) -> bool {
        self.origin.as_deref().map_or(true, |o| itinerary.origin == o)
            && self.destination.as_deref().map_or(true, |d| itinerary.destination == d)
            && self.date.map_or(true, |d| itinerary.date == d)
    }
}
