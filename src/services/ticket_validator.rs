//! Validación de campos condicionales del ticket
//! 
//! La clase aérea y el tipo de poltrona de autobús son excluyentes: cuál se
//! permite depende del tipo de transporte del ticket. Predicado puro, sin I/O.

use crate::models::{AirlineClass, BusSeatType, Ticket, TransportKind};
use crate::utils::errors::{validation_error, AppError};

pub const BUS_SEAT_TYPE_ONLY_FOR_BUS: &str = "bus seat type only allowed for bus tickets";
pub const AIRLINE_CLASS_ONLY_FOR_FLIGHT: &str = "airline class only allowed for flight tickets";
pub const TRANSPORT_KIND_MISMATCH: &str = "ticket transport kind must match the itinerary transport kind";

/// Campo y mensaje de la regla violada, si la hay
pub fn seat_class_violation(
    kind: TransportKind,
    airline_class: Option<AirlineClass>,
    bus_seat_type: Option<BusSeatType>,
) -> Option<(&'static str, &'static str)> {
    match kind {
        TransportKind::Flight if bus_seat_type.is_some() => {
            Some(("bus_seat_type", BUS_SEAT_TYPE_ONLY_FOR_BUS))
        }
        TransportKind::Bus if airline_class.is_some() => {
            Some(("airline_class", AIRLINE_CLASS_ONLY_FOR_FLIGHT))
        }
        _ => None,
    }
}

/// Valida los campos de clase de asiento contra el tipo de transporte
pub fn validate_seat_class_fields(
    kind: TransportKind,
    airline_class: Option<AirlineClass>,
    bus_seat_type: Option<BusSeatType>,
) -> Result<(), AppError> {
    match seat_class_violation(kind, airline_class, bus_seat_type) {
        Some((field, message)) => Err(validation_error(field, message)),
        None => Ok(()),
    }
}

/// Valida un ticket completo (por ejemplo, el resultado de una actualización parcial)
pub fn validate_ticket(ticket: &Ticket) -> Result<(), AppError> {
    validate_seat_class_fields(ticket.transport_kind, ticket.airline_class, ticket.bus_seat_type)
}

/// El tipo de transporte del ticket debe coincidir con el del itinerario
pub fn validate_matches_itinerary(
    ticket_kind: TransportKind,
    itinerary_kind: TransportKind,
) -> Result<(), AppError> {
    if ticket_kind != itinerary_kind {
        return Err(validation_error("transport_kind", TRANSPORT_KIND_MISMATCH));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_rejects_bus_seat_type() {
        assert_eq!(
            seat_class_violation(TransportKind::Flight, None, Some(BusSeatType::Sleeper)),
            Some(("bus_seat_type", BUS_SEAT_TYPE_ONLY_FOR_BUS))
        );
        assert!(validate_seat_class_fields(TransportKind::Flight, None, Some(BusSeatType::Sleeper)).is_err());
    }

    #[test]
    fn test_bus_rejects_airline_class() {
        assert_eq!(
            seat_class_violation(TransportKind::Bus, Some(AirlineClass::Economy), None),
            Some(("airline_class", AIRLINE_CLASS_ONLY_FOR_FLIGHT))
        );
    }

    #[test]
    fn test_matching_fields_pass() {
        assert!(validate_seat_class_fields(TransportKind::Flight, Some(AirlineClass::Business), None).is_ok());
        assert!(validate_seat_class_fields(TransportKind::Bus, None, Some(BusSeatType::Conventional)).is_ok());
        assert!(validate_seat_class_fields(TransportKind::Bus, None, None).is_ok());
        assert!(validate_seat_class_fields(TransportKind::Flight, None, None).is_ok());
    }

    #[test]
    fn test_transport_kind_must_match_itinerary() {
        assert!(validate_matches_itinerary(TransportKind::Bus, TransportKind::Bus).is_ok());
        assert!(matches!(
            validate_matches_itinerary(TransportKind::Bus, TransportKind::Flight),
            Err(AppError::Validation(_))
        ));
    }
}
