//! Utilidades de validación
//! 
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos, usadas desde los `#[validate(...)]` de los DTOs.

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Etiqueta de asiento: fila numérica seguida de la letra de columna ("3C")
    pub static ref SEAT_LABEL_RE: Regex = Regex::new(r"^[1-9][0-9]?[A-Za-z]$").unwrap();
}

fn error_with_message(code: &'static str, message: &'static str, value: &str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error.add_param("value".into(), &value.to_string());
    error
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        let mut error = error_with_message("date", "date must use the YYYY-MM-DD format", value);
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar horario de salida en formato `HH:MM`
pub fn validate_departure_time(value: &str) -> Result<(), ValidationError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map(|_| ())
        .map_err(|_| error_with_message("time", "departure time must use the HH:MM format", value))
}

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with_message("not_blank", "value cannot be blank", value));
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    if !allowed || !(8..=15).contains(&digits) {
        return Err(error_with_message("phone", "phone must contain between 8 and 15 digits", value));
    }
    Ok(())
}
