//! Servicio de mapa de asientos
//! 
//! Genera la grilla completa de asientos de un itinerario según su tipo de
//! transporte y marca como ocupados los asientos que ya aparecen en tickets.
//! No tiene estado ni efectos secundarios.

use std::collections::HashSet;

use crate::dto::seat_dto::{SeatMapResponse, SeatStatus};
use crate::models::TransportKind;

/// Disposición de filas y columnas de un vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatLayout {
    pub rows: u32,
    pub columns: u32,
}

impl SeatLayout {
    /// Autobús: 10 x 4. Cualquier otro transporte (avión): 20 x 6.
    pub fn for_transport(kind: TransportKind) -> Self {
        match kind {
            TransportKind::Bus => Self { rows: 10, columns: 4 },
            TransportKind::Flight => Self { rows: 20, columns: 6 },
        }
    }

    pub fn total_seats(&self) -> u32 {
        self.rows * self.columns
    }

    /// Etiqueta `{fila}{letra}`; la columna 1 es 'A'
    pub fn label(row: u32, column: u32) -> String {
        let letter = char::from(b'A' + (column - 1) as u8);
        format!("{}{}", row, letter)
    }

    /// Descompone una etiqueta normalizada en (fila, columna).
    /// La fila son sólo dígitos ASCII sin cero inicial; nada de signos.
    pub fn parse(&self, label: &str) -> Option<(u32, u32)> {
        let (split, letter) = label.char_indices().last()?;
        let row_part = &label[..split];
        if !letter.is_ascii_uppercase()
            || row_part.is_empty()
            || row_part.starts_with('0')
            || !row_part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        let row: u32 = row_part.parse().ok()?;
        let column = (letter as u32) - ('A' as u32) + 1;
        ((1..=self.rows).contains(&row) && (1..=self.columns).contains(&column))
            .then_some((row, column))
    }

    /// Indica si la etiqueta (ya normalizada) existe en esta disposición
    pub fn contains(&self, label: &str) -> bool {
        self.parse(label).is_some()
    }

    /// Forma canónica de una etiqueta recibida del cliente, si existe en la disposición
    pub fn canonical(&self, raw: &str) -> Option<String> {
        self.parse(&normalize_seat_label(raw))
            .map(|(row, column)| Self::label(row, column))
    }
}

/// Normaliza una etiqueta de asiento recibida del cliente ("3c " -> "3C")
pub fn normalize_seat_label(label: &str) -> String {
    label.trim().to_ascii_uppercase()
}

/// Resultado de consultar un asiento concreto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatAvailability {
    Available,
    Occupied,
    /// La etiqueta no existe en la disposición del vehículo
    Unknown,
}

/// Construye el mapa de asientos a partir de las etiquetas ya vendidas
pub fn build_seat_map(kind: TransportKind, occupied: &HashSet<String>) -> SeatMapResponse {
    let layout = SeatLayout::for_transport(kind);

    let grid: Vec<Vec<SeatStatus>> = (1..=layout.rows)
        .map(|row| {
            (1..=layout.columns)
                .map(|column| {
                    let label = SeatLayout::label(row, column);
                    let occupied = occupied.contains(&label);
                    SeatStatus { label, occupied }
                })
                .collect()
        })
        .collect();

    let occupied_seats = grid.iter().flatten().filter(|seat| seat.occupied).count() as u32;

    SeatMapResponse {
        grid,
        rows: layout.rows,
        columns: layout.columns,
        transport_kind: kind,
        total_seats: layout.total_seats(),
        occupied_seats,
    }
}

/// Consulta consultiva de disponibilidad de un asiento
pub fn check_seat_availability(
    kind: TransportKind,
    occupied: &HashSet<String>,
    label: &str,
) -> SeatAvailability {
    match SeatLayout::for_transport(kind).canonical(label) {
        None => SeatAvailability::Unknown,
        Some(label) if occupied.contains(&label) => SeatAvailability::Occupied,
        Some(_) => SeatAvailability::Available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(labels: &[&str]) -> HashSet<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_bus_layout_is_10_by_4() {
        let map = build_seat_map(TransportKind::Bus, &HashSet::new());
        assert_eq!(map.rows, 10);
        assert_eq!(map.columns, 4);
        assert_eq!(map.grid.len(), 10);
        assert!(map.grid.iter().all(|row| row.len() == 4));
        assert_eq!(map.grid.iter().flatten().count(), 40);
        assert_eq!(map.total_seats, 40);
    }

    #[test]
    fn test_flight_layout_is_20_by_6() {
        let map = build_seat_map(TransportKind::Flight, &HashSet::new());
        assert_eq!((map.rows, map.columns), (20, 6));
        assert_eq!(map.grid.iter().flatten().count(), 120);
        assert_eq!(map.grid[19][5].label, "20F");
    }

    #[test]
    fn test_labels_are_unique_and_ordered() {
        let map = build_seat_map(TransportKind::Flight, &HashSet::new());
        let labels: Vec<&str> = map.grid.iter().flatten().map(|s| s.label.as_str()).collect();
        let unique: HashSet<&str> = labels.iter().copied().collect();
        assert_eq!(unique.len(), labels.len());
        assert_eq!(&labels[..3], &["1A", "1B", "1C"]);
        assert_eq!(SeatLayout::label(1, 2), "1B");
        assert_eq!(SeatLayout::label(10, 4), "10D");
    }

    #[test]
    fn test_single_occupied_seat() {
        let map = build_seat_map(TransportKind::Flight, &occupied(&["3C"]));
        let taken: Vec<&str> = map
            .grid
            .iter()
            .flatten()
            .filter(|s| s.occupied)
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(taken, vec!["3C"]);
        assert_eq!(map.occupied_seats, 1);
        assert_eq!(map.grid.iter().flatten().filter(|s| !s.occupied).count(), 119);
    }

    #[test]
    fn test_labels_outside_layout_do_not_mark_seats() {
        let map = build_seat_map(TransportKind::Bus, &occupied(&["3F", "11A"]));
        assert_eq!(map.occupied_seats, 0);
    }

    #[test]
    fn test_layout_contains() {
        let bus = SeatLayout::for_transport(TransportKind::Bus);
        assert!(bus.contains("1A"));
        assert!(bus.contains("10D"));
        assert!(!bus.contains("10E"));
        assert!(!bus.contains("11A"));
        assert!(!bus.contains("0A"));
        assert!(!bus.contains("01A"));
        assert!(!bus.contains("A"));
        assert!(!bus.contains(""));
        assert!(!bus.contains("1a"));
        assert!(!bus.contains("+3C"));
        assert!(!bus.contains("+03C"));
        assert!(!bus.contains("-1A"));
        assert!(!bus.contains(" 3C"));
        assert!(!bus.contains("3Ç"));
    }

    #[test]
    fn test_canonical_label() {
        let flight = SeatLayout::for_transport(TransportKind::Flight);
        assert_eq!(flight.canonical(" 3c "), Some("3C".to_string()));
        assert_eq!(flight.canonical("20F"), Some("20F".to_string()));
        assert_eq!(flight.canonical("+3C"), None);
        assert_eq!(flight.canonical("03C"), None);
        assert_eq!(flight.canonical("21A"), None);
        assert_eq!(flight.canonical(""), None);
    }

    #[test]
    fn test_check_seat_availability() {
        let taken = occupied(&["3C"]);
        assert_eq!(
            check_seat_availability(TransportKind::Flight, &taken, "3C"),
            SeatAvailability::Occupied
        );
        assert_eq!(
            check_seat_availability(TransportKind::Flight, &taken, " 3c"),
            SeatAvailability::Occupied
        );
        assert_eq!(
            check_seat_availability(TransportKind::Flight, &taken, "3D"),
            SeatAvailability::Available
        );
        assert_eq!(
            check_seat_availability(TransportKind::Bus, &taken, "3F"),
            SeatAvailability::Unknown
        );
        assert_eq!(
            check_seat_availability(TransportKind::Flight, &taken, "+3C"),
            SeatAvailability::Unknown
        );
    }
}
