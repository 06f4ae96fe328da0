use std::collections::HashMap;

use uuid::Uuid;
use validator::Validate;

use crate::dto::seat_dto::{ReservationResponse, ReserveSeatQuery};
use crate::dto::ticket_dto::{CreateTicketRequest, TicketDetails, TicketSearchQuery, UpdateTicketRequest};
use crate::models::{
    Itinerary, NewTicket, Ticket, TicketFilters, TransportKind, SEAT_ALREADY_OCCUPIED,
};
use crate::services::seat_map_service::{
    check_seat_availability, normalize_seat_label, SeatAvailability, SeatLayout,
};
use crate::utils::validation::SEAT_LABEL_RE;
use crate::services::ticket_validator::{validate_matches_itinerary, validate_ticket};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, validation_error, AppError, AppResult};

const SEAT_DOES_NOT_EXIST: &str = "seat does not exist";
const SEAT_LABEL_FORMAT: &str = "seat number must look like '3C'";

/// Normaliza la etiqueta, valida su formato y devuelve la forma canónica del
/// asiento en la disposición del vehículo. Una etiqueta vacía es "sin asiento".
fn checked_seat(kind: TransportKind, seat_number: Option<String>) -> AppResult<Option<String>> {
    let Some(label) = seat_number.map(|s| normalize_seat_label(&s)) else {
        return Ok(None);
    };
    if label.is_empty() {
        return Ok(None);
    }
    if !SEAT_LABEL_RE.is_match(&label) {
        return Err(validation_error("seat_number", SEAT_LABEL_FORMAT));
    }
    SeatLayout::for_transport(kind)
        .canonical(&label)
        .map(Some)
        .ok_or_else(|| validation_error("seat_number", SEAT_DOES_NOT_EXIST))
}

pub struct TicketController {
    state: AppState,
}

impl TicketController {
    pub fn new(state: &AppState) -> Self {
        Self { state: state.clone() }
    }

    async fn find_itinerary(&self, id: Uuid) -> AppResult<Itinerary> {
        self.state
            .itineraries
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("trip"))
    }

    async fn ensure_purchaser(&self, user_id: Uuid) -> AppResult<()> {
        self.state
            .users
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| not_found_error("purchaser"))
    }

    /// Ticket existente o `NotFound("ticket not found")`
    pub async fn find(&self, id: Uuid) -> AppResult<Ticket> {
        self.state
            .tickets
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("ticket"))
    }

    pub async fn create(&self, request: CreateTicketRequest) -> AppResult<TicketDetails> {
        request.validate()?;

        let itinerary = self.find_itinerary(request.itinerary_id).await?;
        self.ensure_purchaser(request.user_id).await?;
        validate_matches_itinerary(request.transport_kind, itinerary.transport_kind)?;
        let seat_number = checked_seat(itinerary.transport_kind, request.seat_number)?;

        let ticket = self
            .state
            .tickets
            .create(NewTicket {
                passenger_name: request.passenger_name.trim().to_string(),
                phone: request.phone.trim().to_string(),
                transport_kind: request.transport_kind,
                airline_class: request.airline_class,
                bus_seat_type: request.bus_seat_type,
                seat_number,
                itinerary_id: itinerary.id,
                user_id: request.user_id,
            })
            .await?;

        tracing::info!(
            "🎫 Ticket {} emitido para itinerario {} (asiento {})",
            ticket.id,
            itinerary.id,
            ticket.seat_number.as_deref().unwrap_or("-")
        );

        Ok(TicketDetails::compose(ticket, &itinerary))
    }

    pub async fn get(&self, id: Uuid) -> AppResult<TicketDetails> {
        let ticket = self.find(id).await?;
        let itinerary = self.find_itinerary(ticket.itinerary_id).await?;
        Ok(TicketDetails::compose(ticket, &itinerary))
    }

    pub async fn list(&self) -> AppResult<Vec<TicketDetails>> {
        self.search_details(TicketFilters::default()).await
    }

    pub async fn search(&self, query: TicketSearchQuery) -> AppResult<Vec<TicketDetails>> {
        self.search_details(TicketFilters {
            itinerary_id: query.itinerary_id,
            transport_kind: query.transport_kind,
            passenger_name: query
                .passenger_name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            user_id: None,
        })
        .await
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<TicketDetails>> {
        self.search_details(TicketFilters {
            user_id: Some(user_id),
            ..Default::default()
        })
        .await
    }

    /// Busca tickets y los compone con su itinerario
    pub async fn search_details(&self, filters: TicketFilters) -> AppResult<Vec<TicketDetails>> {
        let tickets = self.state.tickets.search(&filters).await?;
        let mut itineraries: HashMap<Uuid, Itinerary> = HashMap::new();
        let mut details = Vec::with_capacity(tickets.len());

        for ticket in tickets {
            if !itineraries.contains_key(&ticket.itinerary_id) {
                let itinerary = self.find_itinerary(ticket.itinerary_id).await.map_err(|_| {
                    AppError::Internal(format!("ticket {} references a missing trip", ticket.id))
                })?;
                itineraries.insert(itinerary.id, itinerary);
            }
            if let Some(itinerary) = itineraries.get(&ticket.itinerary_id) {
                details.push(TicketDetails::compose(ticket, itinerary));
            }
        }

        Ok(details)
    }

    /// Ticket existente que, si se indica `owner`, debe pertenecer a ese pasajero
    async fn find_owned(&self, id: Uuid, owner: Option<Uuid>) -> AppResult<Ticket> {
        let ticket = self.find(id).await?;
        match owner {
            Some(user_id) if ticket.user_id != user_id => Err(AppError::Forbidden(
                "ticket belongs to another user".to_string(),
            )),
            _ => Ok(ticket),
        }
    }

    /// Actualización parcial; el ticket resultante se valida completo
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateTicketRequest,
        owner: Option<Uuid>,
    ) -> AppResult<TicketDetails> {
        request.validate()?;

        let mut ticket = self.find_owned(id, owner).await?;
        request.apply(&mut ticket);
        validate_ticket(&ticket)?;

        let itinerary = self.find_itinerary(ticket.itinerary_id).await?;
        validate_matches_itinerary(ticket.transport_kind, itinerary.transport_kind)?;
        ticket.seat_number = checked_seat(itinerary.transport_kind, ticket.seat_number.take())?;

        let updated = self.state.tickets.update(&ticket).await?;
        Ok(TicketDetails::compose(updated, &itinerary))
    }

    pub async fn delete(&self, id: Uuid, owner: Option<Uuid>) -> AppResult<()> {
        self.find_owned(id, owner).await?;
        if !self.state.tickets.delete(id).await? {
            return Err(not_found_error("ticket"));
        }
        tracing::info!("🗑️ Ticket eliminado: {}", id);
        Ok(())
    }

    /// Consulta consultiva: no reserva nada
    pub async fn reserve_seat(&self, query: ReserveSeatQuery) -> AppResult<ReservationResponse> {
        let itinerary = self.find_itinerary(query.itinerary_id).await?;
        if let Some(user_id) = query.user_id {
            self.ensure_purchaser(user_id).await?;
        }

        let occupied = self.state.tickets.occupied_seats(itinerary.id).await?;
        let response = match check_seat_availability(itinerary.transport_kind, &occupied, &query.seat_number) {
            SeatAvailability::Available => ReservationResponse::available(),
            SeatAvailability::Occupied => ReservationResponse::rejected(SEAT_ALREADY_OCCUPIED),
            SeatAvailability::Unknown => ReservationResponse::rejected(SEAT_DOES_NOT_EXIST),
        };

        tracing::debug!(
            "💺 Consulta de asiento {} en itinerario {}: {}",
            query.seat_number,
            itinerary.id,
            response.message
        );

        Ok(response)
    }
}
