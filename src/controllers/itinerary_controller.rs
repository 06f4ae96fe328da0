use uuid::Uuid;
use validator::Validate;

use crate::controllers::ticket_controller::TicketController;
use crate::dto::itinerary_dto::{
    CreateItineraryRequest, ItineraryResponse, ItinerarySearchQuery, UpdateItineraryRequest,
};
use crate::dto::seat_dto::SeatMapResponse;
use crate::dto::ticket_dto::TicketDetails;
use crate::models::{Itinerary, ItineraryFilters, NewItinerary, TicketFilters};
use crate::repositories::TRIP_HAS_TICKETS;
use crate::services::seat_map_service::build_seat_map;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation::validate_date;

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

pub struct ItineraryController {
    state: AppState,
}

impl ItineraryController {
    pub fn new(state: &AppState) -> Self {
        Self { state: state.clone() }
    }

    /// Itinerario existente o `NotFound("trip not found")`
    pub async fn find(&self, id: Uuid) -> AppResult<Itinerary> {
        self.state
            .itineraries
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("trip"))
    }

    pub async fn create(
        &self,
        admin_id: Uuid,
        request: CreateItineraryRequest,
    ) -> AppResult<ItineraryResponse> {
        request.validate()?;

        let itinerary = self
            .state
            .itineraries
            .create(NewItinerary {
                origin: request.origin.trim().to_string(),
                destination: request.destination.trim().to_string(),
                date: request.date,
                carrier: request.carrier.trim().to_string(),
                departure_time: request.departure_time.trim().to_string(),
                duration: request.duration.trim().to_string(),
                price: request.price,
                transport_kind: request.transport_kind,
                seat_class: request.seat_class.trim().to_string(),
                admin_id,
            })
            .await?;

        tracing::info!(
            "🗺️ Itinerario {} creado: {} -> {} ({})",
            itinerary.id,
            itinerary.origin,
            itinerary.destination,
            itinerary.transport_kind
        );

        Ok(itinerary.into())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<ItineraryResponse> {
        Ok(self.find(id).await?.into())
    }

    pub async fn list(&self) -> AppResult<Vec<ItineraryResponse>> {
        self.search_with(ItineraryFilters::default()).await
    }

    pub async fn search(&self, query: ItinerarySearchQuery) -> AppResult<Vec<ItineraryResponse>> {
        let date = match non_empty(query.date) {
            Some(raw) => {
                let parsed = validate_date(&raw).map_err(|e| {
                    let mut errors = validator::ValidationErrors::new();
                    errors.add("date", e);
                    AppError::Validation(errors)
                })?;
                Some(parsed)
            }
            None => None,
        };

        self.search_with(ItineraryFilters {
            origin: non_empty(query.origin),
            destination: non_empty(query.destination),
            date,
        })
        .await
    }

    async fn search_with(&self, filters: ItineraryFilters) -> AppResult<Vec<ItineraryResponse>> {
        let itineraries = self.state.itineraries.search(&filters).await?;
        Ok(itineraries.into_iter().map(ItineraryResponse::from).collect())
    }

    /// Un cambio de tipo de transporte no se permite si ya hay tickets vendidos
    pub async fn update(&self, id: Uuid, request: UpdateItineraryRequest) -> AppResult<ItineraryResponse> {
        request.validate()?;

        let mut itinerary = self.find(id).await?;
        let previous_kind = itinerary.transport_kind;
        request.apply(&mut itinerary);

        if itinerary.transport_kind != previous_kind
            && self.state.tickets.count_by_itinerary(id).await? > 0
        {
            return Err(AppError::Conflict(
                "cannot change the transport kind of a trip with tickets".to_string(),
            ));
        }

        let updated = self.state.itineraries.update(&itinerary).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.find(id).await?;

        if self.state.tickets.count_by_itinerary(id).await? > 0 {
            return Err(AppError::Conflict(TRIP_HAS_TICKETS.to_string()));
        }

        self.state.itineraries.delete(id).await?;
        tracing::info!("🗑️ Itinerario eliminado: {}", id);
        Ok(())
    }

    /// Mapa de asientos con la ocupación actual
    pub async fn seat_map(&self, id: Uuid) -> AppResult<SeatMapResponse> {
        let itinerary = self.find(id).await?;
        let occupied = self.state.tickets.occupied_seats(id).await?;
        Ok(build_seat_map(itinerary.transport_kind, &occupied))
    }

    /// Tickets (pasajeros) de un itinerario
    pub async fn passengers(&self, id: Uuid) -> AppResult<Vec<TicketDetails>> {
        self.find(id).await?;
        TicketController::new(&self.state)
            .search_details(TicketFilters {
                itinerary_id: Some(id),
                ..Default::default()
            })
            .await
    }
}
