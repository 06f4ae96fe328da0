use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Itinerary, ItineraryFilters, NewItinerary};
use crate::utils::errors::{map_foreign_key_violation, AppResult};

pub const TRIP_HAS_TICKETS: &str = "cannot delete a trip with tickets";

/// Acceso a la tabla itineraries
#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    async fn create(&self, new: NewItinerary) -> AppResult<Itinerary>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Itinerary>>;

    /// Filtros vacíos devuelven todos los itinerarios
    async fn search(&self, filters: &ItineraryFilters) -> AppResult<Vec<Itinerary>>;

    async fn update(&self, itinerary: &Itinerary) -> AppResult<Itinerary>;

    /// Falla con `Conflict` si algún ticket aún referencia el itinerario
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

pub struct PgItineraryRepository {
    pool: PgPool,
}

impl PgItineraryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItineraryRepository for PgItineraryRepository {
    async fn create(&self, new: NewItinerary) -> AppResult<Itinerary> {
        let itinerary = sqlx::query_as::<_, Itinerary>(
            r#"
            INSERT INTO itineraries (
                id, origin, destination, date, carrier, departure_time,
                duration, price, transport_kind, seat_class, admin_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.origin)
        .bind(&new.destination)
        .bind(new.date)
        .bind(&new.carrier)
        .bind(&new.departure_time)
        .bind(&new.duration)
        .bind(new.price)
        .bind(new.transport_kind)
        .bind(&new.seat_class)
        .bind(new.admin_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(itinerary)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Itinerary>> {
        let itinerary = sqlx::query_as::<_, Itinerary>("SELECT * FROM itineraries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(itinerary)
    }

    async fn search(&self, filters: &ItineraryFilters) -> AppResult<Vec<Itinerary>> {
        let itineraries = sqlx::query_as::<_, Itinerary>(
            r#"
            SELECT * FROM itineraries
            WHERE ($1::text IS NULL OR origin = $1)
              AND ($2::text IS NULL OR destination = $2)
              AND ($3::date IS NULL OR date = $3)
            ORDER BY date, departure_time
            "#,
        )
        .bind(filters.origin.as_deref())
        .bind(filters.destination.as_deref())
        .bind(filters.date)
        .fetch_all(&self.pool)
        .await?;

        Ok(itineraries)
    }

    async fn update(&self, itinerary: &Itinerary) -> AppResult<Itinerary> {
        let updated = sqlx::query_as::<_, Itinerary>(
            r#"
            UPDATE itineraries
            SET origin = $2, destination = $3, date = $4, carrier = $5, departure_time = $6,
                duration = $7, price = $8, transport_kind = $9, seat_class = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(itinerary.id)
        .bind(&itinerary.origin)
        .bind(&itinerary.destination)
        .bind(itinerary.date)
        .bind(&itinerary.carrier)
        .bind(&itinerary.departure_time)
        .bind(&itinerary.duration)
        .bind(itinerary.price)
        .bind(itinerary.transport_kind)
        .bind(&itinerary.seat_class)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM itineraries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_foreign_key_violation(e, TRIP_HAS_TICKETS))?;

        Ok(result.rows_affected() > 0)
    }
}
