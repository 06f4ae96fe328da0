use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::{NewTicket, Ticket, TicketFilters, SEAT_ALREADY_OCCUPIED};
use crate::utils::errors::{map_unique_violation, AppError, AppResult};

/// Acceso a la tabla tickets
///
/// `create` y `update` comprueban el asiento y escriben dentro de la misma
/// transacción; el índice único parcial sobre (itinerary_id, seat_number)
/// rechaza lo que se escape de esa comprobación.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Falla con `Conflict` si el asiento ya está tomado en ese itinerario
    async fn create(&self, new: NewTicket) -> AppResult<Ticket>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Ticket>>;

    async fn search(&self, filters: &TicketFilters) -> AppResult<Vec<Ticket>>;

    /// Etiquetas no vacías de los asientos vendidos en un itinerario
    async fn occupied_seats(&self, itinerary_id: Uuid) -> AppResult<HashSet<String>>;

    async fn count_by_itinerary(&self, itinerary_id: Uuid) -> AppResult<i64>;

    /// Falla con `Conflict` si el nuevo asiento ya está tomado por otro ticket
    async fn update(&self, ticket: &Ticket) -> AppResult<Ticket>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Bloquea la fila del itinerario y verifica que el asiento esté libre
    async fn claim_seat(
        tx: &mut Transaction<'_, Postgres>,
        itinerary_id: Uuid,
        seat_number: &str,
        exclude_ticket: Option<Uuid>,
    ) -> AppResult<()> {
        sqlx::query("SELECT id FROM itineraries WHERE id = $1 FOR UPDATE")
            .bind(itinerary_id)
            .fetch_optional(&mut **tx)
            .await?;

        let (taken,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM tickets
                WHERE itinerary_id = $1 AND seat_number = $2
                  AND ($3::uuid IS NULL OR id <> $3)
            )
            "#,
        )
        .bind(itinerary_id)
        .bind(seat_number)
        .bind(exclude_ticket)
        .fetch_one(&mut **tx)
        .await?;

        if taken {
            tracing::info!("💺 Asiento {} ya ocupado en itinerario {}", seat_number, itinerary_id);
            return Err(AppError::Conflict(SEAT_ALREADY_OCCUPIED.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn create(&self, new: NewTicket) -> AppResult<Ticket> {
        let mut tx = self.pool.begin().await?;

        if let Some(seat) = new.seat_number.as_deref() {
            Self::claim_seat(&mut tx, new.itinerary_id, seat, None).await?;
        }

        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (
                id, passenger_name, phone, transport_kind, airline_class, bus_seat_type,
                seat_number, itinerary_id, user_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.passenger_name)
        .bind(&new.phone)
        .bind(new.transport_kind)
        .bind(new.airline_class)
        .bind(new.bus_seat_type)
        .bind(new.seat_number.as_deref())
        .bind(new.itinerary_id)
        .bind(new.user_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, SEAT_ALREADY_OCCUPIED))?;

        tx.commit().await?;

        Ok(ticket)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Ticket>> {
        let ticket = sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(ticket)
    }

    async fn search(&self, filters: &TicketFilters) -> AppResult<Vec<Ticket>> {
        let tickets = sqlx::query_as::<_, Ticket>(
            r#"
            SELECT * FROM tickets
            WHERE ($1::uuid IS NULL OR itinerary_id = $1)
              AND ($2::transport_kind IS NULL OR transport_kind = $2)
              AND ($3::text IS NULL OR passenger_name ILIKE '%' || $3 || '%')
              AND ($4::uuid IS NULL OR user_id = $4)
            ORDER BY created_at DESC
            "#,
        )
        .bind(filters.itinerary_id)
        .bind(filters.transport_kind)
        .bind(filters.passenger_name.as_deref())
        .bind(filters.user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tickets)
    }

    async fn occupied_seats(&self, itinerary_id: Uuid) -> AppResult<HashSet<String>> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT seat_number FROM tickets
            WHERE itinerary_id = $1 AND seat_number IS NOT NULL AND seat_number <> ''
            "#,
        )
        .bind(itinerary_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(seat,)| seat).collect())
    }

    async fn count_by_itinerary(&self, itinerary_id: Uuid) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tickets WHERE itinerary_id = $1")
            .bind(itinerary_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn update(&self, ticket: &Ticket) -> AppResult<Ticket> {
        let mut tx = self.pool.begin().await?;

        if let Some(seat) = ticket.seat_number.as_deref() {
            Self::claim_seat(&mut tx, ticket.itinerary_id, seat, Some(ticket.id)).await?;
        }

        let updated = sqlx::query_as::<_, Ticket>(
            r#"
            UPDATE tickets
            SET passenger_name = $2, phone = $3, transport_kind = $4, airline_class = $5,
                bus_seat_type = $6, seat_number = $7, itinerary_id = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(ticket.id)
        .bind(&ticket.passenger_name)
        .bind(&ticket.phone)
        .bind(ticket.transport_kind)
        .bind(ticket.airline_class)
        .bind(ticket.bus_seat_type)
        .bind(ticket.seat_number.as_deref())
        .bind(ticket.itinerary_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, SEAT_ALREADY_OCCUPIED))?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
