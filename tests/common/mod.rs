//! Repositorios en memoria y helpers para los tests de integración

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use ticket_booking::config::EnvironmentConfig;
use ticket_booking::models::{
    Admin, Itinerary, ItineraryFilters, NewAccount, NewItinerary, NewTicket, Ticket,
    TicketFilters, User, SEAT_ALREADY_OCCUPIED,
};
use ticket_booking::repositories::{
    AdminRepository, ItineraryRepository, TicketRepository, UserRepository,
    EMAIL_ALREADY_REGISTERED,
};
use ticket_booking::routes::create_app;
use ticket_booking::state::AppState;
use ticket_booking::utils::errors::{AppError, AppResult};

#[derive(Default)]
pub struct MemoryItineraries {
    rows: Mutex<Vec<Itinerary>>,
}

#[async_trait]
impl ItineraryRepository for MemoryItineraries {
    async fn create(&self, new: NewItinerary) -> AppResult<Itinerary> {
        let itinerary = new.into_itinerary(Uuid::new_v4(), Utc::now());
        self.rows.lock().unwrap().push(itinerary.clone());
        Ok(itinerary)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Itinerary>> {
        Ok(self.rows.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn search(&self, filters: &ItineraryFilters) -> AppResult<Vec<Itinerary>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|i| filters.matches(i))
            .cloned()
            .collect())
    }

    async fn update(&self, itinerary: &Itinerary) -> AppResult<Itinerary> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|i| i.id == itinerary.id) {
            Some(row) => {
                *row = itinerary.clone();
                Ok(row.clone())
            }
            None => Err(AppError::NotFound("trip not found".to_string())),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|i| i.id != id);
        Ok(rows.len() != before)
    }
}

#[derive(Default)]
pub struct MemoryTickets {
    rows: Mutex<Vec<Ticket>>,
}

impl MemoryTickets {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn seat_taken(rows: &[Ticket], itinerary_id: Uuid, seat: &str, exclude: Option<Uuid>) -> bool {
        rows.iter().any(|t| {
            t.itinerary_id == itinerary_id
                && t.seat_number.as_deref() == Some(seat)
                && Some(t.id) != exclude
        })
    }
}

#[async_trait]
impl TicketRepository for MemoryTickets {
    async fn create(&self, new: NewTicket) -> AppResult<Ticket> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(seat) = new.seat_number.as_deref() {
            if Self::seat_taken(&rows, new.itinerary_id, seat, None) {
                return Err(AppError::Conflict(SEAT_ALREADY_OCCUPIED.to_string()));
            }
        }
        let ticket = new.into_ticket(Uuid::new_v4(), Utc::now());
        rows.push(ticket.clone());
        Ok(ticket)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Ticket>> {
        Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn search(&self, filters: &TicketFilters) -> AppResult<Vec<Ticket>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| filters.matches(t))
            .cloned()
            .collect())
    }

    async fn occupied_seats(&self, itinerary_id: Uuid) -> AppResult<HashSet<String>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.itinerary_id == itinerary_id)
            .filter_map(|t| t.seat_number.clone())
            .collect())
    }

    async fn count_by_itinerary(&self, itinerary_id: Uuid) -> AppResult<i64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.itinerary_id == itinerary_id)
            .count() as i64)
    }

    async fn update(&self, ticket: &Ticket) -> AppResult<Ticket> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(seat) = ticket.seat_number.as_deref() {
            if Self::seat_taken(&rows, ticket.itinerary_id, seat, Some(ticket.id)) {
                return Err(AppError::Conflict(SEAT_ALREADY_OCCUPIED.to_string()));
            }
        }
        match rows.iter_mut().find(|t| t.id == ticket.id) {
            Some(row) => {
                *row = ticket.clone();
                Ok(row.clone())
            }
            None => Err(AppError::NotFound("ticket not found".to_string())),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        Ok(rows.len() != before)
    }
}

#[derive(Default)]
pub struct MemoryUsers {
    rows: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn create(&self, new: NewAccount) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|u| u.email == new.email) {
            return Err(AppError::Conflict(EMAIL_ALREADY_REGISTERED.to_string()));
        }
        let user = User {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            created_at: Utc::now(),
        };
        rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|u| u.email == user.email && u.id != user.id) {
            return Err(AppError::Conflict(EMAIL_ALREADY_REGISTERED.to_string()));
        }
        rows.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct MemoryAdmins {
    rows: Mutex<HashMap<Uuid, Admin>>,
}

#[async_trait]
impl AdminRepository for MemoryAdmins {
    async fn create(&self, new: NewAccount) -> AppResult<Admin> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|a| a.email == new.email) {
            return Err(AppError::Conflict(EMAIL_ALREADY_REGISTERED.to_string()));
        }
        let admin = Admin {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            created_at: Utc::now(),
        };
        rows.insert(admin.id, admin.clone());
        Ok(admin)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|a| a.email == email)
            .cloned())
    }
}

pub fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        user_jwt_secret: "user-test-secret".to_string(),
        user_jwt_expiration: 1800,
        admin_jwt_secret: "admin-test-secret".to_string(),
        admin_jwt_expiration: 3600,
        cors_origins: Vec::new(),
        log_level: "debug".to_string(),
        bcrypt_cost: 4,
    }
}

/// App completa sobre repositorios en memoria
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub itineraries: Arc<MemoryItineraries>,
    pub tickets: Arc<MemoryTickets>,
    pub users: Arc<MemoryUsers>,
    pub admins: Arc<MemoryAdmins>,
}

impl TestApp {
    pub fn new() -> Self {
        let itineraries = Arc::new(MemoryItineraries::default());
        let tickets = Arc::new(MemoryTickets::default());
        let users = Arc::new(MemoryUsers::default());
        let admins = Arc::new(MemoryAdmins::default());

        let state = AppState::with_repositories(
            test_config(),
            itineraries.clone(),
            tickets.clone(),
            users.clone(),
            admins.clone(),
        );

        Self {
            router: create_app(state.clone()),
            state,
            itineraries,
            tickets,
            users,
            admins,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body), None).await
    }

    /// Crea un itinerario directamente en el repositorio
    pub async fn seed_itinerary(&self, transport_kind: ticket_booking::models::TransportKind) -> Itinerary {
        self.itineraries
            .create(NewItinerary {
                origin: "São Paulo".to_string(),
                destination: "Rio de Janeiro".to_string(),
                date: chrono::NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
                carrier: "Azul".to_string(),
                departure_time: "08:30".to_string(),
                duration: "1h05".to_string(),
                price: rust_decimal::Decimal::new(45990, 2),
                transport_kind,
                seat_class: "Economy".to_string(),
                admin_id: Uuid::new_v4(),
            })
            .await
            .unwrap()
    }

    /// Registra un pasajero y devuelve su id
    pub async fn seed_user(&self, email: &str) -> Uuid {
        self.users
            .create(NewAccount {
                name: "Maria Souza".to_string(),
                email: email.to_string(),
                password_hash: "unused".to_string(),
            })
            .await
            .unwrap()
            .id
    }
}
