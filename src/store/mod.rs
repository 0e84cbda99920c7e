//! In-memory record store behind an API modelled on a remote backend.
//!
//! Every operation is async and sleeps a simulated network delay, so the
//! presentation layer exercises the same suspension points it would
//! against a real service. Collections are owned exclusively by the store;
//! all reads hand out snapshots and all writes go through its methods.

pub mod seed;

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{
    Appointment, AppointmentStatus, NewAppointment, NewProperty, NewReview, Property,
    PropertyStatus, Review, User, UserRole,
};
use crate::query::{engine, FilterCriteria, PropertySource};

pub struct RecordStore {
    properties: RwLock<Vec<Property>>,
    users: RwLock<Vec<User>>,
    appointments: RwLock<Vec<Appointment>>,
    reviews: RwLock<Vec<Review>>,
    simulate_latency: bool,
}

impl RecordStore {
    /// Store seeded with the mock collections and full simulated latency.
    pub fn new() -> Self {
        info!("Seeding in-memory record store");
        Self::build(true)
    }

    /// Seeded store that resolves immediately. For tests and tight loops.
    pub fn instant() -> Self {
        Self::build(false)
    }

    fn build(simulate_latency: bool) -> Self {
        Self {
            properties: RwLock::new(seed::properties()),
            users: RwLock::new(seed::users()),
            appointments: RwLock::new(seed::appointments()),
            reviews: RwLock::new(seed::reviews()),
            simulate_latency,
        }
    }

    async fn latency(&self, ms: u64) {
        if self.simulate_latency {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    // --- Properties ---

    /// Filtered, ordered snapshot of the property collection. Never fails;
    /// open criteria return everything, premium listings first, then
    /// newest first.
    pub async fn list_properties(&self, criteria: &FilterCriteria) -> Vec<Property> {
        self.latency(400).await;
        let properties = self.properties.read().unwrap();
        let results = engine::apply(&properties, criteria);
        debug!(total = properties.len(), matched = results.len(), "listed properties");
        results
    }

    pub async fn get_property(&self, id: &str) -> Option<Property> {
        self.latency(300).await;
        self.properties
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Resolve ids in the given order, silently dropping any that no
    /// longer resolve.
    pub async fn get_properties_by_ids(&self, ids: &[String]) -> Vec<Property> {
        self.latency(300).await;
        let properties = self.properties.read().unwrap();
        let by_id: HashMap<&str, &Property> =
            properties.iter().map(|p| (p.id.as_str(), p)).collect();
        ids.iter()
            .filter_map(|id| by_id.get(id.as_str()).map(|p| (*p).clone()))
            .collect()
    }

    pub async fn properties_by_seller(&self, seller_id: &str) -> Vec<Property> {
        self.latency(300).await;
        self.properties
            .read()
            .unwrap()
            .iter()
            .filter(|p| p.seller_id == seller_id)
            .cloned()
            .collect()
    }

    /// Create a listing for a seller. The status is always forced to
    /// pending for admin review, whatever the caller intended.
    pub async fn create_property(
        &self,
        new: NewProperty,
        seller_id: &str,
        seller_name: &str,
        seller_phone: &str,
    ) -> Property {
        self.latency(800).await;
        let property = Property {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            description: new.description,
            price: new.price,
            location: new.location,
            config: new.config,
            possession_period: new.possession_period,
            possession_date: new.possession_date,
            amenities: new.amenities,
            images: new.images,
            flat_video_url: new.flat_video_url,
            building_video_url: new.building_video_url,
            seller_id: seller_id.to_string(),
            seller_name: seller_name.to_string(),
            seller_phone: seller_phone.to_string(),
            status: PropertyStatus::Pending,
            is_premium: new.is_premium,
            bedrooms: new.bedrooms,
            bathrooms: new.bathrooms,
            area: new.area,
            created_at: Utc::now(),
        };
        info!(id = %property.id, name = %property.name, "created property listing");
        // Most-recent-first insertion order
        self.properties.write().unwrap().insert(0, property.clone());
        property
    }

    pub async fn set_property_status(
        &self,
        id: &str,
        status: PropertyStatus,
    ) -> Option<Property> {
        self.latency(500).await;
        let mut properties = self.properties.write().unwrap();
        let property = properties.iter_mut().find(|p| p.id == id)?;
        property.status = status;
        info!(id, ?status, "updated property status");
        Some(property.clone())
    }

    // --- Appointments ---

    pub async fn all_appointments(&self) -> Vec<Appointment> {
        self.latency(300).await;
        let mut results = self.appointments.read().unwrap().clone();
        sort_newest_first(&mut results);
        results
    }

    pub async fn appointments_by_buyer(&self, buyer_id: &str) -> Vec<Appointment> {
        self.latency(300).await;
        let mut results: Vec<Appointment> = self
            .appointments
            .read()
            .unwrap()
            .iter()
            .filter(|a| a.buyer_id == buyer_id)
            .cloned()
            .collect();
        sort_newest_first(&mut results);
        results
    }

    pub async fn appointments_by_seller(&self, seller_id: &str) -> Vec<Appointment> {
        self.latency(300).await;
        let mut results: Vec<Appointment> = self
            .appointments
            .read()
            .unwrap()
            .iter()
            .filter(|a| a.seller_id == seller_id)
            .cloned()
            .collect();
        sort_newest_first(&mut results);
        results
    }

    /// Book a viewing. The status always starts at scheduled.
    pub async fn schedule_appointment(&self, new: NewAppointment) -> Appointment {
        self.latency(600).await;
        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            property_id: new.property_id,
            property_name: new.property_name,
            buyer_id: new.buyer_id,
            buyer_name: new.buyer_name,
            buyer_email: new.buyer_email,
            seller_id: new.seller_id,
            seller_name: new.seller_name,
            kind: new.kind,
            date: new.date,
            time: new.time,
            status: AppointmentStatus::Scheduled,
            notes: new.notes,
            created_at: Utc::now(),
        };
        info!(id = %appointment.id, property = %appointment.property_name, "scheduled appointment");
        self.appointments.write().unwrap().insert(0, appointment.clone());
        appointment
    }

    pub async fn set_appointment_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> Option<Appointment> {
        self.latency(400).await;
        let mut appointments = self.appointments.write().unwrap();
        let appointment = appointments.iter_mut().find(|a| a.id == id)?;
        appointment.status = status;
        info!(id, ?status, "updated appointment status");
        Some(appointment.clone())
    }

    // --- Reviews ---

    pub async fn reviews_by_property(&self, property_id: &str) -> Vec<Review> {
        self.latency(300).await;
        let mut results: Vec<Review> = self
            .reviews
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.property_id == property_id)
            .cloned()
            .collect();
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        results
    }

    pub async fn add_review(&self, new: NewReview) -> Review {
        self.latency(500).await;
        let review = Review {
            id: Uuid::new_v4().to_string(),
            property_id: new.property_id,
            user_id: new.user_id,
            user_name: new.user_name,
            rating: new.rating,
            comment: new.comment,
            created_at: Utc::now(),
        };
        self.reviews.write().unwrap().insert(0, review.clone());
        review
    }

    /// Mean star rating for a property, `None` when unreviewed.
    pub async fn average_rating(&self, property_id: &str) -> Option<f64> {
        self.latency(100).await;
        let reviews = self.reviews.read().unwrap();
        let ratings: Vec<u8> = reviews
            .iter()
            .filter(|r| r.property_id == property_id)
            .map(|r| r.rating)
            .collect();
        if ratings.is_empty() {
            return None;
        }
        let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
        Some(f64::from(sum) / ratings.len() as f64)
    }

    // --- Users ---

    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.latency(500).await;
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    pub async fn all_users(&self) -> Vec<User> {
        self.latency(300).await;
        self.users.read().unwrap().clone()
    }

    /// Register a new user. Email is the unique key; a clash leaves the
    /// collection unchanged.
    pub async fn register_user(
        &self,
        name: &str,
        email: &str,
        role: UserRole,
        phone: &str,
        registration_paid: bool,
    ) -> Result<User> {
        self.latency(600).await;
        let mut users = self.users.write().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(Error::DuplicateEmail(email.to_string()));
        }
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            phone: phone.to_string(),
            avatar: None,
            favorites: vec![],
            registration_paid,
            created_at: Utc::now(),
        };
        info!(id = %user.id, email, "registered user");
        users.push(user.clone());
        Ok(user)
    }

    /// Add the property to the user's favorites if absent, remove it if
    /// present. Returns the updated favorite set.
    pub async fn toggle_favorite(&self, user_id: &str, property_id: &str) -> Result<Vec<String>> {
        self.latency(200).await;
        let mut users = self.users.write().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| Error::UserNotFound(user_id.to_string()))?;

        if let Some(pos) = user.favorites.iter().position(|id| id == property_id) {
            user.favorites.remove(pos);
        } else {
            user.favorites.push(property_id.to_string());
        }
        Ok(user.favorites.clone())
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertySource for RecordStore {
    async fn fetch(&self, criteria: &FilterCriteria) -> Vec<Property> {
        self.list_properties(criteria).await
    }

    fn source_name(&self) -> &'static str {
        "record-store"
    }
}

fn sort_newest_first(appointments: &mut [Appointment]) {
    appointments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
