use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a registered user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Buyer,
    Seller,
    Admin,
}

/// Unit layout of a property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyConfig {
    #[serde(rename = "1BHK")]
    OneBhk,
    #[serde(rename = "2BHK")]
    TwoBhk,
    #[serde(rename = "3BHK")]
    ThreeBhk,
    #[serde(rename = "4BHK")]
    FourBhk,
}

/// How soon the property can be occupied
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PossessionPeriod {
    #[serde(rename = "ready")]
    Ready,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "2years")]
    TwoYears,
}

/// Listing approval state. Transitions are pending -> approved or
/// pending -> rejected; the store never reverts a decided listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AppointmentType {
    VideoCall,
    SiteVisit,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Approved,
    Completed,
    Cancelled,
}

/// Location information for a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyLocation {
    pub address: String,
    pub locality: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub lat: f64,
    pub lng: f64,
}

/// Core property listing model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Asking price in whole currency units
    pub price: i64,
    pub location: PropertyLocation,
    pub config: PropertyConfig,
    pub possession_period: PossessionPeriod,
    pub possession_date: String,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub flat_video_url: String,
    pub building_video_url: String,
    pub seller_id: String,
    pub seller_name: String,
    pub seller_phone: String,
    pub status: PropertyStatus,
    pub is_premium: bool,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Carpet area in square feet
    pub area: u32,
    pub created_at: DateTime<Utc>,
}

/// Seller-supplied fields for a new listing. The store assigns the id,
/// seller references, status and creation timestamp itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProperty {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub location: PropertyLocation,
    pub config: PropertyConfig,
    pub possession_period: PossessionPeriod,
    pub possession_date: String,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub flat_video_url: String,
    pub building_video_url: String,
    pub is_premium: bool,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Unique key within the store
    pub email: String,
    pub role: UserRole,
    pub phone: String,
    pub avatar: Option<String>,
    /// Ids of favorited properties
    pub favorites: Vec<String>,
    pub registration_paid: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub property_id: String,
    pub property_name: String,
    pub buyer_id: String,
    pub buyer_name: String,
    pub buyer_email: String,
    pub seller_id: String,
    pub seller_name: String,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Buyer-supplied fields for scheduling a viewing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    pub property_id: String,
    pub property_name: String,
    pub buyer_id: String,
    pub buyer_name: String,
    pub buyer_email: String,
    pub seller_id: String,
    pub seller_name: String,
    pub kind: AppointmentType,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
}

/// Immutable once created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: String,
    pub property_id: String,
    pub user_id: String,
    pub user_name: String,
    /// 1-5 stars
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Buyer-supplied fields for a new review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub property_id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
}
