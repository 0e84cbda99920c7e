//! Seed collections for the in-memory store. The data resets on every
//! process start; only the session file survives (see `crate::session`).

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    Appointment, AppointmentStatus, AppointmentType, PossessionPeriod, Property, PropertyConfig,
    PropertyLocation, PropertyStatus, Review, User, UserRole,
};

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn amenities(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "prop-001".to_string(),
            name: "Skyline Heights".to_string(),
            description: "Sea-facing 3BHK in a gated tower with clubhouse access.".to_string(),
            price: 18_500_000,
            location: PropertyLocation {
                address: "Plot 12, Link Road".to_string(),
                locality: "Andheri West".to_string(),
                city: "Mumbai".to_string(),
                state: "Maharashtra".to_string(),
                pincode: "400053".to_string(),
                lat: 19.1364,
                lng: 72.8296,
            },
            config: PropertyConfig::ThreeBhk,
            possession_period: PossessionPeriod::Ready,
            possession_date: "2025-07-01".to_string(),
            amenities: amenities(&["Swimming Pool", "Gym", "Clubhouse", "Power Backup"]),
            images: vec!["https://images.propvista.dev/prop-001/1.jpg".to_string()],
            flat_video_url: String::new(),
            building_video_url: String::new(),
            seller_id: "user-002".to_string(),
            seller_name: "Prestige Builders".to_string(),
            seller_phone: "+919876543210".to_string(),
            status: PropertyStatus::Approved,
            is_premium: true,
            bedrooms: 3,
            bathrooms: 3,
            area: 1450,
            created_at: day(2025, 7, 20),
        },
        Property {
            id: "prop-002".to_string(),
            name: "Green Meadows".to_string(),
            description: "Compact 2BHK near the IT corridor, ideal first home.".to_string(),
            price: 7_200_000,
            location: PropertyLocation {
                address: "Survey 48, Hinjewadi Phase 2".to_string(),
                locality: "Hinjewadi".to_string(),
                city: "Pune".to_string(),
                state: "Maharashtra".to_string(),
                pincode: "411057".to_string(),
                lat: 18.5913,
                lng: 73.7389,
            },
            config: PropertyConfig::TwoBhk,
            possession_period: PossessionPeriod::SixMonths,
            possession_date: "2026-02-01".to_string(),
            amenities: amenities(&["Gym", "Parking", "Kids Play Area"]),
            images: vec!["https://images.propvista.dev/prop-002/1.jpg".to_string()],
            flat_video_url: String::new(),
            building_video_url: String::new(),
            seller_id: "user-002".to_string(),
            seller_name: "Prestige Builders".to_string(),
            seller_phone: "+919876543210".to_string(),
            status: PropertyStatus::Approved,
            is_premium: false,
            bedrooms: 2,
            bathrooms: 2,
            area: 980,
            created_at: day(2025, 7, 18),
        },
        Property {
            id: "prop-003".to_string(),
            name: "Lakeview Residency".to_string(),
            description: "Premium 4BHK duplex overlooking Powai lake.".to_string(),
            price: 42_000_000,
            location: PropertyLocation {
                address: "Central Avenue, Hiranandani Gardens".to_string(),
                locality: "Powai".to_string(),
                city: "Mumbai".to_string(),
                state: "Maharashtra".to_string(),
                pincode: "400076".to_string(),
                lat: 19.1197,
                lng: 72.9051,
            },
            config: PropertyConfig::FourBhk,
            possession_period: PossessionPeriod::Ready,
            possession_date: "2025-06-15".to_string(),
            amenities: amenities(&[
                "Swimming Pool",
                "Gym",
                "Clubhouse",
                "Garden",
                "Security",
            ]),
            images: vec!["https://images.propvista.dev/prop-003/1.jpg".to_string()],
            flat_video_url: String::new(),
            building_video_url: String::new(),
            seller_id: "user-004".to_string(),
            seller_name: "Lakeside Estates".to_string(),
            seller_phone: "+919812001200".to_string(),
            status: PropertyStatus::Approved,
            is_premium: true,
            bedrooms: 4,
            bathrooms: 4,
            area: 2600,
            created_at: day(2025, 7, 10),
        },
        Property {
            id: "prop-004".to_string(),
            name: "Urban Nest".to_string(),
            description: "Budget 1BHK close to the metro line.".to_string(),
            price: 4_800_000,
            location: PropertyLocation {
                address: "Sector 18, Old Madras Road".to_string(),
                locality: "Indiranagar".to_string(),
                city: "Bangalore".to_string(),
                state: "Karnataka".to_string(),
                pincode: "560038".to_string(),
                lat: 12.9784,
                lng: 77.6408,
            },
            config: PropertyConfig::OneBhk,
            possession_period: PossessionPeriod::OneYear,
            possession_date: "2026-08-01".to_string(),
            amenities: amenities(&["Parking", "Power Backup"]),
            images: vec!["https://images.propvista.dev/prop-004/1.jpg".to_string()],
            flat_video_url: String::new(),
            building_video_url: String::new(),
            seller_id: "user-004".to_string(),
            seller_name: "Lakeside Estates".to_string(),
            seller_phone: "+919812001200".to_string(),
            status: PropertyStatus::Approved,
            is_premium: false,
            bedrooms: 1,
            bathrooms: 1,
            area: 560,
            created_at: day(2025, 7, 15),
        },
        Property {
            id: "prop-005".to_string(),
            name: "Palm Grove Villas".to_string(),
            description: "Row villa with a private garden in a quiet enclave.".to_string(),
            price: 23_500_000,
            location: PropertyLocation {
                address: "Palm Grove Layout, Sarjapur Road".to_string(),
                locality: "Sarjapur".to_string(),
                city: "Bangalore".to_string(),
                state: "Karnataka".to_string(),
                pincode: "560035".to_string(),
                lat: 12.8846,
                lng: 77.7037,
            },
            config: PropertyConfig::ThreeBhk,
            possession_period: PossessionPeriod::TwoYears,
            possession_date: "2027-06-01".to_string(),
            amenities: amenities(&["Garden", "Clubhouse", "Security", "Parking"]),
            images: vec!["https://images.propvista.dev/prop-005/1.jpg".to_string()],
            flat_video_url: String::new(),
            building_video_url: String::new(),
            seller_id: "user-002".to_string(),
            seller_name: "Prestige Builders".to_string(),
            seller_phone: "+919876543210".to_string(),
            status: PropertyStatus::Approved,
            is_premium: true,
            bedrooms: 3,
            bathrooms: 3,
            area: 1850,
            created_at: day(2025, 7, 5),
        },
        Property {
            id: "prop-006".to_string(),
            name: "Riverdale Towers".to_string(),
            description: "2BHK with river views, awaiting admin approval.".to_string(),
            price: 9_800_000,
            location: PropertyLocation {
                address: "NH 48 Service Road".to_string(),
                locality: "Baner".to_string(),
                city: "Pune".to_string(),
                state: "Maharashtra".to_string(),
                pincode: "411045".to_string(),
                lat: 18.5590,
                lng: 73.7868,
            },
            config: PropertyConfig::TwoBhk,
            possession_period: PossessionPeriod::OneYear,
            possession_date: "2026-09-01".to_string(),
            amenities: amenities(&["Gym", "Swimming Pool", "Parking"]),
            images: vec!["https://images.propvista.dev/prop-006/1.jpg".to_string()],
            flat_video_url: String::new(),
            building_video_url: String::new(),
            seller_id: "user-004".to_string(),
            seller_name: "Lakeside Estates".to_string(),
            seller_phone: "+919812001200".to_string(),
            status: PropertyStatus::Pending,
            is_premium: false,
            bedrooms: 2,
            bathrooms: 2,
            area: 1100,
            created_at: day(2025, 7, 22),
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "user-001".to_string(),
            name: "Rahul Sharma".to_string(),
            email: "buyer@test.com".to_string(),
            role: UserRole::Buyer,
            phone: "+919876543211".to_string(),
            avatar: None,
            favorites: vec!["prop-001".to_string(), "prop-005".to_string()],
            registration_paid: false,
            created_at: day(2025, 6, 15),
        },
        User {
            id: "user-002".to_string(),
            name: "Prestige Builders".to_string(),
            email: "seller@test.com".to_string(),
            role: UserRole::Seller,
            phone: "+919876543210".to_string(),
            avatar: None,
            favorites: vec![],
            registration_paid: true,
            created_at: day(2025, 5, 1),
        },
        User {
            id: "user-003".to_string(),
            name: "Admin User".to_string(),
            email: "admin@test.com".to_string(),
            role: UserRole::Admin,
            phone: "+919876543212".to_string(),
            avatar: None,
            favorites: vec![],
            registration_paid: false,
            created_at: day(2025, 1, 1),
        },
        User {
            id: "user-004".to_string(),
            name: "Lakeside Estates".to_string(),
            email: "lakeside@test.com".to_string(),
            role: UserRole::Seller,
            phone: "+919812001200".to_string(),
            avatar: None,
            favorites: vec![],
            registration_paid: true,
            created_at: day(2025, 4, 12),
        },
    ]
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "appt-001".to_string(),
            property_id: "prop-001".to_string(),
            property_name: "Skyline Heights".to_string(),
            buyer_id: "user-001".to_string(),
            buyer_name: "Rahul Sharma".to_string(),
            buyer_email: "buyer@test.com".to_string(),
            seller_id: "user-002".to_string(),
            seller_name: "Prestige Builders".to_string(),
            kind: AppointmentType::SiteVisit,
            date: "2025-08-02".to_string(),
            time: "11:00".to_string(),
            status: AppointmentStatus::Approved,
            notes: Some("Prefers a weekend slot".to_string()),
            created_at: day(2025, 7, 21),
        },
        Appointment {
            id: "appt-002".to_string(),
            property_id: "prop-004".to_string(),
            property_name: "Urban Nest".to_string(),
            buyer_id: "user-001".to_string(),
            buyer_name: "Rahul Sharma".to_string(),
            buyer_email: "buyer@test.com".to_string(),
            seller_id: "user-004".to_string(),
            seller_name: "Lakeside Estates".to_string(),
            kind: AppointmentType::VideoCall,
            date: "2025-08-05".to_string(),
            time: "16:30".to_string(),
            status: AppointmentStatus::Scheduled,
            notes: None,
            created_at: day(2025, 7, 23),
        },
    ]
}

pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: "rev-001".to_string(),
            property_id: "prop-001".to_string(),
            user_id: "user-001".to_string(),
            user_name: "Rahul Sharma".to_string(),
            rating: 5,
            comment: "Great ventilation and the society is well maintained.".to_string(),
            created_at: day(2025, 7, 22),
        },
        Review {
            id: "rev-002".to_string(),
            property_id: "prop-001".to_string(),
            user_id: "user-005".to_string(),
            user_name: "Meera Iyer".to_string(),
            rating: 4,
            comment: "Loved the clubhouse, parking allocation is tight.".to_string(),
            created_at: day(2025, 7, 19),
        },
        Review {
            id: "rev-003".to_string(),
            property_id: "prop-002".to_string(),
            user_id: "user-001".to_string(),
            user_name: "Rahul Sharma".to_string(),
            rating: 3,
            comment: "Good value but the approach road needs work.".to_string(),
            created_at: day(2025, 7, 20),
        },
    ]
}
