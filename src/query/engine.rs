//! Deterministic filtering and ordering over a property snapshot.
//!
//! All predicates are independent and conjunctive; unset criteria are
//! skipped entirely. The engine never fails and never mutates its inputs.

use crate::models::Property;
use crate::query::types::FilterCriteria;

/// Filter and order a property snapshot.
///
/// Ordering is premium listings first, then newest first within each tier.
/// The underlying sort is stable, so items with an identical premium flag
/// and creation timestamp keep their insertion order.
pub fn apply(properties: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    let mut results: Vec<Property> = properties
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect();

    results.sort_by(|a, b| {
        b.is_premium
            .cmp(&a.is_premium)
            .then(b.created_at.cmp(&a.created_at))
    });

    results
}

fn matches(property: &Property, criteria: &FilterCriteria) -> bool {
    if let Some(search) = &criteria.search {
        if !matches_search(property, search) {
            return false;
        }
    }

    if let Some(city) = &criteria.city {
        if &property.location.city != city {
            return false;
        }
    }

    if let Some(config) = criteria.config {
        if property.config != config {
            return false;
        }
    }

    if let Some(min) = criteria.budget_min {
        if property.price < min {
            return false;
        }
    }

    if let Some(max) = criteria.budget_max {
        if property.price > max {
            return false;
        }
    }

    if let Some(period) = criteria.possession_period {
        if property.possession_period != period {
            return false;
        }
    }

    if let Some(status) = criteria.status {
        if property.status != status {
            return false;
        }
    }

    true
}

/// Case-insensitive substring match against name, locality, city and state;
/// true if any field contains the query.
fn matches_search(property: &Property, query: &str) -> bool {
    let q = query.to_lowercase();
    property.name.to_lowercase().contains(&q)
        || property.location.locality.to_lowercase().contains(&q)
        || property.location.city.to_lowercase().contains(&q)
        || property.location.state.to_lowercase().contains(&q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PossessionPeriod, PropertyConfig, PropertyLocation, PropertyStatus};
    use chrono::{TimeZone, Utc};

    fn test_property(id: &str, city: &str, price: i64, premium: bool, day: u32) -> Property {
        Property {
            id: id.to_string(),
            name: format!("Listing {}", id),
            description: String::new(),
            price,
            location: PropertyLocation {
                address: "1 Test Road".to_string(),
                locality: "Testville".to_string(),
                city: city.to_string(),
                state: "Teststate".to_string(),
                pincode: "400001".to_string(),
                lat: 0.0,
                lng: 0.0,
            },
            config: PropertyConfig::TwoBhk,
            possession_period: PossessionPeriod::Ready,
            possession_date: "2025-01-01".to_string(),
            amenities: vec![],
            images: vec![],
            flat_video_url: String::new(),
            building_video_url: String::new(),
            seller_id: "seller-1".to_string(),
            seller_name: "Seller".to_string(),
            seller_phone: "+910000000000".to_string(),
            status: PropertyStatus::Approved,
            is_premium: premium,
            bedrooms: 2,
            bathrooms: 2,
            area: 1000,
            created_at: Utc.with_ymd_and_hms(2025, 7, day, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn open_criteria_returns_everything_premium_then_recency() {
        let properties = vec![
            test_property("a", "Mumbai", 5_000_000, false, 10),
            test_property("b", "Pune", 6_000_000, true, 5),
            test_property("c", "Mumbai", 7_000_000, false, 20),
            test_property("d", "Delhi", 8_000_000, true, 15),
        ];

        let results = apply(&properties, &FilterCriteria::any());
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();

        // Premium d (Jul 15) and b (Jul 5) ahead of non-premium c (Jul 20) and a (Jul 10)
        assert_eq!(ids, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn budget_bounds_are_inclusive() {
        let properties = vec![
            test_property("low", "Mumbai", 4_000_000, false, 1),
            test_property("min", "Mumbai", 5_000_000, false, 2),
            test_property("max", "Mumbai", 9_000_000, false, 3),
            test_property("high", "Mumbai", 9_000_001, false, 4),
        ];

        let criteria = FilterCriteria::any().with_budget(Some(5_000_000), Some(9_000_000));
        let results = apply(&properties, &criteria);
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();

        assert!(ids.contains(&"min"));
        assert!(ids.contains(&"max"));
        assert!(!ids.contains(&"low"));
        assert!(!ids.contains(&"high"));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let mut by_state = test_property("state", "Delhi", 1, false, 1);
        by_state.location.state = "Maharashtra".to_string();
        let properties = vec![
            test_property("city", "Mumbai", 1, false, 2),
            by_state,
            test_property("miss", "Chennai", 1, false, 3),
        ];

        let criteria = FilterCriteria::any().with_search("mumbai");
        let results = apply(&properties, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "city");

        let criteria = FilterCriteria::any().with_search("MAHARASHTRA");
        let results = apply(&properties, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "state");
    }

    #[test]
    fn search_matches_name_substring() {
        let mut named = test_property("named", "Chennai", 1, false, 1);
        named.name = "Skyline Heights".to_string();
        let properties = vec![named, test_property("other", "Chennai", 1, false, 2)];

        let results = apply(&properties, &FilterCriteria::any().with_search("skyline"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "named");
    }

    #[test]
    fn sort_is_stable_on_equal_keys() {
        // Same premium flag, same timestamp: insertion order must survive.
        let properties = vec![
            test_property("first", "Mumbai", 1, false, 10),
            test_property("second", "Mumbai", 2, false, 10),
            test_property("third", "Mumbai", 3, false, 10),
        ];

        let results = apply(&properties, &FilterCriteria::any());
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn predicates_combine_conjunctively() {
        let properties = vec![
            test_property("match", "Mumbai", 6_000_000, false, 1),
            test_property("wrong-city", "Pune", 6_000_000, false, 2),
            test_property("too-pricey", "Mumbai", 60_000_000, false, 3),
        ];

        let criteria = FilterCriteria::any()
            .with_city("Mumbai")
            .with_budget(None, Some(10_000_000));
        let results = apply(&properties, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "match");
    }

    #[test]
    fn status_filter_is_exact() {
        let mut pending = test_property("pending", "Mumbai", 1, false, 1);
        pending.status = PropertyStatus::Pending;
        let properties = vec![pending, test_property("approved", "Mumbai", 1, false, 2)];

        let criteria = FilterCriteria::any().with_status(PropertyStatus::Pending);
        let results = apply(&properties, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "pending");
    }

    #[test]
    fn input_collections_are_untouched() {
        let properties = vec![
            test_property("b", "Pune", 2, true, 1),
            test_property("a", "Mumbai", 1, false, 2),
        ];
        let criteria = FilterCriteria::any();

        let _ = apply(&properties, &criteria);

        assert_eq!(properties[0].id, "b");
        assert_eq!(properties[1].id, "a");
    }
}
