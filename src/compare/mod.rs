//! Side-by-side property comparison.
//!
//! A bounded, ordered selection of property ids feeds the comparison
//! builder, which resolves the ids through the record store and computes
//! the amenity row set and best-value price flags.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Property;
use crate::store::RecordStore;

/// Upper bound on how many properties can be compared at once.
pub const MAX_COMPARE: usize = 3;

/// Ordered set of selected property ids. Insertion order is preserved,
/// duplicates are refused, and the set never exceeds [`MAX_COMPARE`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareSelection {
    ids: Vec<String>,
}

impl CompareSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id. Returns false (and leaves the selection unchanged) when
    /// the selection is full or the id is already present.
    pub fn add(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.ids.len() >= MAX_COMPARE || self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove an id; a no-op when absent.
    pub fn remove(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Resolved side-by-side comparison of 2-3 properties.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Selected properties in selection order
    pub properties: Vec<Property>,
    /// Sorted union of amenities across the selection; one row per entry
    pub amenity_rows: Vec<String>,
    /// Lowest asking price in the selection
    pub min_price: i64,
    /// Mean star rating per property, index-aligned with `properties`
    pub average_ratings: Vec<Option<f64>>,
}

impl Comparison {
    /// Whether the property carries the amenity for the given row.
    /// A missing amenity renders as absent, never as an error.
    pub fn has_amenity(property: &Property, amenity: &str) -> bool {
        property.amenities.iter().any(|a| a == amenity)
    }

    /// Every property priced exactly at the selection minimum is flagged;
    /// equal prices are all flagged at once.
    pub fn is_best_value(&self, property: &Property) -> bool {
        property.price == self.min_price
    }
}

/// Build a comparison for the current selection. Ids that no longer
/// resolve are dropped; fewer than 2 survivors is an insufficient
/// selection, not a one-item comparison.
pub async fn compare(store: &RecordStore, selection: &CompareSelection) -> Result<Comparison> {
    let properties = store.get_properties_by_ids(selection.ids()).await;

    if properties.len() < 2 {
        return Err(Error::InsufficientSelection(properties.len()));
    }

    let amenity_rows: Vec<String> = properties
        .iter()
        .flat_map(|p| p.amenities.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();

    // Non-empty by the length check above
    let min_price = properties.iter().map(|p| p.price).min().unwrap_or(0);

    let mut average_ratings = Vec::with_capacity(properties.len());
    for property in &properties {
        average_ratings.push(store.average_rating(&property.id).await);
    }

    debug!(
        selected = properties.len(),
        rows = amenity_rows.len(),
        "built property comparison"
    );

    Ok(Comparison {
        properties,
        amenity_rows,
        min_price,
        average_ratings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewProperty, PossessionPeriod, PropertyConfig, PropertyLocation};

    fn listing(name: &str, price: i64, amenities: &[&str]) -> NewProperty {
        NewProperty {
            name: name.to_string(),
            description: String::new(),
            price,
            location: PropertyLocation {
                address: "1 Test Road".to_string(),
                locality: "Testville".to_string(),
                city: "Mumbai".to_string(),
                state: "Maharashtra".to_string(),
                pincode: "400001".to_string(),
                lat: 19.0,
                lng: 72.8,
            },
            config: PropertyConfig::TwoBhk,
            possession_period: PossessionPeriod::Ready,
            possession_date: "2025-10-01".to_string(),
            amenities: amenities.iter().map(|s| s.to_string()).collect(),
            images: vec![],
            flat_video_url: String::new(),
            building_video_url: String::new(),
            is_premium: false,
            bedrooms: 2,
            bathrooms: 2,
            area: 900,
        }
    }

    #[test]
    fn selection_caps_at_three_members() {
        let mut selection = CompareSelection::new();
        assert!(selection.add("a"));
        assert!(selection.add("b"));
        assert!(selection.add("c"));
        assert!(selection.is_full());

        assert!(!selection.add("d"));
        assert_eq!(selection.ids(), &["a", "b", "c"]);
    }

    #[test]
    fn selection_refuses_duplicates_and_preserves_order() {
        let mut selection = CompareSelection::new();
        selection.add("a");
        selection.add("b");
        assert!(!selection.add("a"));
        assert_eq!(selection.ids(), &["a", "b"]);
    }

    #[test]
    fn remove_is_a_noop_when_absent() {
        let mut selection = CompareSelection::new();
        selection.add("a");
        selection.remove("missing");
        assert_eq!(selection.ids(), &["a"]);

        selection.remove("a");
        assert!(selection.is_empty());
    }

    #[test]
    fn clear_empties_the_selection() {
        let mut selection = CompareSelection::new();
        selection.add("a");
        selection.add("b");
        selection.clear();
        assert!(selection.is_empty());
        assert!(selection.add("a"));
    }

    #[tokio::test]
    async fn amenity_rows_are_the_sorted_union() {
        let store = RecordStore::instant();
        let a = store
            .create_property(listing("A", 5_000_000, &["Gym", "Parking"]), "s", "S", "+91")
            .await;
        let b = store
            .create_property(listing("B", 6_000_000, &["Clubhouse", "Gym"]), "s", "S", "+91")
            .await;

        let mut selection = CompareSelection::new();
        selection.add(a.id.clone());
        selection.add(b.id.clone());

        let comparison = compare(&store, &selection).await.unwrap();
        assert_eq!(comparison.amenity_rows, vec!["Clubhouse", "Gym", "Parking"]);

        // Absent amenity renders as absent, not an error
        assert!(Comparison::has_amenity(&comparison.properties[0], "Parking"));
        assert!(!Comparison::has_amenity(&comparison.properties[0], "Clubhouse"));
    }

    #[tokio::test]
    async fn best_value_flags_every_price_tie() {
        let store = RecordStore::instant();
        let a = store
            .create_property(listing("A", 5_000_000, &[]), "s", "S", "+91")
            .await;
        let b = store
            .create_property(listing("B", 4_800_000, &[]), "s", "S", "+91")
            .await;
        let c = store
            .create_property(listing("C", 4_800_000, &[]), "s", "S", "+91")
            .await;

        let mut selection = CompareSelection::new();
        selection.add(a.id.clone());
        selection.add(b.id.clone());
        selection.add(c.id.clone());

        let comparison = compare(&store, &selection).await.unwrap();
        assert_eq!(comparison.min_price, 4_800_000);

        let flagged: Vec<&str> = comparison
            .properties
            .iter()
            .filter(|p| comparison.is_best_value(p))
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(flagged, vec!["B", "C"]);
    }

    #[tokio::test]
    async fn unresolvable_ids_drop_and_selection_order_survives() {
        let store = RecordStore::instant();

        let mut selection = CompareSelection::new();
        selection.add("prop-004");
        selection.add("prop-999");
        selection.add("prop-001");

        let comparison = compare(&store, &selection).await.unwrap();
        let names: Vec<&str> = comparison
            .properties
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(names, vec!["prop-004", "prop-001"]);
    }

    #[tokio::test]
    async fn fewer_than_two_resolved_is_insufficient() {
        let store = RecordStore::instant();

        let mut selection = CompareSelection::new();
        selection.add("prop-001");
        selection.add("prop-999");

        let result = compare(&store, &selection).await;
        assert!(matches!(result, Err(Error::InsufficientSelection(1))));
    }

    #[tokio::test]
    async fn seeded_reviews_feed_the_rating_row() {
        let store = RecordStore::instant();

        let mut selection = CompareSelection::new();
        selection.add("prop-001");
        selection.add("prop-004");

        let comparison = compare(&store, &selection).await.unwrap();
        assert!(comparison.average_ratings[0].is_some());
        assert!(comparison.average_ratings[1].is_none());
    }
}
