use async_trait::async_trait;

use crate::models::Property;
use crate::query::types::FilterCriteria;

/// Common trait for anything that can answer a filtered property query.
/// The in-memory store implements it; tests substitute slow or canned
/// sources to exercise the query runner.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetch properties matching the criteria, already ordered.
    async fn fetch(&self, criteria: &FilterCriteria) -> Vec<Property>;

    /// Get the name of the backing source
    fn source_name(&self) -> &'static str;
}
