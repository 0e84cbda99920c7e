//! Last-issued-wins query dispatch.
//!
//! Filter changes in the UI can fire a new query before the previous one
//! resolves. The runner hands every query a ticket from a monotonic
//! counter; a result is surfaced only while its ticket is still the
//! most-recently-issued, so out-of-order resolutions are discarded
//! instead of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::models::Property;
use crate::query::traits::PropertySource;
use crate::query::types::FilterCriteria;

pub struct QueryRunner {
    source: Arc<dyn PropertySource>,
    latest: AtomicU64,
}

impl QueryRunner {
    pub fn new(source: Arc<dyn PropertySource>) -> Self {
        Self {
            source,
            latest: AtomicU64::new(0),
        }
    }

    /// Run a query against the source. Returns `Some(results)` when this
    /// query is still the most recently issued at resolution time, `None`
    /// when a newer query superseded it while it was in flight.
    pub async fn run(&self, criteria: &FilterCriteria) -> Option<Vec<Property>> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let results = self.source.fetch(criteria).await;

        if self.latest.load(Ordering::SeqCst) == ticket {
            Some(results)
        } else {
            debug!(
                ticket,
                source = self.source.source_name(),
                "discarding stale query result"
            );
            None
        }
    }
}
