use serde::{Deserialize, Serialize};

use crate::models::{PossessionPeriod, PropertyConfig, PropertyStatus};

/// Legacy open-ended budget ceiling used by search forms. A maximum at this
/// value means "no upper bound" and is never applied as a literal filter.
pub const BUDGET_CEILING: i64 = 200_000_000;

/// Filter criteria for property listings.
///
/// `None` in any field means "no constraint"; `Default` matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against name, locality, city or state
    pub search: Option<String>,
    pub city: Option<String>,
    pub config: Option<PropertyConfig>,
    /// Inclusive lower bound on price
    pub budget_min: Option<i64>,
    /// Inclusive upper bound on price
    pub budget_max: Option<i64>,
    pub possession_period: Option<PossessionPeriod>,
    pub status: Option<PropertyStatus>,
}

impl FilterCriteria {
    /// Criteria with every field unconstrained.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = normalize_text(search.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = normalize_text(city.into());
        self
    }

    pub fn with_config(mut self, config: PropertyConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_budget(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.budget_min = min;
        self.budget_max = max.filter(|&m| m < BUDGET_CEILING);
        self
    }

    pub fn with_possession(mut self, period: PossessionPeriod) -> Self {
        self.possession_period = Some(period);
        self
    }

    pub fn with_status(mut self, status: PropertyStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Budget bounds from raw form input. A minimum that does not parse
    /// falls back to unconstrained (same as 0); a maximum that does not
    /// parse, or that sits at [`BUDGET_CEILING`], falls back to "no upper
    /// bound" rather than filtering at a literal value.
    pub fn with_budget_input(self, raw_min: &str, raw_max: &str) -> Self {
        let min = raw_min.trim().parse::<i64>().ok().filter(|&m| m > 0);
        let max = raw_max.trim().parse::<i64>().ok();
        self.with_budget(min, max)
    }
}

/// Empty or whitespace-only strings mean "no constraint".
fn normalize_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_means_no_constraint() {
        let criteria = FilterCriteria::any().with_search("   ");
        assert!(criteria.search.is_none());
    }

    #[test]
    fn budget_ceiling_means_unbounded() {
        let criteria = FilterCriteria::any().with_budget(Some(1_000_000), Some(BUDGET_CEILING));
        assert_eq!(criteria.budget_min, Some(1_000_000));
        assert!(criteria.budget_max.is_none());
    }

    #[test]
    fn malformed_budget_input_falls_back_to_open_bounds() {
        let criteria = FilterCriteria::any().with_budget_input("abc", "not-a-number");
        assert!(criteria.budget_min.is_none());
        assert!(criteria.budget_max.is_none());
    }

    #[test]
    fn valid_budget_input_is_parsed() {
        let criteria = FilterCriteria::any().with_budget_input("5000000", "20000000");
        assert_eq!(criteria.budget_min, Some(5_000_000));
        assert_eq!(criteria.budget_max, Some(20_000_000));
    }
}
