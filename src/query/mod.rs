pub mod engine;
pub mod runner;
pub mod traits;
pub mod types;

pub use runner::QueryRunner;
pub use traits::PropertySource;
pub use types::{FilterCriteria, BUDGET_CEILING};
