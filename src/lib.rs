//! PropVista core: in-memory property listings with a filter/sort query
//! engine, side-by-side comparison, appointment scheduling and a
//! file-persisted session. Presentation layers consume this crate's async
//! call interface; data resets every process start except the session file.

pub mod compare;
pub mod error;
pub mod models;
pub mod query;
pub mod session;
pub mod store;

pub use error::{Error, Result};
