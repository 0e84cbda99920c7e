use thiserror::Error;

/// Errors surfaced by the record store, session and comparison engine.
///
/// Plain id lookups report absence as `Option::None` rather than an error;
/// these variants cover the cases a caller has to present to the user.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no user registered with email {0}")]
    UserNotFound(String),

    #[error("a user already exists with email {0}")]
    DuplicateEmail(String),

    #[error("sign in to manage favorites")]
    AuthenticationRequired,

    #[error("select at least 2 available properties to compare, got {0}")]
    InsufficientSelection(usize),

    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt session record: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
