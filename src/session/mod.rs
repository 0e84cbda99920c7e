//! Signed-in user state and its single piece of durable storage.
//!
//! The authenticated user record (including favorites) is persisted as
//! JSON under a fixed file name in a caller-chosen directory, read back on
//! process start and cleared on logout. The record store itself resets
//! every run; this file is the only state that survives.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{User, UserRole};
use crate::store::RecordStore;

/// Fixed session file name within the session directory.
pub const SESSION_FILE: &str = "propvista_user.json";

pub struct Session {
    path: PathBuf,
    user: Option<User>,
}

impl Session {
    /// Restore the session from `dir`, signed out when no valid record is
    /// present. A corrupt session file is discarded with a warning rather
    /// than failing startup.
    pub async fn load(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(SESSION_FILE);
        let user = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<User>(&bytes) {
                Ok(user) => {
                    info!(email = %user.email, "restored session");
                    Some(user)
                }
                Err(err) => {
                    warn!(%err, "discarding corrupt session file");
                    None
                }
            },
            Err(_) => None,
        };
        Self { path, user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Sign in by email. Fails with `UserNotFound` when the email is not
    /// registered in the store.
    pub async fn login(&mut self, store: &RecordStore, email: &str) -> Result<User> {
        let user = store
            .find_user_by_email(email)
            .await
            .ok_or_else(|| Error::UserNotFound(email.to_string()))?;
        self.user = Some(user.clone());
        self.persist().await?;
        info!(email, "signed in");
        Ok(user)
    }

    /// Register a new account and sign it in. `DuplicateEmail` propagates
    /// from the store and leaves the session untouched.
    pub async fn register(
        &mut self,
        store: &RecordStore,
        name: &str,
        email: &str,
        role: UserRole,
        phone: &str,
        registration_paid: bool,
    ) -> Result<User> {
        let user = store
            .register_user(name, email, role, phone, registration_paid)
            .await?;
        self.user = Some(user.clone());
        self.persist().await?;
        Ok(user)
    }

    /// Sign out and remove the session file.
    pub async fn logout(&mut self) -> Result<()> {
        self.user = None;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Toggle a favorite for the signed-in user. Anonymous attempts fail
    /// with `AuthenticationRequired` and touch neither the store nor the
    /// session file.
    pub async fn toggle_favorite(
        &mut self,
        store: &RecordStore,
        property_id: &str,
    ) -> Result<Vec<String>> {
        let user = self.user.as_mut().ok_or(Error::AuthenticationRequired)?;
        let favorites = store.toggle_favorite(&user.id, property_id).await?;
        user.favorites = favorites.clone();
        self.persist().await?;
        Ok(favorites)
    }

    async fn persist(&self) -> Result<()> {
        if let Some(user) = &self.user {
            let json = serde_json::to_string_pretty(user)?;
            tokio::fs::write(&self.path, json).await?;
        }
        Ok(())
    }
}
