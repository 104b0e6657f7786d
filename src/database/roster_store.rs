use std::sync::{PoisonError, RwLock};

use thiserror::Error;
use tracing::error;

use crate::models::ActivityCatalog;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up for this activity")]
    AlreadyRegistered,

    #[error("Student is not signed up for this activity")]
    NotRegistered,

    #[error("Roster store unavailable: {0}")]
    Internal(String),
}

impl<T> From<PoisonError<T>> for RosterError {
    fn from(e: PoisonError<T>) -> Self {
        error!(?e, "Roster lock poisoned");
        RosterError::Internal(e.to_string())
    }
}

/// In-memory roster of every activity, shared by all request handlers.
///
/// The whole catalog sits behind one lock. Mutations hold the write lock for
/// both the membership check and the change, so two concurrent signups for the
/// same email can never both succeed.
#[derive(Debug, Default)]
pub struct RosterStore {
    catalog: RwLock<ActivityCatalog>,
}

impl RosterStore {
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    pub fn list_activities(&self) -> Result<ActivityCatalog, RosterError> {
        let catalog = self.catalog.read()?;
        Ok(catalog.clone())
    }

    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut catalog = self.catalog.write()?;
        let activity = catalog
            .get_mut(activity_name)
            .ok_or(RosterError::NotFound)?;

        if activity.is_registered(email) {
            return Err(RosterError::AlreadyRegistered);
        }

        // max_participants is informational only; signups past it are accepted.
        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut catalog = self.catalog.write()?;
        let activity = catalog
            .get_mut(activity_name)
            .ok_or(RosterError::NotFound)?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotRegistered);
        };
        activity.participants.remove(position);
        Ok(())
    }
}
