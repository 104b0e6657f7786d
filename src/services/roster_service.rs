use serde::Serialize;
use tracing::{info, warn};

use crate::database::roster_store::{RosterError, RosterStore};
use crate::models::ActivityCatalog;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RosterConfirmation {
    pub message: String,
}

pub fn list_activities(store: &RosterStore) -> Result<ActivityCatalog, RosterError> {
    store.list_activities()
}

pub fn signup(
    store: &RosterStore,
    activity_name: &str,
    email: &str,
) -> Result<RosterConfirmation, RosterError> {
    match store.signup(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Ok(RosterConfirmation {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub fn unregister(
    store: &RosterStore,
    activity_name: &str,
    email: &str,
) -> Result<RosterConfirmation, RosterError> {
    match store.unregister(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "unregister accepted");
            Ok(RosterConfirmation {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed;

    #[test]
    fn signup_message_names_email_and_activity() {
        let store = RosterStore::new(seed::default_activities());
        let confirmation = signup(&store, "Chess Club", "newstudent@mergington.edu").unwrap();
        assert_eq!(
            confirmation.message,
            "Signed up newstudent@mergington.edu for Chess Club"
        );
    }

    #[test]
    fn unregister_message_names_email_and_activity() {
        let store = RosterStore::new(seed::default_activities());
        let confirmation = unregister(&store, "Chess Club", "michael@mergington.edu").unwrap();
        assert_eq!(
            confirmation.message,
            "Unregistered michael@mergington.edu from Chess Club"
        );
    }

    #[test]
    fn errors_pass_through_unchanged() {
        let store = RosterStore::new(seed::default_activities());
        assert_eq!(
            signup(&store, "Chess Club", "michael@mergington.edu"),
            Err(RosterError::AlreadyRegistered)
        );
        assert_eq!(
            unregister(&store, "Chess Club", "nobody@mergington.edu"),
            Err(RosterError::NotRegistered)
        );
        assert_eq!(
            signup(&store, "Nonexistent Club", "a@mergington.edu"),
            Err(RosterError::NotFound)
        );
    }
}
