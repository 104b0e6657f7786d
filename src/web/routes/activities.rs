use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::models::ActivityCatalog;
use crate::services::roster_service::{self, RosterConfirmation};
use crate::web::error::ApiError;
use crate::web::SharedRoster;

// Query strings are read as raw pairs so a repeated `email` key resolves to
// its last value instead of failing deserialization.
type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    pub fn from_pairs(pairs: QueryPairs) -> Self {
        let email = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last();
        Self { email }
    }

    fn require(self) -> Result<String, ApiError> {
        self.email.ok_or_else(|| ApiError::missing_query_param("email"))
    }
}

fn roster_target(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<(String, String), ApiError> {
    let Path(activity_name) = path?;
    let Query(pairs) = query?;
    let email = EmailQuery::from_pairs(pairs).require()?;
    Ok((activity_name, email))
}

pub async fn activities_handler(
    State(store): State<SharedRoster>,
) -> Result<Json<ActivityCatalog>, ApiError> {
    let catalog = roster_service::list_activities(&store)?;
    Ok(Json(catalog))
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(store): State<SharedRoster>,
) -> Result<Json<RosterConfirmation>, ApiError> {
    let (activity_name, email) = roster_target(path, query)?;
    let confirmation = roster_service::signup(&store, &activity_name, &email)?;
    Ok(Json(confirmation))
}

pub async fn unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(store): State<SharedRoster>,
) -> Result<Json<RosterConfirmation>, ApiError> {
    let (activity_name, email) = roster_target(path, query)?;
    let confirmation = roster_service::unregister(&store, &activity_name, &email)?;
    Ok(Json(confirmation))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> QueryPairs {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_email_resolves_to_last_value() {
        let query = EmailQuery::from_pairs(pairs(&[("email", "a@x.edu"), ("email", "b@x.edu")]));
        assert_eq!(query.email.as_deref(), Some("b@x.edu"));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let query = EmailQuery::from_pairs(pairs(&[("name", "x"), ("email", "a@x.edu")]));
        assert_eq!(query.email.as_deref(), Some("a@x.edu"));
        assert_eq!(EmailQuery::from_pairs(pairs(&[("name", "x")])), EmailQuery::default());
    }
}
