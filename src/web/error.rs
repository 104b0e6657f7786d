use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::database::roster_store::RosterError;

/// Error body shared by every endpoint: `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn missing_query_param(name: &str) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Missing required query parameter: {}", name),
        )
    }
}

impl From<RosterError> for ApiError {
    fn from(e: RosterError) -> Self {
        let status = match e {
            RosterError::NotFound => StatusCode::NOT_FOUND,
            RosterError::AlreadyRegistered | RosterError::NotRegistered => StatusCode::BAD_REQUEST,
            RosterError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, e.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_errors_map_to_status_codes() {
        assert_eq!(
            ApiError::from(RosterError::NotFound),
            ApiError::new(StatusCode::NOT_FOUND, "Activity not found")
        );
        assert_eq!(
            ApiError::from(RosterError::AlreadyRegistered).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(RosterError::NotRegistered).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(RosterError::Internal("poisoned".into())).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn details_carry_expected_wording() {
        assert!(ApiError::from(RosterError::AlreadyRegistered)
            .detail
            .to_lowercase()
            .contains("already signed up"));
        assert!(ApiError::from(RosterError::NotRegistered)
            .detail
            .to_lowercase()
            .contains("not signed up"));
    }
}
