use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Returned for every server-side failure; provider details stay in the logs.
pub const DELIVERY_FAILED_MESSAGE: &str = "Internal server error while sending the email";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Contact(#[from] folio_contact::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Contact(folio_contact::Error::Validation(e)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Contact(folio_contact::Error::Delivery(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                DELIVERY_FAILED_MESSAGE.to_string(),
            ),
        };

        (status_code, Json(json!({ "error": error_message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use folio_contact::ValidationError;

    use super::*;

    #[test]
    fn test_status_codes() {
        let response = AppError::BadRequest("invalid request body".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            AppError::from(folio_contact::Error::from(ValidationError::InvalidEmail))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::from(folio_contact::Error::Delivery(anyhow::anyhow!(
            "smtp timeout"
        )))
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
