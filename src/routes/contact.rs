use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use folio_contact::ContactForm;
use serde::Serialize;

use crate::{error::AppError, routes::AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOutput {
    pub message: String,
    pub email_id: Option<String>,
}

/// POST /api/contact
pub async fn action(
    State(app_state): State<AppState>,
    input: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<ActionOutput>, AppError> {
    let Json(form) = input.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected contact request body");
        AppError::BadRequest("invalid request body".to_string())
    })?;

    let submitted = app_state.contact_command.submit(form).await?;

    Ok(Json(ActionOutput {
        message: "Email sent successfully".to_string(),
        email_id: submitted.email_id,
    }))
}
