use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{AppError, JsonBody};
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
}

impl MutationResponse {
    fn ok(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
        })
    }
}

/// Request bodies must be JSON objects; arrays and scalars are rejected.
fn object_body(body: Value) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::Validation(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

/// GET /api/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
) -> Result<Json<ResumeDocument>, AppError> {
    Ok(Json(state.resume.get_all().await?))
}

/// GET /api/resume/:section
pub async fn handle_get_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(state.resume.get_section(&section).await?))
}

/// POST /api/resume
pub async fn handle_add_sections(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<MutationResponse>, AppError> {
    state.resume.add_or_overwrite(object_body(body)?).await?;
    Ok(MutationResponse::ok("Data added successfully"))
}

/// PUT /api/resume
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<MutationResponse>, AppError> {
    let doc = ResumeDocument::from(object_body(body)?);
    state.resume.replace_all(doc).await?;
    Ok(MutationResponse::ok("Data replaced successfully"))
}

/// PATCH /api/resume
pub async fn handle_merge_resume(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<MutationResponse>, AppError> {
    state.resume.merge_update(object_body(body)?).await?;
    Ok(MutationResponse::ok("Data updated successfully"))
}

/// DELETE /api/resume/:section
pub async fn handle_delete_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<MutationResponse>, AppError> {
    state.resume.delete_section(&section).await?;
    Ok(MutationResponse::ok(format!("Section '{section}' deleted")))
}
