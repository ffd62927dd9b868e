//! School handlers: welcome, add, list by proximity.

use crate::error::{AppError, StorageError, StorageErrorKind};
use crate::model::{SchoolCreated, Welcome};
use crate::service::{parse_new_school, parse_reference_point};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

pub async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the School Finder API",
    })
}

pub async fn add_school(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = match body {
        Ok(Json(body)) => body,
        // No JSON content type: nothing was parsed, so every field is missing.
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Default::default()),
        Err(rejection) => return Err(body_rejection(rejection)),
    };
    let school = parse_new_school(&body)?;
    let id = state.schools.create(&school).await.map_err(classify_create_failure)?;
    tracing::info!(school_id = id, name = %school.name, "school added");
    Ok((
        StatusCode::CREATED,
        Json(SchoolCreated {
            message: "School added successfully",
            school_id: id,
        }),
    ))
}

pub async fn list_schools(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let origin = parse_reference_point(
        params.get("latitude").map(String::as_str),
        params.get("longitude").map(String::as_str),
    )?;
    let schools = state
        .schools
        .find_all_sorted_by_proximity(origin)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "error fetching schools");
            AppError::Internal("An error occurred while fetching schools".into())
        })?;
    Ok(Json(schools))
}

fn body_rejection(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection, "rejected addSchool body");
    match rejection {
        JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
            AppError::Validation("Invalid JSON body".into())
        }
        other => {
            let status = other.status();
            AppError::Body(status, status.canonical_reason().unwrap_or("Bad Request").to_string())
        }
    }
}

fn classify_create_failure(e: StorageError) -> AppError {
    tracing::error!(kind = ?e.kind, error = %e.source, "error adding school");
    match e.kind {
        StorageErrorKind::Duplicate => AppError::Conflict("School with the same name already exists".into()),
        StorageErrorKind::BadField => AppError::Validation("Invalid fields or data format".into()),
        StorageErrorKind::Other => AppError::Internal("An error occurred while adding the school".into()),
    }
}
