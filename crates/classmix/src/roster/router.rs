use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{GroupView, GroupingRequest, SessionId};
use super::repository::{GroupingRecord, GroupingRepository};
use super::service::{GroupingService, GroupingServiceError};

/// Router builder exposing HTTP endpoints for group generation and export.
pub fn roster_router<R>(service: Arc<GroupingService<R>>) -> Router
where
    R: GroupingRepository + 'static,
{
    Router::new()
        .route("/api/v1/roster/groups", post(generate_handler::<R>))
        .route("/api/v1/roster/groups/:session", get(current_handler::<R>))
        .route(
            "/api/v1/roster/groups/:session/csv",
            get(export_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateGroupsRequest {
    #[serde(default = "default_session")]
    pub(crate) session: String,
    pub(crate) names_text: String,
    #[serde(default)]
    pub(crate) separation_text: String,
    pub(crate) group_size: usize,
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

fn default_session() -> String {
    "default".to_string()
}

#[derive(Debug, Serialize)]
pub(crate) struct GroupingResponse {
    session: String,
    group_count: usize,
    student_count: usize,
    seed: Option<u64>,
    generated_at: DateTime<Utc>,
    groups: Vec<GroupView>,
}

impl GroupingResponse {
    fn from_record(session: &SessionId, record: &GroupingRecord) -> Self {
        Self {
            session: session.0.clone(),
            group_count: record.partition.group_count(),
            student_count: record.partition.member_count(),
            seed: record.seed,
            generated_at: record.generated_at,
            groups: record.group_views(),
        }
    }
}

pub(crate) async fn generate_handler<R>(
    State(service): State<Arc<GroupingService<R>>>,
    axum::Json(request): axum::Json<GenerateGroupsRequest>,
) -> Response
where
    R: GroupingRepository + 'static,
{
    let session = SessionId(request.session.clone());
    let grouping_request = GroupingRequest {
        names_text: request.names_text,
        separation_text: request.separation_text,
        group_size: request.group_size,
        seed: request.seed,
    };

    match service.generate(&session, &grouping_request) {
        Ok(record) => (
            StatusCode::OK,
            axum::Json(GroupingResponse::from_record(&session, &record)),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn current_handler<R>(
    State(service): State<Arc<GroupingService<R>>>,
    Path(session): Path<String>,
) -> Response
where
    R: GroupingRepository + 'static,
{
    let session = SessionId(session);
    match service.current(&session) {
        Ok(Some(record)) => (
            StatusCode::OK,
            axum::Json(GroupingResponse::from_record(&session, &record)),
        )
            .into_response(),
        Ok(None) => error_response(GroupingServiceError::NothingGenerated),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<R>(
    State(service): State<Arc<GroupingService<R>>>,
    Path(session): Path<String>,
) -> Response
where
    R: GroupingRepository + 'static,
{
    let session = SessionId(session);
    match service.export_csv(&session) {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"groups.csv\"",
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: GroupingServiceError) -> Response {
    let status = match &error {
        GroupingServiceError::Grouping(_) => StatusCode::UNPROCESSABLE_ENTITY,
        GroupingServiceError::GroupSizeOutOfRange { .. }
        | GroupingServiceError::SeedOutOfRange { .. } => StatusCode::BAD_REQUEST,
        GroupingServiceError::NothingGenerated => StatusCode::NOT_FOUND,
        GroupingServiceError::Repository(_) | GroupingServiceError::Export(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
