use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::api::response::{ApiResponse, ErrorResponse};
use crate::features::FeatureState;

use super::queries::{ListSubjectsError, ListSubjectsQuery};

pub fn subjects_routes() -> Router<FeatureState> {
    Router::new().route("/", get(list_subjects))
}

#[tracing::instrument(skip(state, query), fields(semester = ?query.semester))]
async fn list_subjects(
    State(state): State<FeatureState>,
    Query(query): Query<ListSubjectsQuery>,
) -> Result<Response, SubjectApiError> {
    let subjects = super::queries::list::handle(state.catalog, query).await?;

    tracing::debug!(count = subjects.len(), "Subjects listed via API");

    Ok((StatusCode::OK, Json(ApiResponse::success(subjects))).into_response())
}

#[derive(Debug)]
enum SubjectApiError {
    ListError(ListSubjectsError),
}

impl From<ListSubjectsError> for SubjectApiError {
    fn from(err: ListSubjectsError) -> Self {
        Self::ListError(err)
    }
}

impl IntoResponse for SubjectApiError {
    fn into_response(self) -> Response {
        match self {
            SubjectApiError::ListError(ListSubjectsError::InvalidSemester(_)) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::UNPROCESSABLE_ENTITY, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for SubjectApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListError(e) => write!(f, "{}", e),
        }
    }
}
