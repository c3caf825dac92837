use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::api::response::{ApiResponse, ErrorResponse};
use crate::features::FeatureState;

use super::{
    commands::{
        AddCommentCommand, AddCommentError, DownloadResourceCommand, DownloadResourceError,
        RateResourceCommand, RateResourceError, UploadResourceCommand, UploadResourceError,
    },
    queries::{
        GetResourceError, GetResourceQuery, ListCommentsError, ListCommentsQuery,
        ListResourcesError, ListResourcesQuery,
    },
};

pub fn resources_routes() -> Router<FeatureState> {
    Router::new()
        .route("/", get(list_resources))
        .route("/", post(upload_resource))
        .route("/:id", get(get_resource))
        .route("/:id/download", post(download_resource))
        .route("/:id/rating", post(rate_resource))
        .route("/:id/comments", get(list_comments))
        .route("/:id/comments", post(add_comment))
}

#[tracing::instrument(skip(state, raw_query))]
async fn list_resources(
    State(state): State<FeatureState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, ResourceApiError> {
    let query = ListResourcesQuery {
        query_string: raw_query.unwrap_or_default(),
    };

    let response = super::queries::list::handle(state.catalog, query).await?;

    tracing::debug!(count = response.items.len(), "Resources listed via API");

    let meta = json!({
        "filters": response.filters,
        "queryString": response.canonical_query,
        "total": response.items.len(),
    });

    Ok((StatusCode::OK, Json(ApiResponse::success_with_meta(response.items, meta)))
        .into_response())
}

#[tracing::instrument(skip(state, command), fields(title = %command.title))]
async fn upload_resource(
    State(state): State<FeatureState>,
    Json(command): Json<UploadResourceCommand>,
) -> Result<Response, ResourceApiError> {
    let user = state.session.current().await;
    let delay = std::time::Duration::from_millis(state.mock.upload_delay_ms);

    let response = super::commands::upload::handle(state.catalog, command, user, delay).await?;

    tracing::info!(
        resource_id = %response.id,
        "Resource uploaded via API"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(state), fields(id = %id))]
async fn get_resource(
    State(state): State<FeatureState>,
    Path(id): Path<String>,
) -> Result<Response, ResourceApiError> {
    let response = super::queries::get::handle(state.catalog, GetResourceQuery { id }).await?;

    tracing::debug!(resource_id = %response.id, "Resource retrieved via API");

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(state), fields(id = %id))]
async fn download_resource(
    State(state): State<FeatureState>,
    Path(id): Path<String>,
) -> Result<Response, ResourceApiError> {
    let command = DownloadResourceCommand { resource_id: id };

    let response = super::commands::download::handle(state.catalog, state.session, command).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(state, command), fields(id = %id, rating = command.rating))]
async fn rate_resource(
    State(state): State<FeatureState>,
    Path(id): Path<String>,
    Json(mut command): Json<RateResourceCommand>,
) -> Result<Response, ResourceApiError> {
    command.resource_id = id;

    let response = super::commands::rate::handle(state.catalog, state.session, command).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(state), fields(id = %id))]
async fn list_comments(
    State(state): State<FeatureState>,
    Path(id): Path<String>,
) -> Result<Response, ResourceApiError> {
    let query = ListCommentsQuery { resource_id: id };

    let comments = super::queries::comments::handle(state.catalog, query).await?;

    tracing::debug!(count = comments.len(), "Comments listed via API");

    Ok((StatusCode::OK, Json(ApiResponse::success(comments))).into_response())
}

#[tracing::instrument(skip(state, command), fields(id = %id))]
async fn add_comment(
    State(state): State<FeatureState>,
    Path(id): Path<String>,
    Json(mut command): Json<AddCommentCommand>,
) -> Result<Response, ResourceApiError> {
    command.resource_id = id;

    let response = super::commands::comment::handle(state.catalog, state.session, command).await?;

    tracing::info!(comment_id = %response.id, "Comment added via API");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))).into_response())
}

#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
enum ResourceApiError {
    ListError(ListResourcesError),
    GetError(GetResourceError),
    UploadError(UploadResourceError),
    DownloadError(DownloadResourceError),
    RateError(RateResourceError),
    CommentError(AddCommentError),
    ListCommentsError(ListCommentsError),
}

impl From<ListResourcesError> for ResourceApiError {
    fn from(err: ListResourcesError) -> Self {
        Self::ListError(err)
    }
}

impl From<GetResourceError> for ResourceApiError {
    fn from(err: GetResourceError) -> Self {
        Self::GetError(err)
    }
}

impl From<UploadResourceError> for ResourceApiError {
    fn from(err: UploadResourceError) -> Self {
        Self::UploadError(err)
    }
}

impl From<DownloadResourceError> for ResourceApiError {
    fn from(err: DownloadResourceError) -> Self {
        Self::DownloadError(err)
    }
}

impl From<RateResourceError> for ResourceApiError {
    fn from(err: RateResourceError) -> Self {
        Self::RateError(err)
    }
}

impl From<AddCommentError> for ResourceApiError {
    fn from(err: AddCommentError) -> Self {
        Self::CommentError(err)
    }
}

impl From<ListCommentsError> for ResourceApiError {
    fn from(err: ListCommentsError) -> Self {
        Self::ListCommentsError(err)
    }
}

impl IntoResponse for ResourceApiError {
    fn into_response(self) -> Response {
        match self {
            ResourceApiError::ListError(ListResourcesError::Filter(_)) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::UNPROCESSABLE_ENTITY, Json(error)).into_response()
            },

            ResourceApiError::GetError(GetResourceError::NotFound(_)) => {
                let error = ErrorResponse::new("NOT_FOUND", self.to_string());
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },

            ResourceApiError::UploadError(UploadResourceError::SubjectNotFound(_)) => {
                let error = ErrorResponse::new("NOT_FOUND", self.to_string());
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },
            ResourceApiError::UploadError(_) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::UNPROCESSABLE_ENTITY, Json(error)).into_response()
            },

            ResourceApiError::DownloadError(DownloadResourceError::NotAuthenticated)
            | ResourceApiError::RateError(RateResourceError::NotAuthenticated)
            | ResourceApiError::CommentError(AddCommentError::NotAuthenticated) => {
                let error = ErrorResponse::new("UNAUTHORIZED", self.to_string());
                (StatusCode::UNAUTHORIZED, Json(error)).into_response()
            },

            ResourceApiError::DownloadError(DownloadResourceError::NotFound(_))
            | ResourceApiError::RateError(RateResourceError::NotFound(_))
            | ResourceApiError::CommentError(AddCommentError::NotFound(_))
            | ResourceApiError::ListCommentsError(ListCommentsError::ResourceNotFound(_)) => {
                let error = ErrorResponse::new("NOT_FOUND", self.to_string());
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },

            ResourceApiError::RateError(RateResourceError::InvalidRating(_))
            | ResourceApiError::CommentError(AddCommentError::ContentRequired)
            | ResourceApiError::CommentError(AddCommentError::InvalidRating(_)) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::UNPROCESSABLE_ENTITY, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for ResourceApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListError(e) => write!(f, "{}", e),
            Self::GetError(e) => write!(f, "{}", e),
            Self::UploadError(e) => write!(f, "{}", e),
            Self::DownloadError(e) => write!(f, "{}", e),
            Self::RateError(e) => write!(f, "{}", e),
            Self::CommentError(e) => write!(f, "{}", e),
            Self::ListCommentsError(e) => write!(f, "{}", e),
        }
    }
}
