use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::api::response::{ApiResponse, ErrorResponse};
use crate::features::FeatureState;

use super::commands::{LoginCommand, LoginError, LogoutError};

pub fn session_routes() -> Router<FeatureState> {
    Router::new()
        .route("/", get(current_session).delete(logout))
        .route("/login", axum::routing::post(login))
}

#[tracing::instrument(skip(state))]
async fn current_session(State(state): State<FeatureState>) -> Response {
    let response = super::queries::current::handle(state.session).await;

    tracing::debug!(authenticated = response.authenticated, "Session queried via API");

    (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
}

#[tracing::instrument(skip(state, command), fields(provider = %command.provider))]
async fn login(
    State(state): State<FeatureState>,
    Json(command): Json<LoginCommand>,
) -> Result<Response, SessionApiError> {
    let delay = std::time::Duration::from_millis(state.mock.login_delay_ms);

    let user = super::commands::login::handle(state.session, command, delay).await?;

    tracing::info!(user_id = %user.id, "User logged in via API");

    Ok((StatusCode::OK, Json(ApiResponse::success(user))).into_response())
}

#[tracing::instrument(skip(state))]
async fn logout(State(state): State<FeatureState>) -> Result<Response, SessionApiError> {
    super::commands::logout::handle(state.session).await?;

    tracing::info!("User logged out via API");

    Ok((StatusCode::OK, Json(ApiResponse::success(json!({ "loggedOut": true }))))
        .into_response())
}

#[derive(Debug)]
enum SessionApiError {
    LoginError(LoginError),
    LogoutError(LogoutError),
}

impl From<LoginError> for SessionApiError {
    fn from(err: LoginError) -> Self {
        Self::LoginError(err)
    }
}

impl From<LogoutError> for SessionApiError {
    fn from(err: LogoutError) -> Self {
        Self::LogoutError(err)
    }
}

impl IntoResponse for SessionApiError {
    fn into_response(self) -> Response {
        match self {
            SessionApiError::LoginError(LoginError::InvalidProvider(_)) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::UNPROCESSABLE_ENTITY, Json(error)).into_response()
            },
            SessionApiError::LoginError(LoginError::Persistence(_))
            | SessionApiError::LogoutError(LogoutError::Persistence(_)) => {
                tracing::error!("Session persistence error: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "Could not update session state");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for SessionApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoginError(e) => write!(f, "{}", e),
            Self::LogoutError(e) => write!(f, "{}", e),
        }
    }
}
