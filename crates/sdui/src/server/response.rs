use crate::content::{ContentError, Resolved};
use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::error;

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND.into_response(),
            Self::State { .. } => {
                error!(error = %self, "Content slices are not available");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            },
        }
    }
}

/// Bare JSON array tagged with its `Content-Language`.
impl IntoResponse for Resolved {
    fn into_response(self) -> Response {
        ([(header::CONTENT_LANGUAGE, self.language.to_string())], Json(self.plugins)).into_response()
    }
}
