use api_shared::MessageRes;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tutorials_core::TutorialError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Tutorial(#[from] TutorialError),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// The id path segment could not be decoded, so no record can match it.
    #[error("Not found Tutorial: {0}")]
    UndecodableId(String),
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::UndecodableId(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedPayload(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedPayload(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Tutorial(TutorialError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Tutorial(TutorialError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Tutorial(TutorialError::Storage(_))
            | ApiError::Tutorial(TutorialError::InvalidConfig(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::UndecodableId(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!("Tutorial store error: {:?}", self);
            "Some error occurred while accessing tutorials.".to_string()
        } else {
            self.to_string()
        };

        (status, Json(MessageRes::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::from(TutorialError::Validation("x".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(TutorialError::NotFound("x".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(TutorialError::storage("connection refused")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::MalformedPayload("bad json".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::UndecodableId("Invalid URL".into()),
                StatusCode::NOT_FOUND,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status(), expected, "{err:?}");
        }
    }

    #[test]
    fn test_not_found_message_names_id() {
        let err = ApiError::from(TutorialError::NotFound("abc".into()));
        assert_eq!(err.to_string(), "Not found Tutorial with id=abc");
    }
}
