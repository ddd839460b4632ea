use std::{collections::BTreeMap, sync::Arc};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Shared handler result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Field name to message, kept sorted so responses are stable.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{message}")]
    InvalidInput {
        message: String,
        field_errors: FieldErrors,
    },
    #[error("upstream service unavailable: {0}")]
    Upstream(String),
    #[error("internal server error")]
    Internal(Arc<anyhow::Error>),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
            field_errors: FieldErrors::new(),
        }
    }

    pub fn invalid_fields(field_errors: FieldErrors) -> Self {
        Self::InvalidInput {
            message: "validation failed".into(),
            field_errors,
        }
    }

    pub fn internal(err: anyhow::Error) -> Self {
        Self::Internal(Arc::new(err))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(value: anyhow::Error) -> Self {
        Self::internal(value)
    }
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status: u16,
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: FieldErrors,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        let status = err.status();
        let field_errors = match err {
            ApiError::InvalidInput { field_errors, .. } => field_errors.clone(),
            _ => FieldErrors::new(),
        };
        Self {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error"),
            message: err.to_string(),
            field_errors,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(inner) = &self {
            error!(error = %inner, "request failed");
        }
        let body = ErrorBody::from(&self);
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    async fn body_json(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn internal_errors_are_masked() {
        let (status, body) = body_json(ApiError::internal(anyhow::anyhow!("boom"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "internal server error");
        assert_eq!(body["status"], 500);
    }

    #[tokio::test]
    async fn field_errors_are_reported() {
        let mut fields = FieldErrors::new();
        fields.insert("email".into(), "Email should be valid".into());
        let (status, body) = body_json(ApiError::invalid_fields(fields)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
        assert_eq!(body["fieldErrors"], json!({"email": "Email should be valid"}));
    }

    #[test]
    fn statuses_follow_taxonomy() {
        assert_eq!(ApiError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::invalid("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Upstream("x".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn plain_invalid_input_omits_field_errors() {
        let (_, body) = body_json(ApiError::invalid("bad id")).await;
        assert!(body.get("fieldErrors").is_none());
        assert_eq!(body["message"], "bad id");
    }
}
