use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use promptform_core::{Error as CoreError, ExportError};

#[derive(Debug)]
pub enum AppError {
    UnknownProduct(String),
    NotFound(String),
    Export(String),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownProduct(p) => write!(f, "unknown product: {}", p),
            Self::NotFound(e) => write!(f, "not found: {}", e),
            Self::Export(e) => write!(f, "export: {}", e),
            Self::Internal(e) => write!(f, "internal: {}", e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            Self::UnknownProduct(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::NotFound(e) => (StatusCode::NOT_FOUND, e.clone()),
            Self::Export(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.clone()),
            Self::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.clone()),
        };
        let body = serde_json::json!({ "error": msg });
        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnknownProduct(p) => Self::UnknownProduct(p),
        }
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        Self::Export(e.to_string())
    }
}
