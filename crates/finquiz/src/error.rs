use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::batch::BatchImportError;
use crate::workflows::quiz::{IntakeViolation, SessionError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Intake(IntakeViolation),
    Session(SessionError),
    Batch(BatchImportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Intake(err) => write!(f, "answer error: {}", err),
            AppError::Session(err) => write!(f, "quiz error: {}", err),
            AppError::Batch(err) => write!(f, "batch error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Intake(err) => Some(err),
            AppError::Session(err) => Some(err),
            AppError::Batch(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Intake(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Session(_) | AppError::Batch(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<IntakeViolation> for AppError {
    fn from(value: IntakeViolation) -> Self {
        Self::Intake(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

impl From<BatchImportError> for AppError {
    fn from(value: BatchImportError) -> Self {
        Self::Batch(value)
    }
}
