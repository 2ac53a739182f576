use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::openai::OpenAiError;

#[derive(Debug)]
pub enum AppError {
    /// Return a status code with a JSON `{"error": ...}` body.
    Msg(StatusCode, String),
    /// Internal error -> 500 with a generic JSON body; logged.
    Anyhow(anyhow::Error),
}

impl AppError {
    /// Provider failures relay the provider's status and message
    /// (`fallback` when it sent none); transport and envelope faults
    /// stay internal.
    #[must_use]
    pub fn upstream(err: OpenAiError, fallback: &str) -> Self {
        match err {
            OpenAiError::Upstream { status, message } => {
                Self::Msg(status, message.unwrap_or_else(|| fallback.to_string()))
            }
            OpenAiError::Other(e) => Self::Anyhow(e),
        }
    }
}

impl From<(StatusCode, String)> for AppError {
    fn from((code, msg): (StatusCode, String)) -> Self {
        Self::Msg(code, msg)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::Anyhow(e)
    }
}

#[derive(Serialize)]
struct ErrBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Msg(code, msg) => (code, Json(ErrBody { error: msg })).into_response(),
            Self::Anyhow(err) => {
                tracing::error!("{:#}", err);
                let body = Json(ErrBody {
                    error: "Internal Server Error".to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
