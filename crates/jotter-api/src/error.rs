use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use jotter_llm::SummarizeError;
use jotter_persist::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Journal entry text must not be empty")]
    EmptyEntry,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Summarization error: {0}")]
    Summarize(#[from] SummarizeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::EntryNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::EmptyEntry => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Store(ref e) => match e {
                StoreError::EntryNotFound(id) => {
                    (StatusCode::NOT_FOUND, format!("Entry not found: {}", id))
                }
                StoreError::InvalidEntryId(id) => {
                    (StatusCode::BAD_REQUEST, format!("Invalid entry ID: {}", id))
                }
                _ if e.is_unavailable() => {
                    tracing::error!("Store unavailable: {}", e);
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "Journal storage is unreachable, try again later".to_string(),
                    )
                }
                _ => {
                    tracing::error!("Storage error: {}", e);
                    (StatusCode::INTERNAL_SERVER_ERROR, "Storage error".to_string())
                }
            },
            ApiError::Summarize(ref e) => match e {
                SummarizeError::EmptyText => {
                    (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
                }
                SummarizeError::ModelOutputInvalid { .. } => {
                    tracing::warn!("Summarization failed: {}", e);
                    (
                        StatusCode::BAD_GATEWAY,
                        "The model did not return a usable summary, try again".to_string(),
                    )
                }
                SummarizeError::Provider(_) => {
                    tracing::error!("Model call failed: {}", e);
                    (
                        StatusCode::BAD_GATEWAY,
                        "The summarization service is unreachable, try again later".to_string(),
                    )
                }
            },
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entry_maps_to_422() {
        let response = ApiError::EmptyEntry.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_store_not_found_maps_to_404() {
        let response = ApiError::Store(StoreError::EntryNotFound("abc".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_unavailable_maps_to_503() {
        let response =
            ApiError::Store(StoreError::Unavailable("server selection timed out".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_model_output_invalid_maps_to_502() {
        let response = ApiError::Summarize(SummarizeError::ModelOutputInvalid {
            detail: "expected value at line 1".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
