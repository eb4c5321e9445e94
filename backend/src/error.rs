//! Errors returned by the `/api` handlers.
//!
//! Every variant renders as `{"error": "<message>"}` with the status code
//! below, the same shape the content-generation service uses.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::model::brief::BriefField;
use common::requests::ApiErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// 400: the request body is not valid JSON.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// 400: a brief key is absent from `POST /api/generate`.
    #[error("Missing required field: {0}")]
    MissingField(BriefField),

    /// 400: `POST /api/generate-image` without a usable prompt.
    #[error("Missing prompt")]
    MissingPrompt,

    /// 503: `CONTENT_API_URL` is not set.
    #[error("Content generation service is not configured")]
    NotConfigured,

    /// 502: the upstream service could not be reached.
    #[error("Content generation service is unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    /// 502: the upstream service answered with something other than JSON.
    #[error("Content generation service returned an invalid response (status {0})")]
    InvalidUpstreamResponse(u16),
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidBody(_) | ProxyError::MissingField(_) | ProxyError::MissingPrompt => {
                StatusCode::BAD_REQUEST
            }
            ProxyError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ProxyError::Unreachable(_) | ProxyError::InvalidUpstreamResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiErrorBody {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = ProxyError::MissingField(BriefField::Audience);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing required field: audience");
        assert_eq!(ProxyError::MissingPrompt.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_errors_map_to_gateway_statuses() {
        assert_eq!(ProxyError::NotConfigured.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            ProxyError::InvalidUpstreamResponse(500).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
