//! HTTP client for the content-generation API.
//!
//! All requests go to the same origin unless the crate was built with
//! `CAMPAIGN_API_URL` set, in which case that base URL is prepended.
//! Failures are returned as `ApiError`; callers turn them into UI state and
//! nothing here retries.

use common::model::brief::CampaignBrief;
use common::model::config::AppConfig;
use common::model::content::ResultBundle;
use common::requests::{ApiErrorBody, GenerateImageRequest, GenerateImageResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

const API_BASE_URL: Option<&str> = option_env!("CAMPAIGN_API_URL");

const CONFIG_PATH: &str = "/api/config";
const GENERATE_PATH: &str = "/api/generate";
const GENERATE_IMAGE_PATH: &str = "/api/generate-image";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("the image service returned no image")]
    EmptyImage,
}

impl ApiError {
    /// The `error` field of the server's response body, when it sent one.
    pub fn server_message(self) -> Option<String> {
        match self {
            ApiError::Status { message, .. } => message,
            _ => None,
        }
    }
}

pub async fn fetch_config() -> Result<AppConfig, ApiError> {
    let response = Request::get(&endpoint(CONFIG_PATH)).send().await?;
    decode(response).await
}

pub async fn generate(brief: &CampaignBrief) -> Result<ResultBundle, ApiError> {
    let response = Request::post(&endpoint(GENERATE_PATH))
        .json(brief)?
        .send()
        .await?;
    decode(response).await
}

/// Requests one rendered image and returns its URL.
pub async fn generate_image(request: &GenerateImageRequest) -> Result<String, ApiError> {
    let response = Request::post(&endpoint(GENERATE_IMAGE_PATH))
        .json(request)?
        .send()
        .await?;
    let body: GenerateImageResponse = decode(response).await?;
    if body.image_url.is_empty() {
        return Err(ApiError::EmptyImage);
    }
    Ok(body.image_url)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .map(|body| body.error)
            .filter(|error| !error.is_empty());
        return Err(ApiError::Status {
            status: response.status(),
            message,
        });
    }
    Ok(response.json::<T>().await?)
}

fn endpoint(path: &str) -> String {
    join_url(API_BASE_URL.unwrap_or_default(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_origin_when_base_is_empty() {
        assert_eq!(join_url("", GENERATE_PATH), "/api/generate");
    }

    #[test]
    fn trailing_slash_of_base_is_dropped() {
        assert_eq!(
            join_url("http://localhost:5000/", CONFIG_PATH),
            "http://localhost:5000/api/config"
        );
    }

    #[test]
    fn only_status_errors_carry_a_server_message() {
        let status = ApiError::Status {
            status: 400,
            message: Some("Missing required field: audience".into()),
        };
        assert_eq!(
            status.server_message().as_deref(),
            Some("Missing required field: audience")
        );
        assert_eq!(ApiError::EmptyImage.server_message(), None);
    }
}
