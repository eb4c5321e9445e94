use serde::{Deserialize, Serialize};

use crate::model::content::{ImagePrompt, ImageSize};

/// Request payload for `POST /api/generate-image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
    pub size: ImageSize,
}

impl GenerateImageRequest {
    pub fn for_prompt(prompt: &ImagePrompt) -> Self {
        Self {
            prompt: prompt.prompt.clone(),
            size: prompt.image_size(),
        }
    }
}

/// Successful response of `POST /api/generate-image`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    #[serde(default)]
    pub image_url: String,
}

/// Error body returned by every API endpoint on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: String,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
