//! Generated campaign content, as returned by `POST /api/generate`.
//!
//! These types are produced by the external content-generation service and
//! are read-only on the client, with one exception: `ImagePrompt::image_url`
//! is filled in once an image has been rendered for the prompt.

use serde::{Deserialize, Serialize};

use crate::model::brief::CampaignBrief;

/// Risk/performance assessment attached to a copy variation by the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    /// Short label, e.g. `"Safe & Clear"` or `"Aggressive / Risky"`.
    pub label: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub requires_review: bool,
}

/// Badge tone used when rendering a performance label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTone {
    Safe,
    Medium,
    Risky,
}

impl PerformanceAnalysis {
    pub fn tone(&self) -> RiskTone {
        match self.label.as_str() {
            "Safe & Clear" => RiskTone::Safe,
            "Aggressive / Risky" => RiskTone::Risky,
            _ => RiskTone::Medium,
        }
    }
}

/// One generated piece of ad copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyVariation {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub primary_text: String,
    #[serde(default)]
    pub cta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_analysis: Option<PerformanceAnalysis>,
}

impl CopyVariation {
    /// Text placed on the clipboard by the "Copy Text" action.
    pub fn clipboard_text(&self) -> String {
        format!(
            "Headline: {}\n\nBody: {}\n\nCTA: {}",
            self.headline, self.primary_text, self.cta
        )
    }

    /// Headline, or the primary text when the headline is empty.
    pub fn summary(&self) -> &str {
        if self.headline.is_empty() {
            &self.primary_text
        } else {
            &self.headline
        }
    }

    pub fn requires_review(&self) -> bool {
        self.performance_analysis
            .as_ref()
            .is_some_and(|analysis| analysis.requires_review)
    }
}

/// A suggested image, described as a text-to-image prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePrompt {
    #[serde(default)]
    pub prompt: String,
    /// Aspect ratio such as `"1:1"`, `"4:5"` or `"1.91:1"`.
    #[serde(default)]
    pub ratio: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub elements: Vec<String>,
    /// URL of the rendered image, once one has been generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ImagePrompt {
    /// The rendered image URL, if present and non-empty.
    pub fn rendered_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn has_image(&self) -> bool {
        self.rendered_url().is_some()
    }

    pub fn image_size(&self) -> ImageSize {
        ImageSize::for_ratio(&self.ratio)
    }
}

/// Output sizes accepted by `POST /api/generate-image`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1024x1024")]
    Square,
    #[serde(rename = "1792x1024")]
    Wide,
    #[serde(rename = "1024x1792")]
    Tall,
}

impl ImageSize {
    /// Maps an aspect ratio onto one of the three fixed size buckets.
    pub fn for_ratio(ratio: &str) -> Self {
        match ratio {
            "16:9" | "1.91:1" | "2:1" => ImageSize::Wide,
            "9:16" => ImageSize::Tall,
            _ => ImageSize::Square,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::Square => "1024x1024",
            ImageSize::Wide => "1792x1024",
            ImageSize::Tall => "1024x1792",
        }
    }
}

/// Tone and restrictions that apply to the brief's industry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryNotes {
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub restrictions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
}

/// Everything returned by one successful generation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    pub brief: CampaignBrief,
    #[serde(default)]
    pub copy_variations: Vec<CopyVariation>,
    #[serde(default)]
    pub image_prompts: Vec<ImagePrompt>,
    #[serde(default)]
    pub disclaimers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_notes: Option<IndustryNotes>,
    /// Platform formatting limits, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_specs: Option<serde_json::Value>,
}
