//! Saved campaign snapshots.
//!
//! A `SavedCampaign` is written to the campaign store when the user saves the
//! results they are looking at. It embeds the full `ResultBundle` (flattened,
//! so the stored JSON looks like a bundle with three extra keys) together with
//! the copy variation and image prompt that were selected at save time. The
//! selections are stored by value, not by index.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::content::{CopyVariation, ImagePrompt, ResultBundle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCampaign {
    #[serde(flatten)]
    pub bundle: ResultBundle,
    #[serde(default)]
    pub selected_copy: Option<CopyVariation>,
    #[serde(default)]
    pub selected_image: Option<ImagePrompt>,
    pub saved_at: DateTime<Utc>,
}

impl SavedCampaign {
    /// Card title, e.g. `"Finance - LinkedIn"`.
    pub fn title(&self) -> String {
        format!(
            "{} - {}",
            self.bundle.brief.industry, self.bundle.brief.platform
        )
    }

    /// Date the campaign was saved, formatted for display.
    pub fn saved_on(&self) -> String {
        self.saved_at.format("%Y-%m-%d").to_string()
    }
}
