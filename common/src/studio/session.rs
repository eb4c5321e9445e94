//! The results page of one generated (or reloaded) bundle.
//!
//! `ResultsSession` ties a `ResultBundle` to its `SelectionState` and
//! `ImageTrigger`. Each session carries an `epoch` chosen by the caller; image
//! jobs remember the epoch they were issued for so that a response arriving
//! after the bundle has been replaced is dropped instead of being written into
//! the wrong bundle.
//!
//! Image URLs are only ever written through `set_image_url`, keyed by the
//! prompt's position in the bundle.

use chrono::{DateTime, Utc};

use crate::compliance::PreviewCompliance;
use crate::model::campaign::SavedCampaign;
use crate::model::content::{CopyVariation, ImagePrompt, ResultBundle};
use crate::studio::image_trigger::{ImageJob, ImageTrigger};
use crate::studio::selection::{SelectionError, SelectionState};

/// Selections stored with a saved campaign, kept as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct RestoredSelection {
    pub copy: Option<CopyVariation>,
    pub image: Option<ImagePrompt>,
    pub saved_at: DateTime<Utc>,
}

/// What happened to a completed image job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// The URL was stored on the prompt.
    Applied { key: usize },
    /// The request failed; the caller should notify the user.
    Failed { message: String },
    /// The job belongs to another session.
    Discarded,
}

#[derive(Debug, Clone)]
pub struct ResultsSession {
    epoch: u64,
    bundle: ResultBundle,
    selection: SelectionState,
    trigger: ImageTrigger,
    restored: Option<RestoredSelection>,
}

impl ResultsSession {
    /// A freshly generated bundle, with nothing selected.
    pub fn new(epoch: u64, bundle: ResultBundle) -> Self {
        Self {
            epoch,
            bundle,
            selection: SelectionState::default(),
            trigger: ImageTrigger::new(),
            restored: None,
        }
    }

    /// Reopens a saved campaign. Its saved selections are exposed through
    /// `restored()`; the live selection still starts empty.
    pub fn from_saved(epoch: u64, saved: SavedCampaign) -> Self {
        let restored = RestoredSelection {
            copy: saved.selected_copy,
            image: saved.selected_image,
            saved_at: saved.saved_at,
        };
        Self {
            restored: Some(restored),
            ..Self::new(epoch, saved.bundle)
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn bundle(&self) -> &ResultBundle {
        &self.bundle
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn restored(&self) -> Option<&RestoredSelection> {
        self.restored.as_ref()
    }

    pub fn select_copy(&mut self, index: usize) -> Result<(), SelectionError> {
        self.selection
            .select_copy(index, self.bundle.copy_variations.len())
            .map(|_| ())
    }

    /// Selects an image prompt and returns the generation job to run, if any.
    /// Reselecting the already selected prompt is a no-op.
    pub fn select_image(&mut self, index: usize) -> Result<Option<ImageJob>, SelectionError> {
        let changed = self
            .selection
            .select_image(index, self.bundle.image_prompts.len())?;
        if !changed {
            return Ok(None);
        }
        Ok(self.fire_for_selected_image())
    }

    /// Explicit user retry for the selected prompt after a failed request.
    pub fn retry_selected_image(&mut self) -> Option<ImageJob> {
        self.fire_for_selected_image()
    }

    fn fire_for_selected_image(&mut self) -> Option<ImageJob> {
        let key = self.selection.image()?;
        let prompt = self.bundle.image_prompts.get(key)?;
        self.trigger.on_selected(self.epoch, key, prompt)
    }

    pub fn selected_copy(&self) -> Option<&CopyVariation> {
        self.selection
            .copy()
            .and_then(|index| self.bundle.copy_variations.get(index))
    }

    pub fn selected_image(&self) -> Option<&ImagePrompt> {
        self.selection
            .image()
            .and_then(|index| self.bundle.image_prompts.get(index))
    }

    /// Whether an image request is outstanding for the prompt at `key`.
    pub fn is_generating(&self, key: usize) -> bool {
        self.bundle
            .image_prompts
            .get(key)
            .is_some_and(|prompt| self.trigger.is_pending(&prompt.prompt))
    }

    /// Stores `url` on the prompt at `key`. Returns `false` when there is no
    /// such prompt.
    pub fn set_image_url(&mut self, key: usize, url: String) -> bool {
        match self.bundle.image_prompts.get_mut(key) {
            Some(prompt) => {
                prompt.image_url = Some(url);
                true
            }
            None => false,
        }
    }

    /// Applies the result of an image job. Successful results are applied
    /// even if the prompt is no longer selected.
    pub fn complete_image(&mut self, job: &ImageJob, result: Result<String, String>) -> ImageOutcome {
        if job.epoch != self.epoch {
            return ImageOutcome::Discarded;
        }
        let prompt_text = &job.request.prompt;
        let matches_prompt = self
            .bundle
            .image_prompts
            .get(job.key)
            .is_some_and(|prompt| &prompt.prompt == prompt_text);

        match result {
            Ok(url) if matches_prompt && !url.is_empty() => {
                self.trigger.succeeded(prompt_text);
                self.set_image_url(job.key, url);
                ImageOutcome::Applied { key: job.key }
            }
            Ok(_) if !matches_prompt => {
                self.trigger.failed(prompt_text);
                ImageOutcome::Discarded
            }
            Ok(_) => {
                self.trigger.failed(prompt_text);
                ImageOutcome::Failed {
                    message: "The image service returned no image.".to_string(),
                }
            }
            Err(message) => {
                self.trigger.failed(prompt_text);
                ImageOutcome::Failed { message }
            }
        }
    }

    /// Compliance notices for the preview; `None` while nothing is selected.
    pub fn compliance(&self) -> Option<PreviewCompliance> {
        if !self.selection.has_selection() {
            return None;
        }
        let copy_flagged = self
            .selected_copy()
            .is_some_and(CopyVariation::requires_review);
        Some(PreviewCompliance::for_industry(
            &self.bundle.brief.industry,
            copy_flagged,
        ))
    }

    /// Snapshot for the campaign store. Saving requires a selection.
    pub fn snapshot(&self, saved_at: DateTime<Utc>) -> Option<SavedCampaign> {
        if !self.selection.has_selection() {
            return None;
        }
        Some(SavedCampaign {
            bundle: self.bundle.clone(),
            selected_copy: self.selected_copy().cloned(),
            selected_image: self.selected_image().cloned(),
            saved_at,
        })
    }
}
