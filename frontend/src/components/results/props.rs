//! Properties of the results dashboard.
//!
//! The dashboard is handed a `LoadedResults`: a bundle tagged with the epoch
//! assigned by the app when it was loaded. A new epoch means a new bundle and
//! rebuilds the dashboard's session from scratch.

use common::model::campaign::SavedCampaign;
use common::model::content::ResultBundle;
use common::studio::ResultsSession;
use yew::prelude::*;

/// Where the displayed bundle came from.
#[derive(Clone, PartialEq, Debug)]
pub enum ResultsSource {
    Generated(ResultBundle),
    Saved(SavedCampaign),
}

#[derive(Clone, PartialEq, Debug)]
pub struct LoadedResults {
    pub epoch: u64,
    pub source: ResultsSource,
}

/// A generated image URL reported back to the owner of `LoadedResults`.
#[derive(Clone, PartialEq, Debug)]
pub struct ImageApplied {
    pub epoch: u64,
    pub key: usize,
    pub url: String,
}

impl LoadedResults {
    fn bundle_mut(&mut self) -> &mut ResultBundle {
        match &mut self.source {
            ResultsSource::Generated(bundle) => bundle,
            ResultsSource::Saved(saved) => &mut saved.bundle,
        }
    }

    /// Stores a generated image URL on the bundle, so a session rebuilt from
    /// these results keeps it. Ignored for another epoch or an unknown key.
    pub fn record_image(&mut self, applied: ImageApplied) -> bool {
        if applied.epoch != self.epoch {
            return false;
        }
        match self.bundle_mut().image_prompts.get_mut(applied.key) {
            Some(prompt) => {
                prompt.image_url = Some(applied.url);
                true
            }
            None => false,
        }
    }

    pub fn into_session(self) -> ResultsSession {
        match self.source {
            ResultsSource::Generated(bundle) => ResultsSession::new(self.epoch, bundle),
            ResultsSource::Saved(saved) => ResultsSession::from_saved(self.epoch, saved),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ResultsProps {
    pub results: LoadedResults,

    /// Receives the snapshot built by the "Save Campaign" action.
    pub on_save: Callback<SavedCampaign>,

    /// Receives every image URL stored on the session.
    pub on_image_applied: Callback<ImageApplied>,
}
