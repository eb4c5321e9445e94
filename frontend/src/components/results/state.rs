use common::studio::ResultsSession;
use yew::prelude::*;

use super::props::LoadedResults;

/// State of the results dashboard.
pub struct ResultsDashboard {
    /// Bundle, selection and image trigger of the displayed results.
    pub session: ResultsSession,

    /// Reference to the guidelines & disclaimers sheet.
    pub guidelines_ref: NodeRef,

    /// Key of the image prompt whose last generation attempt failed, if it is
    /// still eligible for a manual retry.
    pub failed_image: Option<usize>,
}

impl ResultsDashboard {
    pub fn new(results: LoadedResults) -> Self {
        Self {
            session: results.into_session(),
            guidelines_ref: NodeRef::default(),
            failed_image: None,
        }
    }

    /// Whether the retry button applies to the currently selected image.
    pub fn can_retry_selected(&self) -> bool {
        self.failed_image.is_some() && self.failed_image == self.session.selection().image()
    }
}
