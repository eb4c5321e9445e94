//! State of the campaign brief form.
//!
//! The form owns the draft brief and the lifecycle of a single generation
//! request: `begin_submit` hands out the brief and locks the form until the
//! request settles with `submit_succeeded` or `submit_failed`.

use crate::model::brief::{BriefError, BriefField, CampaignBrief};

/// Shown when a failed request carries no usable server message.
pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BriefForm {
    draft: CampaignBrief,
    submitting: bool,
    error: Option<String>,
}

impl BriefForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &CampaignBrief {
        &self.draft
    }

    pub fn value(&self, field: BriefField) -> &str {
        self.draft.field(field)
    }

    pub fn set_field(&mut self, field: BriefField, value: String) {
        *self.draft.field_mut(field) = value;
    }

    pub fn is_valid(&self) -> bool {
        self.draft.is_valid()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.is_valid()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Locks the form and returns the brief to send.
    ///
    /// Fails without touching the form when a request is already in flight or
    /// the draft is incomplete.
    pub fn begin_submit(&mut self) -> Result<CampaignBrief, BriefError> {
        if self.submitting {
            return Err(BriefError::InFlight);
        }
        self.draft.validate()?;
        self.submitting = true;
        self.error = None;
        Ok(self.draft.clone())
    }

    /// The brief was accepted; the form starts over with an empty draft.
    pub fn submit_succeeded(&mut self) {
        *self = Self::default();
    }

    /// The request failed. The draft stays editable and the server message is
    /// shown verbatim, or `GENERIC_ERROR` when there is none.
    pub fn submit_failed(&mut self, server_message: Option<String>) {
        self.submitting = false;
        self.error = Some(
            server_message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| GENERIC_ERROR.to_string()),
        );
    }
}
