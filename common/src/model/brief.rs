//! The campaign brief submitted by the user.
//!
//! A `CampaignBrief` carries the five fields collected by the brief form. All of
//! them are required: a brief is only submitted when every field is non-empty
//! after trimming whitespace. The backend performs a looser check (key presence)
//! before forwarding the brief to the content-generation service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameters of a marketing campaign, as sent to `POST /api/generate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignBrief {
    /// Industry or content category (one of the configured industries).
    pub industry: String,
    /// Target platform, e.g. `"Meta"` or `"LinkedIn"`.
    pub platform: String,
    /// Campaign objective, e.g. `"Awareness"`.
    pub objective: String,
    /// Free-text description of the target audience.
    pub audience: String,
    /// The key message or angle of the campaign.
    pub message: String,
}

/// Identifies one of the five brief fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BriefField {
    Industry,
    Platform,
    Objective,
    Audience,
    Message,
}

impl BriefField {
    /// All fields, in form order.
    pub const ALL: [BriefField; 5] = [
        BriefField::Industry,
        BriefField::Platform,
        BriefField::Objective,
        BriefField::Audience,
        BriefField::Message,
    ];

    /// The JSON key of the field.
    pub fn name(self) -> &'static str {
        match self {
            BriefField::Industry => "industry",
            BriefField::Platform => "platform",
            BriefField::Objective => "objective",
            BriefField::Audience => "audience",
            BriefField::Message => "message",
        }
    }
}

impl std::fmt::Display for BriefField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BriefError {
    #[error("Missing required field: {0}")]
    MissingField(BriefField),
    #[error("A generation request is already in progress")]
    InFlight,
}

impl CampaignBrief {
    pub fn field(&self, field: BriefField) -> &str {
        match field {
            BriefField::Industry => &self.industry,
            BriefField::Platform => &self.platform,
            BriefField::Objective => &self.objective,
            BriefField::Audience => &self.audience,
            BriefField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: BriefField) -> &mut String {
        match field {
            BriefField::Industry => &mut self.industry,
            BriefField::Platform => &mut self.platform,
            BriefField::Objective => &mut self.objective,
            BriefField::Audience => &mut self.audience,
            BriefField::Message => &mut self.message,
        }
    }

    /// Returns the first field (in form order) that is empty after trimming.
    pub fn validate(&self) -> Result<(), BriefError> {
        match BriefField::ALL
            .into_iter()
            .find(|field| self.field(*field).trim().is_empty())
        {
            Some(field) => Err(BriefError::MissingField(field)),
            None => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthcare_brief() -> CampaignBrief {
        CampaignBrief {
            industry: "Healthcare".into(),
            platform: "Facebook".into(),
            objective: "Awareness".into(),
            audience: "Adults 30-50".into(),
            message: "Stress relief".into(),
        }
    }

    #[test]
    fn complete_brief_is_valid() {
        assert!(healthcare_brief().is_valid());
    }

    #[test]
    fn any_blank_field_invalidates_the_brief() {
        for field in BriefField::ALL {
            for blank in ["", "   ", "\t\n"] {
                let mut brief = healthcare_brief();
                *brief.field_mut(field) = blank.to_string();
                assert_eq!(brief.validate(), Err(BriefError::MissingField(field)));
                assert!(!brief.is_valid());
            }
        }
    }

    #[test]
    fn first_missing_field_is_reported_in_form_order() {
        let brief = CampaignBrief {
            audience: "Students".into(),
            ..Default::default()
        };
        assert_eq!(
            brief.validate().unwrap_err().to_string(),
            "Missing required field: industry"
        );
    }

    #[test]
    fn serializes_with_snake_case_keys() {
        let json = serde_json::to_value(healthcare_brief()).unwrap();
        assert_eq!(json["industry"], "Healthcare");
        assert_eq!(json["message"], "Stress relief");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
