use common::form::BriefForm;

/// State of the campaign brief form component.
pub struct CampaignFormComponent {
    /// Draft brief plus the lifecycle of the pending request.
    pub form: BriefForm,
}

impl CampaignFormComponent {
    pub fn new() -> Self {
        Self {
            form: BriefForm::new(),
        }
    }
}
