use common::model::config::AppConfig;
use common::model::content::ResultBundle;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CampaignFormProps {
    /// Options for the select fields. While `None` the form shows a loading
    /// placeholder instead of the inputs.
    #[prop_or_default]
    pub config: Option<AppConfig>,

    /// Receives the bundle of each successful generation request.
    pub on_generated: Callback<ResultBundle>,
}
