pub mod campaign_form;
pub mod results;
pub mod saved_campaigns;
