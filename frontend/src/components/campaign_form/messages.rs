use common::model::brief::BriefField;
use common::model::content::ResultBundle;

pub enum Msg {
    SetField(BriefField, String),
    Submit,
    Generated(ResultBundle),
    /// Carries the server's error message, if it sent one.
    Failed(Option<String>),
}
