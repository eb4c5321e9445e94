use serde::{Deserialize, Serialize};

/// Enumerations offered to the brief form, returned by `GET /api/config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub industries: Vec<String>,
    pub platforms: Vec<String>,
    pub objectives: Vec<String>,
}
