//! Fixed enumerations offered by `GET /api/config`.

use crate::model::config::AppConfig;

pub const INDUSTRIES: [&str; 5] = ["Healthcare", "Finance", "E-commerce", "SaaS", "Education"];

pub const PLATFORMS: [&str; 6] = ["Meta", "Instagram", "Google Ads", "TikTok", "LinkedIn", "Email"];

pub const OBJECTIVES: [&str; 3] = ["Awareness", "Consideration", "Conversion"];

impl AppConfig {
    /// The configuration served by the studio backend.
    pub fn catalog() -> Self {
        let owned = |items: &[&str]| items.iter().map(|item| item.to_string()).collect();
        Self {
            industries: owned(&INDUSTRIES),
            platforms: owned(&PLATFORMS),
            objectives: owned(&OBJECTIVES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_declaration_order() {
        let config = AppConfig::catalog();
        assert_eq!(config.industries.first().map(String::as_str), Some("Healthcare"));
        assert_eq!(config.platforms.len(), 6);
        assert_eq!(config.objectives, vec!["Awareness", "Consideration", "Conversion"]);
    }
}
