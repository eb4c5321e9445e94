//! Industry disclaimers and compliance-review rules shown in the platform preview.
//!
//! Both lookups are total: industries outside the known set have no disclaimer
//! and never require review.

const HEALTHCARE_DISCLAIMER: &str = "This content is for informational purposes only and does not constitute medical advice. Always consult with a qualified healthcare professional. Requires compliance review before publishing.";
const FINANCE_DISCLAIMER: &str = "This content is for informational purposes only and does not constitute financial advice. Past performance does not guarantee future results. Consult a licensed financial advisor. Requires compliance review before publishing.";
const ECOMMERCE_DISCLAIMER: &str =
    "Results may vary. Offers subject to availability and terms. Always read product details carefully.";
const SAAS_DISCLAIMER: &str = "Results shown are illustrative examples. Individual results may vary based on usage and implementation.";
const EDUCATION_DISCLAIMER: &str =
    "Results may vary based on individual circumstances and effort. No guaranteed outcomes.";

/// Industries whose content must pass a compliance review before publishing.
const REVIEWED_INDUSTRIES: [&str; 2] = ["Healthcare", "Finance"];

pub fn resolve_disclaimer(industry: &str) -> Option<&'static str> {
    match industry {
        "Healthcare" => Some(HEALTHCARE_DISCLAIMER),
        "Finance" => Some(FINANCE_DISCLAIMER),
        "E-commerce" => Some(ECOMMERCE_DISCLAIMER),
        "SaaS" => Some(SAAS_DISCLAIMER),
        "Education" => Some(EDUCATION_DISCLAIMER),
        _ => None,
    }
}

pub fn requires_compliance_review(industry: &str) -> bool {
    REVIEWED_INDUSTRIES.contains(&industry)
}

/// Compliance information displayed next to the platform preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewCompliance {
    pub disclaimer: Option<&'static str>,
    /// Set when the industry requires review or the selected copy was flagged.
    pub review_required: bool,
}

impl PreviewCompliance {
    pub fn for_industry(industry: &str, copy_flagged: bool) -> Self {
        Self {
            disclaimer: resolve_disclaimer(industry),
            review_required: copy_flagged || requires_compliance_review(industry),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.disclaimer.is_none() && !self.review_required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthcare_has_a_medical_disclaimer_and_needs_review() {
        let text = resolve_disclaimer("Healthcare").unwrap();
        assert!(text.contains("does not constitute medical advice"));
        assert!(requires_compliance_review("Healthcare"));
    }

    #[test]
    fn unknown_industry_resolves_to_nothing() {
        assert_eq!(resolve_disclaimer("Unknown"), None);
        assert!(!requires_compliance_review("Unknown"));
        assert!(PreviewCompliance::for_industry("Unknown", false).is_empty());
    }

    #[test]
    fn every_known_industry_has_a_disclaimer() {
        for industry in crate::catalog::INDUSTRIES {
            assert!(resolve_disclaimer(industry).is_some(), "{industry}");
        }
    }

    #[test]
    fn only_healthcare_and_finance_need_review() {
        let reviewed: Vec<_> = crate::catalog::INDUSTRIES
            .into_iter()
            .filter(|industry| requires_compliance_review(industry))
            .collect();
        assert_eq!(reviewed, vec!["Healthcare", "Finance"]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(resolve_disclaimer("healthcare"), None);
    }

    #[test]
    fn flagged_copy_requires_review_in_any_industry() {
        let compliance = PreviewCompliance::for_industry("SaaS", true);
        assert!(compliance.review_required);
        assert!(compliance.disclaimer.is_some());
    }
}
