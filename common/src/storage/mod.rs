//! Persistence of saved campaigns.
//!
//! Campaigns are stored as one JSON array under a single well-known key of a
//! key-value backend (`localStorage` in the browser, a `HashMap` in tests).
//! Every mutation reads the whole list, changes it and writes it back; there
//! is no partial update and no locking, which is fine for a single tab.
//!
//! Reads never fail: a missing, unreadable or corrupt entry is treated as an
//! empty list so that the application always starts.

mod memory;

use log::warn;
use thiserror::Error;

use crate::model::campaign::SavedCampaign;

pub use memory::MemoryBackend;

/// Storage key holding the saved campaign list.
pub const SAVED_CAMPAIGNS_KEY: &str = "savedCampaigns";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("could not encode saved campaigns: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("no saved campaign at position {index} ({len} saved)")]
    OutOfRange { index: usize, len: usize },
}

/// A flat string key-value store.
pub trait KeyValueBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// List-shaped store of saved campaigns, in insertion order.
pub trait CampaignStore {
    fn list(&self) -> Vec<SavedCampaign>;

    /// Adds `campaign` at the end and returns the updated list.
    fn append(&mut self, campaign: SavedCampaign) -> Result<Vec<SavedCampaign>, StoreError>;

    /// Removes the campaign at `index` and returns the updated list.
    fn remove_at(&mut self, index: usize) -> Result<Vec<SavedCampaign>, StoreError>;
}

/// `CampaignStore` serializing the whole list as JSON into one backend key.
#[derive(Debug, Clone)]
pub struct JsonCampaignStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> JsonCampaignStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, SAVED_CAMPAIGNS_KEY)
    }

    pub fn with_key(backend: B, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn save(&mut self, campaigns: &[SavedCampaign]) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(campaigns)?;
        self.backend.write(&self.key, &encoded)
    }
}

impl<B: KeyValueBackend> CampaignStore for JsonCampaignStore<B> {
    fn list(&self) -> Vec<SavedCampaign> {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("Reading saved campaigns failed, starting empty: {}", err);
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("Saved campaigns under '{}' are corrupt, starting empty: {}", self.key, err);
            Vec::new()
        })
    }

    fn append(&mut self, campaign: SavedCampaign) -> Result<Vec<SavedCampaign>, StoreError> {
        let mut campaigns = self.list();
        campaigns.push(campaign);
        self.save(&campaigns)?;
        Ok(campaigns)
    }

    fn remove_at(&mut self, index: usize) -> Result<Vec<SavedCampaign>, StoreError> {
        let mut campaigns = self.list();
        if index >= campaigns.len() {
            return Err(StoreError::OutOfRange {
                index,
                len: campaigns.len(),
            });
        }
        campaigns.remove(index);
        self.save(&campaigns)?;
        Ok(campaigns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::brief::CampaignBrief;
    use crate::model::content::{CopyVariation, ImagePrompt, IndustryNotes, ResultBundle};
    use chrono::Utc;

    /// Backend whose writes always fail, as with an exceeded quota.
    struct FullBackend {
        inner: MemoryBackend,
    }

    impl KeyValueBackend for FullBackend {
        fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.read(key)
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("QuotaExceededError".into()))
        }
    }

    fn campaign(industry: &str) -> SavedCampaign {
        SavedCampaign {
            bundle: ResultBundle {
                brief: CampaignBrief {
                    industry: industry.into(),
                    platform: "Instagram".into(),
                    objective: "Conversion".into(),
                    audience: "Runners".into(),
                    message: "Lighter shoes".into(),
                },
                copy_variations: vec![CopyVariation {
                    headline: format!("{industry} headline"),
                    ..Default::default()
                }],
                image_prompts: vec![ImagePrompt {
                    prompt: "Runner at dawn".into(),
                    ratio: "4:5".into(),
                    elements: vec!["shoes".into(), "track".into()],
                    ..Default::default()
                }],
                disclaimers: vec!["While supplies last".into()],
                industry_notes: Some(IndustryNotes {
                    tone: "engaging".into(),
                    restrictions: vec!["Be clear about pricing and terms".into()],
                    risk_level: Some("medium".into()),
                }),
                platform_specs: None,
            },
            selected_copy: None,
            selected_image: None,
            saved_at: Utc::now(),
        }
    }

    fn industries(campaigns: &[SavedCampaign]) -> Vec<&str> {
        campaigns
            .iter()
            .map(|c| c.bundle.brief.industry.as_str())
            .collect()
    }

    #[test]
    fn empty_backend_lists_nothing() {
        let store = JsonCampaignStore::new(MemoryBackend::new());
        assert!(store.list().is_empty());
    }

    #[test]
    fn append_places_snapshot_last() {
        let mut store = JsonCampaignStore::new(MemoryBackend::new());
        store.append(campaign("SaaS")).unwrap();

        let before = Utc::now();
        let mut latest = campaign("Finance");
        latest.saved_at = Utc::now();
        let returned = store.append(latest.clone()).unwrap();

        let listed = store.list();
        assert_eq!(returned, listed);
        assert_eq!(listed.last(), Some(&latest));
        assert!(listed.last().unwrap().saved_at >= before);
        assert_eq!(industries(&listed), vec!["SaaS", "Finance"]);
    }

    #[test]
    fn remove_at_preserves_order_of_the_rest() {
        let mut store = JsonCampaignStore::new(MemoryBackend::new());
        for industry in ["Healthcare", "Finance", "E-commerce", "SaaS"] {
            store.append(campaign(industry)).unwrap();
        }

        let remaining = store.remove_at(1).unwrap();
        assert_eq!(remaining.len(), 3);
        assert_eq!(industries(&store.list()), vec!["Healthcare", "E-commerce", "SaaS"]);
    }

    #[test]
    fn remove_at_out_of_range_changes_nothing() {
        let mut store = JsonCampaignStore::new(MemoryBackend::new());
        store.append(campaign("Education")).unwrap();
        assert!(matches!(
            store.remove_at(1),
            Err(StoreError::OutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn corrupt_entry_reads_as_empty_and_is_replaced_on_write() {
        let backend = MemoryBackend::with_entry(SAVED_CAMPAIGNS_KEY, "{not json");
        let mut store = JsonCampaignStore::new(backend);
        assert!(store.list().is_empty());

        store.append(campaign("Healthcare")).unwrap();
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn failed_write_reports_error_and_keeps_previous_list() {
        let mut seeded = JsonCampaignStore::new(MemoryBackend::new());
        seeded.append(campaign("SaaS")).unwrap();

        let mut store = JsonCampaignStore::new(FullBackend {
            inner: seeded.backend().clone(),
        });
        assert!(matches!(
            store.append(campaign("Finance")),
            Err(StoreError::Unavailable(_))
        ));
        assert_eq!(industries(&store.list()), vec!["SaaS"]);
    }

    #[test]
    fn saved_bundle_round_trips_byte_for_byte() {
        let mut store = JsonCampaignStore::new(MemoryBackend::new());
        let original = campaign("E-commerce");
        store.append(original.clone()).unwrap();

        let loaded = store.list().pop().unwrap();
        assert_eq!(
            serde_json::to_string(&loaded.bundle).unwrap(),
            serde_json::to_string(&original.bundle).unwrap()
        );
        assert_eq!(loaded, original);
    }

    #[test]
    fn custom_key_is_isolated() {
        let mut store = JsonCampaignStore::with_key(MemoryBackend::new(), "drafts");
        store.append(campaign("SaaS")).unwrap();
        assert!(store.backend().read(SAVED_CAMPAIGNS_KEY).unwrap().is_none());
        assert!(store.backend().read("drafts").unwrap().is_some());
    }
}
