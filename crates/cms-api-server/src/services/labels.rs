// ============================================================================
// CMS Core - Link Label Service
// File: crates/cms-api-server/src/services/labels.rs
// ============================================================================
//! Display labels for menu items that reference a page, course, or news
//! entry. Titles are batch-fetched per kind; a missing or unreadable title
//! degrades to a generic Thai label instead of failing the listing.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::domain::{LinkKind, MenuItem};
use crate::repositories::LinkLookupRepository;

/// Generic label shown when the referenced entity cannot be resolved.
pub fn fallback_label(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Page => "เพจ",
        LinkKind::Course => "หลักสูตร",
        LinkKind::News => "ข่าวสาร",
    }
}

pub struct LinkLabelService<L: LinkLookupRepository> {
    lookups: Arc<L>,
}

impl<L: LinkLookupRepository> LinkLabelService<L> {
    pub fn new(lookups: Arc<L>) -> Self {
        Self { lookups }
    }

    /// Resolve a label per menu item id for every item whose link points at
    /// a page, course, or news entry. Free URLs and empty links get no
    /// entry. Lookup failures are logged and fall back to the generic
    /// labels; this call itself never fails.
    pub async fn labels_for(&self, items: &[MenuItem]) -> HashMap<i64, String> {
        let mut refs_by_kind: HashMap<LinkKind, Vec<i64>> = HashMap::new();
        for item in items {
            if let (Some(kind), Some(ref_id)) = (item.link.kind(), item.link.ref_id()) {
                refs_by_kind.entry(kind).or_default().push(ref_id);
            }
        }

        let mut titles_by_kind: HashMap<LinkKind, HashMap<i64, String>> = HashMap::new();
        for (kind, ref_ids) in &refs_by_kind {
            let titles = match self.lookups.titles_by_ids(*kind, ref_ids).await {
                Ok(titles) => titles,
                Err(e) => {
                    warn!(
                        "Label lookup for {} entries failed, using fallback labels: {}",
                        kind.as_str(),
                        e
                    );
                    HashMap::new()
                }
            };
            titles_by_kind.insert(*kind, titles);
        }

        let mut labels = HashMap::new();
        for item in items {
            if let (Some(kind), Some(ref_id)) = (item.link.kind(), item.link.ref_id()) {
                let label = titles_by_kind
                    .get(&kind)
                    .and_then(|titles| titles.get(&ref_id))
                    .cloned()
                    .unwrap_or_else(|| fallback_label(kind).to_string());
                labels.insert(item.id, label);
            }
        }
        labels
    }
}
