//! Link-target lookup trait (port)
//!
//! Pages, courses, and news items are owned elsewhere in the CMS; this
//! service only reads them to label menu links and to fill the admin
//! pickers.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::LinkKind;
use crate::error::DomainError;

/// Minimal projection of a linkable CMS record.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupEntry {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkLookupRepository: Send + Sync {
    async fn list(&self, kind: LinkKind) -> Result<Vec<LookupEntry>, DomainError>;

    async fn find(&self, kind: LinkKind, id: i64) -> Result<Option<LookupEntry>, DomainError>;

    /// Titles of the given records, keyed by id. Missing ids are simply
    /// absent from the map.
    async fn titles_by_ids(
        &self,
        kind: LinkKind,
        ids: &[i64],
    ) -> Result<HashMap<i64, String>, DomainError>;
}
