//! Menu repository trait (port)

use async_trait::async_trait;

use crate::domain::{MenuItem, MenuItemDraft, ReorderUpdate};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// All menu rows, ordered by id (insertion order).
    async fn fetch_all(&self) -> Result<Vec<MenuItem>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<MenuItem>, DomainError>;

    /// Insert one row and return it with its assigned id.
    async fn insert(&self, draft: &MenuItemDraft) -> Result<MenuItem, DomainError>;

    /// Full-field update. `None` when the row no longer exists.
    async fn update(&self, id: i64, draft: &MenuItemDraft)
        -> Result<Option<MenuItem>, DomainError>;

    /// Remove all given rows in one statement; returns the deleted count.
    async fn delete_many(&self, ids: &[i64]) -> Result<u64, DomainError>;

    /// Apply sort-order updates in one transaction; returns the row count.
    async fn update_sort_orders(&self, updates: &[ReorderUpdate]) -> Result<u64, DomainError>;
}
