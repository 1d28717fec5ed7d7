//! In-memory stand-in for the Postgres repository, used by service tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{MenuItem, MenuItemDraft, ReorderUpdate};
use crate::error::DomainError;
use crate::repositories::MenuRepository;

/// Behaves like the `menus` table: sequential ids, rows addressable by id,
/// batch updates applied to existing rows only.
pub struct InMemoryMenuRepository {
    rows: Mutex<HashMap<i64, MenuItem>>,
    next_id: AtomicI64,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryMenuRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn fetch_all(&self) -> Result<Vec<MenuItem>, DomainError> {
        let rows = self.rows.lock().unwrap();
        let mut items: Vec<MenuItem> = rows.values().cloned().collect();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MenuItem>, DomainError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&id).cloned())
    }

    async fn insert(&self, draft: &MenuItemDraft) -> Result<MenuItem, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = MenuItem {
            id,
            title: draft.title.clone(),
            link: draft.link.clone(),
            parent_id: draft.parent_id,
            sort_order: draft.sort_order,
            is_active: draft.is_active,
            target: draft.target,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().insert(id, item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        id: i64,
        draft: &MenuItemDraft,
    ) -> Result<Option<MenuItem>, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(item) = rows.get_mut(&id) else {
            return Ok(None);
        };
        item.title = draft.title.clone();
        item.link = draft.link.clone();
        item.parent_id = draft.parent_id;
        item.sort_order = draft.sort_order;
        item.is_active = draft.is_active;
        item.target = draft.target;
        Ok(Some(item.clone()))
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        let mut deleted = 0;
        for id in ids {
            if rows.remove(id).is_some() {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    async fn update_sort_orders(&self, updates: &[ReorderUpdate]) -> Result<u64, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        let mut updated = 0;
        for entry in updates {
            if let Some(item) = rows.get_mut(&entry.id) {
                item.sort_order = entry.sort_order;
                updated += 1;
            }
        }
        Ok(updated)
    }
}
