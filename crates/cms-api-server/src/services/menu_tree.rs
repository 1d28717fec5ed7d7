// ============================================================================
// CMS Core - Menu Tree Service
// File: crates/cms-api-server/src/services/menu_tree.rs
// ============================================================================
//! Assembly, mutation, and batch reordering of the navigation tree.
//!
//! Only flat rows with `parent_id` back-references are persisted; the nested
//! tree is recomputed on every read. All validation happens before the first
//! mutating store call, so rejected requests never leave partial state.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{MenuItem, MenuItemDraft, MenuNode, ReorderUpdate};
use crate::error::DomainError;
use crate::repositories::MenuRepository;

/// Result of a tree listing: the assembled forest plus the flat rows for
/// UI components that need an unnested picker.
#[derive(Debug, Clone)]
pub struct MenuTreeData {
    pub roots: Vec<MenuNode>,
    pub items: Vec<MenuItem>,
}

/// Group the flat rows by parent and attach children recursively, each
/// sibling list sorted by `sort_order` ascending with id as tie-break.
///
/// A row whose parent id no longer resolves (possible only if the store was
/// mutated behind the service's back) surfaces as a root instead of being
/// dropped, so every item appears exactly once.
pub fn build_forest(items: Vec<MenuItem>) -> Vec<MenuNode> {
    let known: HashSet<i64> = items.iter().map(|i| i.id).collect();

    let mut by_parent: HashMap<Option<i64>, Vec<MenuItem>> = HashMap::new();
    for item in items {
        let key = match item.parent_id {
            Some(p) if known.contains(&p) => Some(p),
            _ => None,
        };
        by_parent.entry(key).or_default().push(item);
    }
    for siblings in by_parent.values_mut() {
        siblings.sort_by_key(|i| (i.sort_order, i.id));
    }

    fn attach(
        parent: Option<i64>,
        by_parent: &mut HashMap<Option<i64>, Vec<MenuItem>>,
    ) -> Vec<MenuNode> {
        let Some(siblings) = by_parent.remove(&parent) else {
            return Vec::new();
        };
        siblings
            .into_iter()
            .map(|item| {
                let children = attach(Some(item.id), by_parent);
                MenuNode { item, children }
            })
            .collect()
    }

    attach(None, &mut by_parent)
}

/// Ids of `root_id` and every item reachable from it via `parent_id`
/// chains, in breadth-first order.
pub fn collect_subtree(items: &[MenuItem], root_id: i64) -> Vec<i64> {
    let mut children: HashMap<i64, Vec<i64>> = HashMap::new();
    for item in items {
        if let Some(parent) = item.parent_id {
            children.entry(parent).or_default().push(item.id);
        }
    }

    let mut collected = vec![root_id];
    let mut seen = HashSet::from([root_id]);
    let mut queue = VecDeque::from([root_id]);
    while let Some(current) = queue.pop_front() {
        if let Some(kids) = children.get(&current) {
            for &kid in kids {
                if seen.insert(kid) {
                    collected.push(kid);
                    queue.push_back(kid);
                }
            }
        }
    }
    collected
}

/// Would re-parenting `id` under `new_parent_id` make `id` its own
/// ancestor? Walks up from the proposed parent towards the root.
pub fn would_create_cycle(items: &[MenuItem], id: i64, new_parent_id: i64) -> bool {
    if new_parent_id == id {
        return true;
    }

    let parents: HashMap<i64, Option<i64>> =
        items.iter().map(|i| (i.id, i.parent_id)).collect();

    let mut current = new_parent_id;
    // Stored data is acyclic, but bound the walk anyway.
    for _ in 0..=items.len() {
        match parents.get(&current) {
            Some(Some(parent)) if *parent == id => return true,
            Some(Some(parent)) => current = *parent,
            // Reached a root (or an id outside the set).
            _ => return false,
        }
    }
    true
}

/// Sibling renumbering for a drag-and-drop gesture: the dragged item is
/// removed from the ordered sibling list, reinserted immediately before the
/// drop target, and the whole list renumbered `0, 1, 2, …`. Dropping an item
/// onto itself keeps the order and still normalizes the numbering.
///
/// Returns `None` when either id is not part of `siblings`. Cross-parent
/// drops are not supported; callers pass one sibling group only.
pub fn plan_sibling_drop(
    siblings: &[MenuItem],
    dragged_id: i64,
    target_id: i64,
) -> Option<Vec<ReorderUpdate>> {
    let mut ordered: Vec<&MenuItem> = siblings.iter().collect();
    ordered.sort_by_key(|i| (i.sort_order, i.id));

    if dragged_id == target_id {
        ordered.iter().position(|i| i.id == dragged_id)?;
    } else {
        let dragged_pos = ordered.iter().position(|i| i.id == dragged_id)?;
        let dragged = ordered.remove(dragged_pos);
        let target_pos = ordered.iter().position(|i| i.id == target_id)?;
        ordered.insert(target_pos, dragged);
    }

    Some(
        ordered
            .iter()
            .enumerate()
            .map(|(position, item)| ReorderUpdate {
                id: item.id,
                sort_order: position as i32,
            })
            .collect(),
    )
}

/// Public-navigation projection: inactive items are pruned together with
/// their whole subtree. The admin tree never goes through this filter.
pub fn filter_active(nodes: Vec<MenuNode>) -> Vec<MenuNode> {
    nodes
        .into_iter()
        .filter(|node| node.item.is_active)
        .map(|mut node| {
            node.children = filter_active(std::mem::take(&mut node.children));
            node
        })
        .collect()
}

/// Owns the flat menu collection and its tree projection.
pub struct MenuTreeService<R: MenuRepository> {
    repo: Arc<R>,
}

impl<R: MenuRepository> MenuTreeService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Full listing: assembled forest plus the flat rows, untouched.
    pub async fn list_tree(&self) -> Result<MenuTreeData, DomainError> {
        let items = self.repo.fetch_all().await?;
        let roots = build_forest(items.clone());
        Ok(MenuTreeData { roots, items })
    }

    pub async fn create(&self, draft: MenuItemDraft) -> Result<MenuItem, DomainError> {
        let draft = draft.normalize()?;

        if let Some(parent_id) = draft.parent_id {
            if self.repo.find_by_id(parent_id).await?.is_none() {
                warn!("Rejected menu create: parent {} not found", parent_id);
                return Err(DomainError::ParentNotFound(parent_id));
            }
        }

        info!("Creating menu item: {}", draft.title);
        self.repo.insert(&draft).await
    }

    pub async fn update(&self, id: i64, draft: MenuItemDraft) -> Result<MenuItem, DomainError> {
        let draft = draft.normalize()?;

        let items = self.repo.fetch_all().await?;
        let current = items
            .iter()
            .find(|i| i.id == id)
            .ok_or(DomainError::MenuNotFound(id))?;

        // Parent changes need the cycle walk; everything else leaves the
        // hierarchy untouched.
        if draft.parent_id != current.parent_id {
            if let Some(parent_id) = draft.parent_id {
                if parent_id == id {
                    warn!("Rejected menu update: {} cannot be its own parent", id);
                    return Err(DomainError::CycleDetected { id, parent_id });
                }
                if !items.iter().any(|i| i.id == parent_id) {
                    warn!("Rejected menu update: parent {} not found", parent_id);
                    return Err(DomainError::ParentNotFound(parent_id));
                }
                if would_create_cycle(&items, id, parent_id) {
                    warn!(
                        "Rejected menu update: moving {} under {} would create a cycle",
                        id, parent_id
                    );
                    return Err(DomainError::CycleDetected { id, parent_id });
                }
            }
        }

        info!("Updating menu item {}", id);
        self.repo
            .update(id, &draft)
            .await?
            .ok_or(DomainError::MenuNotFound(id))
    }

    /// Cascading delete of `id` and every descendant.
    pub async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        let items = self.repo.fetch_all().await?;
        if !items.iter().any(|i| i.id == id) {
            return Err(DomainError::MenuNotFound(id));
        }

        let subtree = collect_subtree(&items, id);
        info!(
            "Deleting menu item {} and {} descendant(s)",
            id,
            subtree.len() - 1
        );
        self.repo.delete_many(&subtree).await
    }

    /// Persist a batch of sibling sort orders. The whole batch is rejected
    /// if any id is unknown; an empty batch is a no-op.
    pub async fn reorder(&self, updates: &[ReorderUpdate]) -> Result<u64, DomainError> {
        if updates.is_empty() {
            return Ok(0);
        }

        let items = self.repo.fetch_all().await?;
        let known: HashSet<i64> = items.iter().map(|i| i.id).collect();
        if let Some(missing) = updates.iter().find(|u| !known.contains(&u.id)) {
            warn!("Rejected reorder batch: menu {} not found", missing.id);
            return Err(DomainError::MenuNotFound(missing.id));
        }

        info!("Reordering {} menu item(s)", updates.len());
        self.repo.update_sort_orders(updates).await
    }
}
