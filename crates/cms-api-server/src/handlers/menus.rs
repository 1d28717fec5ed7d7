// ============================================================================
// CMS API - Menu Handlers
// File: crates/cms-api-server/src/handlers/menus.rs
// ============================================================================
//! Admin menu endpoints: tree listing, create, update, cascading delete,
//! and batch reorder.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::domain::{MenuItem, MenuItemDraft, MenuLink, MenuNode, MenuTarget, ReorderUpdate};
use crate::error::DomainError;
use crate::state::AppState;
use crate::utils::error::ApiError;

/// Body of POST /menus and PUT /menus/{id}. The body is the full desired
/// state of the item; omitted fields take the creation defaults. At most one
/// of `url`, `page_id`, `course_id`, `news_id` may be supplied.
#[derive(Debug, Deserialize, Validate)]
pub struct MenuPayload {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,

    #[validate(length(max = 500, message = "URL must be at most 500 characters"))]
    pub url: Option<String>,

    pub page_id: Option<i64>,
    pub course_id: Option<i64>,
    pub news_id: Option<i64>,
    pub parent_id: Option<i64>,

    #[serde(default)]
    pub sort_order: i32,

    #[serde(default = "default_active")]
    pub is_active: bool,

    /// `_self` (default) or `_blank`.
    pub target: Option<String>,
}

fn default_active() -> bool {
    true
}

impl MenuPayload {
    fn into_draft(self) -> Result<MenuItemDraft, DomainError> {
        let link =
            MenuLink::from_request_parts(self.url, self.page_id, self.course_id, self.news_id)?;

        let target = match self.target.as_deref() {
            None => MenuTarget::default(),
            Some(raw) => MenuTarget::from_str(raw).ok_or_else(|| {
                DomainError::InvalidInput(format!(
                    "unknown target '{}', expected _self or _blank",
                    raw
                ))
            })?,
        };

        Ok(MenuItemDraft {
            title: self.title,
            link,
            parent_id: self.parent_id,
            sort_order: self.sort_order,
            is_active: self.is_active,
            target,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MenuItemDto {
    pub id: i64,
    pub title: String,
    pub url: Option<String>,
    pub page_id: Option<i64>,
    pub course_id: Option<i64>,
    pub news_id: Option<i64>,
    pub parent_id: Option<i64>,
    pub sort_order: i32,
    pub is_active: bool,
    pub target: String,
    pub created_at: String,
}

impl MenuItemDto {
    pub fn from_item(item: MenuItem) -> Self {
        let (url, page_id, course_id, news_id) = item.link.to_columns();
        MenuItemDto {
            id: item.id,
            title: item.title,
            url,
            page_id,
            course_id,
            news_id,
            parent_id: item.parent_id,
            sort_order: item.sort_order,
            is_active: item.is_active,
            target: item.target.as_str().to_string(),
            created_at: item.created_at.to_rfc3339(),
        }
    }
}

/// Tree node: the item fields plus a resolved display label for referenced
/// pages/courses/news and the nested children.
#[derive(Debug, Serialize)]
pub struct MenuTreeDto {
    pub id: i64,
    pub title: String,
    pub url: Option<String>,
    pub page_id: Option<i64>,
    pub course_id: Option<i64>,
    pub news_id: Option<i64>,
    pub parent_id: Option<i64>,
    pub sort_order: i32,
    pub is_active: bool,
    pub target: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_label: Option<String>,
    pub children: Vec<MenuTreeDto>,
}

pub fn tree_dto(node: MenuNode, labels: &HashMap<i64, String>) -> MenuTreeDto {
    let children = node
        .children
        .into_iter()
        .map(|child| tree_dto(child, labels))
        .collect();
    let link_label = labels.get(&node.item.id).cloned();
    let item = MenuItemDto::from_item(node.item);

    MenuTreeDto {
        id: item.id,
        title: item.title,
        url: item.url,
        page_id: item.page_id,
        course_id: item.course_id,
        news_id: item.news_id,
        parent_id: item.parent_id,
        sort_order: item.sort_order,
        is_active: item.is_active,
        target: item.target,
        created_at: item.created_at,
        link_label,
        children,
    }
}

#[derive(Debug, Serialize)]
pub struct MenuListResponse {
    pub menus: Vec<MenuTreeDto>,
    #[serde(rename = "allMenus")]
    pub all_menus: Vec<MenuItemDto>,
}

pub async fn list_menus_handler(
    State(state): State<AppState>,
) -> Result<Json<MenuListResponse>, ApiError> {
    info!("Listing menu tree");

    let data = state.menu_service.list_tree().await?;
    let labels = state.label_service.labels_for(&data.items).await;

    let menus = data
        .roots
        .into_iter()
        .map(|node| tree_dto(node, &labels))
        .collect();
    let all_menus = data.items.into_iter().map(MenuItemDto::from_item).collect();

    Ok(Json(MenuListResponse { menus, all_menus }))
}

pub async fn create_menu_handler(
    State(state): State<AppState>,
    Json(payload): Json<MenuPayload>,
) -> Result<(StatusCode, Json<MenuItemDto>), ApiError> {
    info!("Create menu request: {}", payload.title);
    payload.validate()?;

    let draft = payload.into_draft()?;
    let created = state.menu_service.create(draft).await?;

    Ok((StatusCode::CREATED, Json(MenuItemDto::from_item(created))))
}

pub async fn update_menu_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuPayload>,
) -> Result<Json<MenuItemDto>, ApiError> {
    info!("Update menu request for {}", id);
    payload.validate()?;

    let draft = payload.into_draft()?;
    let updated = state.menu_service.update(id, draft).await?;

    Ok(Json(MenuItemDto::from_item(updated)))
}

#[derive(Debug, Serialize)]
pub struct DeleteMenuResponse {
    pub id: i64,
    /// Number of rows removed, the item itself included.
    pub deleted: u64,
}

pub async fn delete_menu_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteMenuResponse>, ApiError> {
    info!("Delete menu request for {}", id);

    let deleted = state.menu_service.delete(id).await?;

    Ok(Json(DeleteMenuResponse { id, deleted }))
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub updates: Vec<ReorderUpdate>,
}

#[derive(Debug, Serialize)]
pub struct ReorderResponse {
    pub updated: u64,
}

pub async fn reorder_menus_handler(
    State(state): State<AppState>,
    Json(request): Json<ReorderRequest>,
) -> Result<Json<ReorderResponse>, ApiError> {
    info!("Reorder request for {} menu item(s)", request.updates.len());

    let updated = state.menu_service.reorder(&request.updates).await?;

    Ok(Json(ReorderResponse { updated }))
}
