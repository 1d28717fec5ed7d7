// ============================================================================
// CMS API - Public Navigation Handler
// File: crates/cms-api-server/src/handlers/navigation.rs
// ============================================================================
//! Read-only tree for the public site: inactive items are pruned together
//! with their subtrees. No link labels here; the public renderer only needs
//! the items themselves.

use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::handlers::menus::{tree_dto, MenuTreeDto};
use crate::services::filter_active;
use crate::state::AppState;
use crate::utils::error::ApiError;

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub menus: Vec<MenuTreeDto>,
}

pub async fn navigation_handler(
    State(state): State<AppState>,
) -> Result<Json<NavigationResponse>, ApiError> {
    info!("Listing public navigation");

    let data = state.menu_service.list_tree().await?;

    let no_labels = HashMap::new();
    let menus = filter_active(data.roots)
        .into_iter()
        .map(|node| tree_dto(node, &no_labels))
        .collect();

    Ok(Json(NavigationResponse { menus }))
}
