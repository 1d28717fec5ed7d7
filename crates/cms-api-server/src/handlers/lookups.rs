// ============================================================================
// CMS API - Link Target Lookups
// File: crates/cms-api-server/src/handlers/lookups.rs
// ============================================================================
//! Listing and single-record lookups for pages, courses, and news entries.
//! The admin UI uses these to populate link pickers.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::domain::LinkKind;
use crate::error::DomainError;
use crate::repositories::{LinkLookupRepository, LookupEntry};
use crate::state::AppState;
use crate::utils::error::ApiError;

#[derive(Debug, Serialize)]
pub struct LookupEntryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

impl LookupEntryDto {
    fn from_entry(entry: LookupEntry) -> Self {
        LookupEntryDto {
            id: entry.id,
            title: entry.title,
            slug: entry.slug,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LookupListResponse {
    pub items: Vec<LookupEntryDto>,
    pub total: usize,
}

async fn list_kind(state: AppState, kind: LinkKind) -> Result<Json<LookupListResponse>, ApiError> {
    info!("Listing {} entries", kind.as_str());

    let entries = state.lookups.list(kind).await?;
    let items: Vec<LookupEntryDto> = entries.into_iter().map(LookupEntryDto::from_entry).collect();
    let total = items.len();

    Ok(Json(LookupListResponse { items, total }))
}

async fn find_kind(
    state: AppState,
    kind: LinkKind,
    id: i64,
) -> Result<Json<LookupEntryDto>, ApiError> {
    let entry = state
        .lookups
        .find(kind, id)
        .await?
        .ok_or(DomainError::LookupNotFound {
            kind: kind.as_str(),
            id,
        })?;

    Ok(Json(LookupEntryDto::from_entry(entry)))
}

pub async fn list_pages_handler(
    State(state): State<AppState>,
) -> Result<Json<LookupListResponse>, ApiError> {
    list_kind(state, LinkKind::Page).await
}

pub async fn get_page_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LookupEntryDto>, ApiError> {
    find_kind(state, LinkKind::Page, id).await
}

pub async fn list_courses_handler(
    State(state): State<AppState>,
) -> Result<Json<LookupListResponse>, ApiError> {
    list_kind(state, LinkKind::Course).await
}

pub async fn get_course_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LookupEntryDto>, ApiError> {
    find_kind(state, LinkKind::Course, id).await
}

pub async fn list_news_handler(
    State(state): State<AppState>,
) -> Result<Json<LookupListResponse>, ApiError> {
    list_kind(state, LinkKind::News).await
}

pub async fn get_news_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LookupEntryDto>, ApiError> {
    find_kind(state, LinkKind::News, id).await
}
