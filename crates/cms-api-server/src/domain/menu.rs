// ============================================================================
// CMS Core - Menu Entities
// File: crates/cms-api-server/src/domain/menu.rs
// Description: Navigation menu item, link variants, and derived tree node
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Kind of CMS record a menu item can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Page,
    Course,
    News,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Page => "page",
            LinkKind::Course => "course",
            LinkKind::News => "news",
        }
    }
}

/// Navigation destination of a menu item.
///
/// Stored as four nullable columns (`url`, `page_id`, `course_id`, `news_id`);
/// application code only ever sees this tagged form. At most one column is
/// populated per row, which `to_columns` enforces on every write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuLink {
    /// No destination (e.g. a grouping header in the menu).
    #[default]
    None,
    /// Free URL, absolute or site-relative.
    Url(String),
    Page(i64),
    Course(i64),
    News(i64),
}

impl MenuLink {
    /// Build a link from request fields, rejecting ambiguous combinations.
    ///
    /// A blank `url` counts as absent so HTML forms can submit empty strings.
    pub fn from_request_parts(
        url: Option<String>,
        page_id: Option<i64>,
        course_id: Option<i64>,
        news_id: Option<i64>,
    ) -> Result<Self, DomainError> {
        let url = url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        let supplied = url.is_some() as u8
            + page_id.is_some() as u8
            + course_id.is_some() as u8
            + news_id.is_some() as u8;
        if supplied > 1 {
            return Err(DomainError::InvalidLink(
                "more than one link target supplied".to_string(),
            ));
        }

        Ok(if let Some(url) = url {
            MenuLink::Url(url)
        } else if let Some(id) = page_id {
            MenuLink::Page(id)
        } else if let Some(id) = course_id {
            MenuLink::Course(id)
        } else if let Some(id) = news_id {
            MenuLink::News(id)
        } else {
            MenuLink::None
        })
    }

    /// Decode a stored row. Rows written by this service carry at most one
    /// populated column; should older data carry several, the first one wins
    /// in `url > page_id > course_id > news_id` order so reads never fail.
    pub fn from_columns(
        url: Option<String>,
        page_id: Option<i64>,
        course_id: Option<i64>,
        news_id: Option<i64>,
    ) -> Self {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            MenuLink::Url(url)
        } else if let Some(id) = page_id {
            MenuLink::Page(id)
        } else if let Some(id) = course_id {
            MenuLink::Course(id)
        } else if let Some(id) = news_id {
            MenuLink::News(id)
        } else {
            MenuLink::None
        }
    }

    /// Encode for persistence. The three unused columns are always `None`
    /// so every write clears stale targets regardless of the row's history.
    pub fn to_columns(&self) -> (Option<String>, Option<i64>, Option<i64>, Option<i64>) {
        match self {
            MenuLink::None => (None, None, None, None),
            MenuLink::Url(url) => (Some(url.clone()), None, None, None),
            MenuLink::Page(id) => (None, Some(*id), None, None),
            MenuLink::Course(id) => (None, None, Some(*id), None),
            MenuLink::News(id) => (None, None, None, Some(*id)),
        }
    }

    /// Kind of the referenced record, if the link points into the CMS.
    pub fn kind(&self) -> Option<LinkKind> {
        match self {
            MenuLink::Page(_) => Some(LinkKind::Page),
            MenuLink::Course(_) => Some(LinkKind::Course),
            MenuLink::News(_) => Some(LinkKind::News),
            _ => None,
        }
    }

    pub fn ref_id(&self) -> Option<i64> {
        match self {
            MenuLink::Page(id) | MenuLink::Course(id) | MenuLink::News(id) => Some(*id),
            _ => None,
        }
    }
}

/// Browser target of a menu link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuTarget {
    #[default]
    #[serde(rename = "_self")]
    SameTab,
    #[serde(rename = "_blank")]
    NewTab,
}

impl MenuTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuTarget::SameTab => "_self",
            MenuTarget::NewTab => "_blank",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "_self" => Some(MenuTarget::SameTab),
            "_blank" => Some(MenuTarget::NewTab),
            _ => None,
        }
    }
}

/// One navigation entry, as persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub title: String,
    pub link: MenuLink,
    /// `None` marks a root item.
    pub parent_id: Option<i64>,
    /// Sibling ordering, ascending; not required to be contiguous.
    pub sort_order: i32,
    /// Inactive items stay manageable in the admin tree but are excluded
    /// from the public navigation projection.
    pub is_active: bool,
    pub target: MenuTarget,
    pub created_at: DateTime<Utc>,
}

/// Fields of a menu item under creation or full update.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemDraft {
    pub title: String,
    pub link: MenuLink,
    pub parent_id: Option<i64>,
    pub sort_order: i32,
    pub is_active: bool,
    pub target: MenuTarget,
}

impl MenuItemDraft {
    /// Trim the title and reject drafts without one.
    pub fn normalize(mut self) -> Result<Self, DomainError> {
        self.title = self.title.trim().to_string();
        if self.title.is_empty() {
            return Err(DomainError::TitleRequired);
        }
        Ok(self)
    }
}

/// One entry of a batch reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderUpdate {
    pub id: i64,
    pub sort_order: i32,
}

/// A menu item with its children attached, as assembled by the tree service.
/// Derived on every read; only the flat rows are persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuNode {
    pub item: MenuItem,
    pub children: Vec<MenuNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_from_single_field() {
        let link = MenuLink::from_request_parts(Some("/about".into()), None, None, None).unwrap();
        assert_eq!(link, MenuLink::Url("/about".into()));

        let link = MenuLink::from_request_parts(None, Some(7), None, None).unwrap();
        assert_eq!(link, MenuLink::Page(7));

        let link = MenuLink::from_request_parts(None, None, None, Some(3)).unwrap();
        assert_eq!(link, MenuLink::News(3));
    }

    #[test]
    fn test_link_without_fields_is_none() {
        let link = MenuLink::from_request_parts(None, None, None, None).unwrap();
        assert_eq!(link, MenuLink::None);
    }

    #[test]
    fn test_blank_url_counts_as_absent() {
        let link = MenuLink::from_request_parts(Some("   ".into()), None, None, None).unwrap();
        assert_eq!(link, MenuLink::None);

        // A blank url next to a real reference must not count as a conflict.
        let link = MenuLink::from_request_parts(Some("".into()), Some(4), None, None).unwrap();
        assert_eq!(link, MenuLink::Page(4));
    }

    #[test]
    fn test_conflicting_fields_rejected() {
        let err = MenuLink::from_request_parts(Some("/x".into()), Some(1), None, None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidLink(_)));

        let err = MenuLink::from_request_parts(None, Some(1), None, Some(2)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidLink(_)));
    }

    #[test]
    fn test_column_decode_precedence() {
        let link = MenuLink::from_columns(Some("/x".into()), Some(1), Some(2), Some(3));
        assert_eq!(link, MenuLink::Url("/x".into()));

        let link = MenuLink::from_columns(None, Some(1), Some(2), None);
        assert_eq!(link, MenuLink::Page(1));

        let link = MenuLink::from_columns(None, None, None, None);
        assert_eq!(link, MenuLink::None);
    }

    #[test]
    fn test_columns_clear_unused_fields() {
        assert_eq!(
            MenuLink::Course(9).to_columns(),
            (None, None, Some(9), None)
        );
        assert_eq!(MenuLink::None.to_columns(), (None, None, None, None));

        let (url, page, course, news) = MenuLink::Url("/news".into()).to_columns();
        assert_eq!(url.as_deref(), Some("/news"));
        assert_eq!((page, course, news), (None, None, None));
    }

    #[test]
    fn test_target_parsing() {
        assert_eq!(MenuTarget::from_str("_blank"), Some(MenuTarget::NewTab));
        assert_eq!(MenuTarget::from_str("_self"), Some(MenuTarget::SameTab));
        assert_eq!(MenuTarget::from_str("popup"), None);
        assert_eq!(MenuTarget::from_str("x").unwrap_or_default(), MenuTarget::SameTab);
    }

    #[test]
    fn test_draft_normalize_trims_title() {
        let draft = MenuItemDraft {
            title: "  About us  ".into(),
            link: MenuLink::None,
            parent_id: None,
            sort_order: 0,
            is_active: true,
            target: MenuTarget::SameTab,
        };
        assert_eq!(draft.normalize().unwrap().title, "About us");
    }

    #[test]
    fn test_draft_normalize_rejects_blank_title() {
        let draft = MenuItemDraft {
            title: "   ".into(),
            link: MenuLink::None,
            parent_id: None,
            sort_order: 0,
            is_active: true,
            target: MenuTarget::SameTab,
        };
        assert!(matches!(
            draft.normalize(),
            Err(DomainError::TitleRequired)
        ));
    }
}
