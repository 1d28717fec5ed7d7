//! Domain entities for the CMS menu tree.

pub mod menu;

pub use menu::{
    LinkKind, MenuItem, MenuItemDraft, MenuLink, MenuNode, MenuTarget, ReorderUpdate,
};
