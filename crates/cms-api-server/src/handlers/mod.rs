pub mod health;
pub mod lookups;
pub mod menus;
pub mod navigation;
