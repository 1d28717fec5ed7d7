//! Repository traits (ports)

pub mod lookup_repository;
pub mod menu_repository;

pub use lookup_repository::{LinkLookupRepository, LookupEntry};
pub use menu_repository::MenuRepository;
