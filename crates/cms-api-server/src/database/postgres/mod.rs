//! PostgreSQL repository implementations

pub mod lookup_repo_impl;
pub mod menu_repo_impl;

pub use lookup_repo_impl::PgLinkLookupRepository;
pub use menu_repo_impl::PgMenuRepository;
