//! Database module (PostgreSQL adapters)

pub mod pool;
pub mod postgres;
pub mod schema;

pub use pool::DbPool;
pub use postgres::{PgLinkLookupRepository, PgMenuRepository};
pub use schema::ensure_schema;
