//! Database layer - connection pool, storage trait and implementations
//!
//! # Design Principles
//!
//! - Connection pool (bounded) - no Arc<Mutex<Connection>>
//! - Parameterized queries only
//! - Reads only; no transaction spans the entity and relation queries

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options, ping};
pub use repos::SyllabusRepo;
pub use store::{DbError, SyllabusStore};
