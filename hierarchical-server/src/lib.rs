//! hierarchical-server: syllabus lookup over HTTP
//!
//! Serves `GET /v1/syllabuses/{id}`, returning a syllabus together with
//! the relation edges where it is the parent, read from Postgres.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use config::{ConfigError, DatabaseConfig};
pub use db::{DbError, MemoryStore, SyllabusRepo, SyllabusStore};
pub use models::{Relation, Syllabus, SyllabusId, ValidationError};
pub use service::{LookupError, SyllabusService};
