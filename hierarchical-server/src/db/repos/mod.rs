//! Repository implementations for database access
//!
//! Each repository:
//! - Binds every input as a query parameter
//! - Uses `fetch_optional` for single-row lookups (first row wins)

pub mod syllabuses;

pub use syllabuses::SyllabusRepo;
