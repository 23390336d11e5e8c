//! Command implementations for hierarchical CLI

pub mod serve;

pub use serve::run_serve;
