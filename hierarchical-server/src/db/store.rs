//! Storage seam between the lookup service and the database

use async_trait::async_trait;

use crate::models::{Relation, SyllabusRecord};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Read access to syllabuses and their relation edges.
#[async_trait]
pub trait SyllabusStore: Send + Sync + 'static {
    /// Fetch the syllabus row with `id`. If storage returns several rows,
    /// the first one wins.
    async fn find_syllabus(&self, id: &str) -> Result<Option<SyllabusRecord>, DbError>;

    /// Fetch every edge whose `parent_id` is `parent_id`.
    async fn relations_for_parent(&self, parent_id: &str) -> Result<Vec<Relation>, DbError>;
}
