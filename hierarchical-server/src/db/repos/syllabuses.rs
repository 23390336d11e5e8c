//! Syllabus repository backed by Postgres
//!
//! Reads from `syllabuses(id, name, term)` and
//! `syllabus_relations(parent_id, child_id)`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::store::{DbError, SyllabusStore};
use crate::models::{Relation, SyllabusRecord};

/// Syllabus repository
#[derive(Clone)]
pub struct SyllabusRepo {
    pool: PgPool,
}

impl SyllabusRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SyllabusStore for SyllabusRepo {
    async fn find_syllabus(&self, id: &str) -> Result<Option<SyllabusRecord>, DbError> {
        let record = sqlx::query_as::<_, SyllabusRecord>(
            r#"
            SELECT id, name, term
            FROM syllabuses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn relations_for_parent(&self, parent_id: &str) -> Result<Vec<Relation>, DbError> {
        let relations = sqlx::query_as::<_, Relation>(
            r#"
            SELECT parent_id, child_id
            FROM syllabus_relations
            WHERE parent_id = $1
            ORDER BY child_id
            "#,
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(relations)
    }
}
