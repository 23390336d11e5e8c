//! Schema bootstrap for the syllabus tables
//!
//! The production schema is owned elsewhere; this only creates the two
//! tables the lookup reads when they are missing (local runs and tests).

use sqlx::PgPool;

/// Create `syllabuses` and `syllabus_relations` if they do not exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running syllabus migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS syllabuses (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            term TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS syllabus_relations (
            parent_id TEXT NOT NULL,
            child_id TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_syllabus_relations_parent
        ON syllabus_relations(parent_id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Syllabus migrations complete");
    Ok(())
}
