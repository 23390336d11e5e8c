//! In-process syllabus store
//!
//! Keeps rows in insertion order, which is the order relations come back in.
//! Used by tests and for running the server without Postgres.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::store::{DbError, SyllabusStore};
use crate::models::{Relation, SyllabusRecord};

#[derive(Default)]
struct Tables {
    syllabuses: Vec<SyllabusRecord>,
    relations: Vec<Relation>,
    failure: Option<String>,
}

/// Syllabus store held in memory. Clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
    relation_queries: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_syllabus(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        term: impl Into<String>,
    ) {
        self.tables.write().await.syllabuses.push(SyllabusRecord {
            id: id.into(),
            name: name.into(),
            term: term.into(),
        });
    }

    pub async fn insert_relation(&self, parent_id: impl Into<String>, child_id: impl Into<String>) {
        self.tables
            .write()
            .await
            .relations
            .push(Relation::new(parent_id, child_id));
    }

    pub async fn remove_syllabus(&self, id: &str) {
        self.tables.write().await.syllabuses.retain(|s| s.id != id);
    }

    /// Make every subsequent read fail with a connection-refused I/O error.
    pub async fn fail_with(&self, message: impl Into<String>) {
        self.tables.write().await.failure = Some(message.into());
    }

    pub async fn recover(&self) {
        self.tables.write().await.failure = None;
    }

    /// Number of relation queries served so far.
    pub fn relation_queries(&self) -> usize {
        self.relation_queries.load(Ordering::Relaxed)
    }
}

fn check(tables: &Tables) -> Result<(), DbError> {
    match &tables.failure {
        Some(message) => Err(DbError::Sqlx(sqlx::Error::Io(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            message.clone(),
        )))),
        None => Ok(()),
    }
}

#[async_trait]
impl SyllabusStore for MemoryStore {
    async fn find_syllabus(&self, id: &str) -> Result<Option<SyllabusRecord>, DbError> {
        let tables = self.tables.read().await;
        check(&tables)?;
        Ok(tables.syllabuses.iter().find(|s| s.id == id).cloned())
    }

    async fn relations_for_parent(&self, parent_id: &str) -> Result<Vec<Relation>, DbError> {
        self.relation_queries.fetch_add(1, Ordering::Relaxed);
        let tables = self.tables.read().await;
        check(&tables)?;
        Ok(tables
            .relations
            .iter()
            .filter(|r| r.parent_id == parent_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_matching_row_wins() {
        let store = MemoryStore::new();
        store.insert_syllabus("s1", "Algebra", "2024").await;
        store.insert_syllabus("s1", "Algebra II", "2025").await;

        let found = store.find_syllabus("s1").await.unwrap().unwrap();
        assert_eq!(found.name, "Algebra");
    }

    #[tokio::test]
    async fn relations_filtered_by_parent_in_insertion_order() {
        let store = MemoryStore::new();
        store.insert_relation("s1", "s3").await;
        store.insert_relation("s2", "s1").await;
        store.insert_relation("s1", "s2").await;

        let relations = store.relations_for_parent("s1").await.unwrap();
        assert_eq!(
            relations,
            vec![Relation::new("s1", "s3"), Relation::new("s1", "s2")]
        );
    }

    #[tokio::test]
    async fn injected_failure_and_recovery() {
        let store = MemoryStore::new();
        store.insert_syllabus("s1", "Algebra", "2024").await;
        store.fail_with("connection refused").await;

        let err = store.find_syllabus("s1").await.unwrap_err();
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::Io(_))));
        assert!(err.to_string().contains("connection refused"));

        store.recover().await;
        assert!(store.find_syllabus("s1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn clones_share_tables() {
        let store = MemoryStore::new();
        let other = store.clone();
        other.insert_syllabus("s1", "Algebra", "2024").await;

        assert!(store.find_syllabus("s1").await.unwrap().is_some());
    }
}
