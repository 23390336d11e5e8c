//! Syllabus lookup service
//!
//! Composes two reads: the syllabus row, then the edges where it is the
//! parent. The reads are not wrapped in a transaction.

use tracing::{debug, instrument};

use crate::db::{DbError, SyllabusStore};
use crate::models::{Syllabus, SyllabusId};

/// Lookup failure
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("unknown syllabus '{0}'")]
    UnknownSyllabus(String),

    #[error(transparent)]
    Storage(#[from] DbError),
}

/// Read-only syllabus service over a [`SyllabusStore`].
#[derive(Clone)]
pub struct SyllabusService<S> {
    store: S,
}

impl<S: SyllabusStore> SyllabusService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch a syllabus and its parent-side relations.
    ///
    /// Returns [`LookupError::UnknownSyllabus`] without touching the
    /// relation table when no row matches `id`.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn get_by_id(&self, id: &SyllabusId) -> Result<Syllabus, LookupError> {
        let record = self
            .store
            .find_syllabus(id.as_str())
            .await?
            .ok_or_else(|| LookupError::UnknownSyllabus(id.as_str().to_owned()))?;

        let relations = self.store.relations_for_parent(&record.id).await?;
        debug!(relations = relations.len(), "syllabus loaded");

        Ok(Syllabus::from_parts(record, relations))
    }
}
