//! Syllabus aggregate and its relation edges

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Validated syllabus identifier.
///
/// Only blank input is rejected; any other string is passed through to
/// storage as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyllabusId(String);

impl SyllabusId {
    /// Create a new syllabus id.
    ///
    /// # Example
    /// ```
    /// use hierarchical_server::models::SyllabusId;
    ///
    /// assert!(SyllabusId::new("s1").is_ok());
    /// assert!(SyllabusId::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "syllabus id" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SyllabusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Row from the `syllabuses` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct SyllabusRecord {
    pub id: String,
    pub name: String,
    pub term: String,
}

/// Directed parent -> child edge from `syllabus_relations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub parent_id: String,
    pub child_id: String,
}

impl Relation {
    pub fn new(parent_id: impl Into<String>, child_id: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
            child_id: child_id.into(),
        }
    }
}

/// A syllabus with the edges where it is the parent.
///
/// `relations` is always present in the JSON output (as `parents`), even
/// when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllabus {
    pub id: String,
    pub name: String,
    pub term: String,
    #[serde(rename = "parents")]
    pub relations: Vec<Relation>,
}

impl Syllabus {
    /// Attach relation rows to a syllabus row.
    pub fn from_parts(record: SyllabusRecord, relations: Vec<Relation>) -> Self {
        Self {
            id: record.id,
            name: record.name,
            term: record.term,
            relations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algebra() -> SyllabusRecord {
        SyllabusRecord {
            id: "s1".into(),
            name: "Algebra".into(),
            term: "2024".into(),
        }
    }

    #[test]
    fn blank_ids_rejected() {
        assert!(SyllabusId::new("").is_err());
        assert!(SyllabusId::new(" \t").is_err());
    }

    #[test]
    fn ids_are_not_normalized() {
        let id = SyllabusId::new(" s1").unwrap();
        assert_eq!(id.as_str(), " s1");
    }

    #[test]
    fn serializes_with_parents_key() {
        let syllabus = Syllabus::from_parts(algebra(), vec![Relation::new("s1", "s2")]);
        let json = serde_json::to_string(&syllabus).unwrap();
        assert_eq!(
            json,
            r#"{"id":"s1","name":"Algebra","term":"2024","parents":[{"parentId":"s1","childId":"s2"}]}"#
        );
    }

    #[test]
    fn empty_relations_serialize_as_array() {
        let syllabus = Syllabus::from_parts(algebra(), Vec::new());
        let value = serde_json::to_value(&syllabus).unwrap();
        assert_eq!(value["parents"], serde_json::json!([]));
    }
}
