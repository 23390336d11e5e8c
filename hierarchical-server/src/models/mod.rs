//! Domain models with validation at construction
//!
//! Path input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod syllabus;

pub use validation::ValidationError;
pub use syllabus::{Relation, Syllabus, SyllabusId, SyllabusRecord};
