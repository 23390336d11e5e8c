//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{SyllabusId, ValidationError};

/// Extract and validate a syllabus id from path
pub struct ValidSyllabusId(pub SyllabusId);

impl<S> FromRequestParts<S> for ValidSyllabusId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                // The route always binds `{id}`, so only percent-decoding can fail here
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "syllabus id",
                    reason: "not valid UTF-8",
                })
            })?;

        Ok(Self(SyllabusId::new(&id)?))
    }
}
