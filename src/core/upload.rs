//! Upload coordination and client-side validation.
//!
//! Validation here is a fast-fail UX convenience, not a security boundary;
//! the backend re-validates everything. The batched upload is
//! all-or-nothing: on success every record in the response is prepended to
//! the listing collection in submission order, on failure nothing is
//! applied and the caller keeps the form populated for a retry.

use crate::config::upload::MAX_FILE_BYTES;
use crate::core::api;
use crate::core::error::{ApiError, ValidationError};
use crate::core::listing::ListingState;
use crate::core::session::SessionState;
use crate::models::MediaKind;

/// Validate a single file by its metadata.
pub fn validate(name: &str, mime: &str, size_bytes: u64) -> Result<(), ValidationError> {
    if size_bytes > MAX_FILE_BYTES {
        return Err(ValidationError::TooLarge {
            name: name.to_string(),
        });
    }
    if !MediaKind::from_mime(mime).is_uploadable() {
        return Err(ValidationError::UnsupportedType {
            name: name.to_string(),
            mime: mime.to_string(),
        });
    }
    Ok(())
}

/// Validate a batch before submission: at least one file, every file
/// within the size cap and an accepted media category.
pub fn validate_selection(files: &[web_sys::File]) -> Result<(), ValidationError> {
    if files.is_empty() {
        return Err(ValidationError::NoFiles);
    }
    for file in files {
        validate(&file.name(), &file.type_(), file.size() as u64)?;
    }
    Ok(())
}

/// Upload a validated batch and publish the new records to the listing
/// collection. Returns the number of records created.
pub async fn upload_batch(
    listing: ListingState,
    session: SessionState,
    files: Vec<web_sys::File>,
    tags: Vec<String>,
) -> Result<usize, ApiError> {
    let Some(token) = session.token() else {
        session.expire();
        return Err(ApiError::Unauthorized);
    };

    match api::upload_files(&files, &tags, &token).await {
        Ok(records) => {
            let count = records.len();
            listing.prepend(records);
            Ok(count)
        }
        Err(e) => {
            if e.is_auth_failure() {
                session.expire();
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_media_within_cap() {
        assert!(validate("a.png", "image/png", 1024).is_ok());
        assert!(validate("b.mp4", "video/mp4", MAX_FILE_BYTES).is_ok());
        assert!(validate("c.pdf", "application/pdf", 0).is_ok());
        assert!(validate("d.csv", "text/csv", 10).is_ok());
    }

    #[test]
    fn test_rejects_oversized_file() {
        let err = validate("big.png", "image/png", MAX_FILE_BYTES + 1).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLarge {
                name: "big.png".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_unsupported_type() {
        let err = validate("a.zip", "application/zip", 10).unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedType { .. }));
    }

    #[test]
    fn test_rejects_empty_selection() {
        assert_eq!(validate_selection(&[]).unwrap_err(), ValidationError::NoFiles);
    }
}
