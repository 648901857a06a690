//! Media file records and in-place collection edits.
//!
//! The committed collection is owned by [`crate::core::ListingState`]; the
//! helpers here are the only mutations applied to it outside a full
//! server-result replacement. Keys are unique by `id`.

use serde::{Deserialize, Serialize};

/// A media file record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(rename = "file_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(rename = "size")]
    pub size_bytes: u64,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "viewCount", default)]
    pub view_count: u64,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

impl FileRecord {
    pub fn kind(&self) -> MediaKind {
        MediaKind::from_mime(&self.mime_type)
    }
}

/// Broad media category derived from a MIME type.
///
/// Drives icon selection, the type filter, and upload validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Pdf,
    Spreadsheet,
    Other,
}

impl MediaKind {
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else if mime.starts_with("video/") {
            Self::Video
        } else if mime.starts_with("audio/") {
            Self::Audio
        } else if mime == "application/pdf" {
            Self::Pdf
        } else if matches!(
            mime,
            "text/csv"
                | "application/vnd.ms-excel"
                | "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        ) {
            Self::Spreadsheet
        } else {
            Self::Other
        }
    }

    /// Whether the upload form accepts this category.
    pub fn is_uploadable(self) -> bool {
        self != Self::Other
    }
}

/// Prepend newly created records to the collection, preserving submission
/// order and dropping any stale entry that shares an id with a new record.
pub fn prepend_records(files: &mut Vec<FileRecord>, new: Vec<FileRecord>) {
    files.retain(|existing| !new.iter().any(|n| n.id == existing.id));
    files.splice(0..0, new);
}

/// Remove the record with the given id. Returns whether an entry was removed.
pub fn remove_record(files: &mut Vec<FileRecord>, id: &str) -> bool {
    let before = files.len();
    files.retain(|f| f.id != id);
    files.len() != before
}

/// Increment the view counter of the record with the given id in place.
pub fn bump_record_view(files: &mut [FileRecord], id: &str) -> bool {
    match files.iter_mut().find(|f| f.id == id) {
        Some(record) => {
            record.view_count += 1;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: format!("{id}.png"),
            mime_type: "image/png".to_string(),
            size_bytes: 1024,
            url: format!("https://files.example/{id}"),
            tags: vec![],
            view_count: 0,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_prepend_keeps_submission_order() {
        let mut files = vec![record("a"), record("b")];
        prepend_records(&mut files, vec![record("x"), record("y"), record("z")]);

        let ids: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["x", "y", "z", "a", "b"]);
    }

    #[test]
    fn test_prepend_deduplicates_by_id() {
        let mut files = vec![record("a"), record("b")];
        prepend_records(&mut files, vec![record("b")]);

        let ids: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_remove_record_exact_entry() {
        let mut files = vec![record("a"), record("b"), record("c")];
        assert!(remove_record(&mut files, "b"));
        let ids: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);

        // Unknown id leaves the collection unchanged
        assert!(!remove_record(&mut files, "b"));
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_bump_record_view() {
        let mut files = vec![record("a")];
        assert!(bump_record_view(&mut files, "a"));
        assert_eq!(files[0].view_count, 1);
        assert!(!bump_record_view(&mut files, "missing"));
    }

    #[test]
    fn test_media_kind_from_mime() {
        assert_eq!(MediaKind::from_mime("image/jpeg"), MediaKind::Image);
        assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime("audio/mpeg"), MediaKind::Audio);
        assert_eq!(MediaKind::from_mime("application/pdf"), MediaKind::Pdf);
        assert_eq!(MediaKind::from_mime("text/csv"), MediaKind::Spreadsheet);
        assert_eq!(MediaKind::from_mime("text/plain"), MediaKind::Other);
        assert!(!MediaKind::from_mime("application/zip").is_uploadable());
    }

    #[test]
    fn test_record_wire_names() {
        let json = r#"{
            "file_id": "f1",
            "name": "demo.png",
            "type": "image/png",
            "size": 2048,
            "url": "https://files.example/f1",
            "tags": ["demo"],
            "viewCount": 7,
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-02T00:00:00Z"
        }"#;
        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "f1");
        assert_eq!(record.mime_type, "image/png");
        assert_eq!(record.size_bytes, 2048);
        assert_eq!(record.view_count, 7);
    }
}
