//! Listing query tuple: search text, sort key, and type filter.
//!
//! Every mutation of the tuple is a candidate trigger for a fetch cycle;
//! the scheduling policy (debounce vs. immediate) lives in
//! [`crate::core::ListingState`].

/// Sort order for the listing endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first (default).
    #[default]
    CreatedAt,
    /// Most viewed first.
    ViewCount,
    /// Largest first.
    Size,
}

impl SortKey {
    /// Wire value for the `sort` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::ViewCount => "viewCount",
            Self::Size => "size",
        }
    }

    /// Parse a select-control value back into a sort key.
    pub fn from_param(value: &str) -> Self {
        match value {
            "viewCount" => Self::ViewCount,
            "size" => Self::Size,
            _ => Self::CreatedAt,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CreatedAt => "Sort by: Newest",
            Self::ViewCount => "Sort by: Views",
            Self::Size => "Sort by: Size",
        }
    }

    pub const ALL: [SortKey; 3] = [Self::CreatedAt, Self::ViewCount, Self::Size];
}

/// MIME-category filter for the listing endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    /// No filtering (default); sent as an empty `filter` parameter.
    #[default]
    All,
    Image,
    Video,
    Audio,
    Pdf,
    Spreadsheet,
}

impl TypeFilter {
    /// Wire value for the `filter` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Pdf => "pdf",
            Self::Spreadsheet => "spreadsheet",
        }
    }

    /// Parse a select-control value back into a filter.
    pub fn from_param(value: &str) -> Self {
        match value {
            "image" => Self::Image,
            "video" => Self::Video,
            "audio" => Self::Audio,
            "pdf" => Self::Pdf,
            "spreadsheet" => Self::Spreadsheet,
            _ => Self::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Types",
            Self::Image => "Images",
            Self::Video => "Videos",
            Self::Audio => "Audio",
            Self::Pdf => "PDFs",
            Self::Spreadsheet => "Spreadsheets",
        }
    }

    pub const ALL_VARIANTS: [TypeFilter; 6] = [
        Self::All,
        Self::Image,
        Self::Video,
        Self::Audio,
        Self::Pdf,
        Self::Spreadsheet,
    ];
}

/// The combined search/sort/filter selection driving the visible file
/// collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub search_text: String,
    pub sort_key: SortKey,
    pub type_filter: TypeFilter,
}

impl ListingQuery {
    /// Reset to the default query: empty search, newest first, all types.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Query parameters in wire order; values are percent-encoded by the
    /// API layer.
    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            ("search", self.search_text.clone()),
            ("sort", self.sort_key.as_param().to_string()),
            ("filter", self.type_filter.as_param().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = ListingQuery::default();
        assert_eq!(query.search_text, "");
        assert_eq!(query.sort_key, SortKey::CreatedAt);
        assert_eq!(query.type_filter, TypeFilter::All);
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut query = ListingQuery {
            search_text: "vacation".to_string(),
            sort_key: SortKey::Size,
            type_filter: TypeFilter::Video,
        };
        query.clear();
        assert_eq!(query, ListingQuery::default());
    }

    #[test]
    fn test_wire_params() {
        let query = ListingQuery {
            search_text: "q".to_string(),
            sort_key: SortKey::ViewCount,
            type_filter: TypeFilter::Pdf,
        };
        let params = query.params();
        assert_eq!(params[0], ("search", "q".to_string()));
        assert_eq!(params[1], ("sort", "viewCount".to_string()));
        assert_eq!(params[2], ("filter", "pdf".to_string()));
    }

    #[test]
    fn test_all_filter_sends_empty_param() {
        assert_eq!(TypeFilter::All.as_param(), "");
        assert_eq!(TypeFilter::from_param(""), TypeFilter::All);
        assert_eq!(TypeFilter::from_param("all"), TypeFilter::All);
    }

    #[test]
    fn test_param_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_param(key.as_param()), key);
        }
        for filter in TypeFilter::ALL_VARIANTS {
            assert_eq!(TypeFilter::from_param(filter.as_param()), filter);
        }
    }
}
