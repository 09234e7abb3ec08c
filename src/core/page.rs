//! List-query parameters, normalization and pagination utilities

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;

/// Raw, partially-specified listing parameters.
///
/// This is the shape extracted from URL query strings before normalization.
/// Every field is optional; [`PageInput::normalize`] substitutes defaults.
///
/// # Example
/// ```rust,ignore
/// // In handler:
/// pub async fn list_employees(
///     Query(params): Query<ListParams>,
/// ) -> Json<PaginatedResponse<EmployeeOutput>> {
///     let output = service.list(params).await?;
///     ...
/// }
///
/// // Usage:
/// GET /employees?page=2&per_page=10
/// GET /employees?filter=welder&sort=full_name&sort_dir=desc
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListParams {
    /// Page number (starts at 1)
    pub page: Option<u32>,

    /// Number of items per page
    pub per_page: Option<u32>,

    /// Sort field name
    pub sort: Option<String>,

    /// Sort direction: "asc" or "desc"
    pub sort_dir: Option<String>,

    /// Free-text filter, passed through verbatim to the store
    pub filter: Option<String>,
}

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    /// Parse a raw direction string, case-insensitively.
    ///
    /// Anything other than "asc"/"desc" falls back to `Asc`; the same
    /// substitute-default policy applied to every other list parameter.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("desc") => SortDir::Desc,
            _ => SortDir::Asc,
        }
    }
}

/// Canonical paging/sorting/filtering request consumed by every store.
///
/// Produced by [`PageInput::normalize`]; always valid by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInput {
    /// Page number, >= 1
    pub page: u32,

    /// Page size, 1..=max_per_page
    pub per_page: u32,

    /// Sort field; `None` means natural order (created_at asc, id asc ties)
    pub sort: Option<String>,

    /// Sort direction
    pub sort_dir: SortDir,

    /// Opaque free-text filter
    pub filter: Option<String>,
}

impl PageInput {
    /// Normalize raw parameters using the default pagination bounds.
    ///
    /// Pure and total: every input produces a valid `PageInput`.
    pub fn normalize(raw: ListParams) -> Self {
        Self::normalize_with(raw, &PaginationConfig::default())
    }

    /// Normalize raw parameters against explicit pagination bounds.
    pub fn normalize_with(raw: ListParams, config: &PaginationConfig) -> Self {
        let page = raw.page.filter(|p| *p >= 1).unwrap_or(1);
        let per_page = raw
            .per_page
            .filter(|p| *p >= 1)
            .unwrap_or(config.default_per_page)
            .min(config.max_per_page);

        Self {
            page,
            per_page,
            sort: raw.sort.filter(|s| !s.is_empty()),
            sort_dir: SortDir::parse_or_default(raw.sort_dir.as_deref()),
            filter: raw.filter.filter(|f| !f.is_empty()),
        }
    }

    /// Zero-based index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.per_page as usize
    }
}

/// One page of store results.
///
/// `total` counts all records matching the filter, ignoring the page
/// window, so callers can compute page counts.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub total: usize,
    pub items: Vec<T>,
}

/// Paginated response structure wrapping mapped output shapes
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The page of mapped items
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Map a store page through an output mapper, keeping the metadata.
    pub fn from_page<E>(page: Page<E>, input: &PageInput, map: impl FnMut(E) -> T) -> Self {
        let meta = PaginationMeta::new(input.page, input.per_page, page.total);
        Self {
            data: page.items.into_iter().map(map).collect(),
            pagination: meta,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: u32,

    /// Number of items per page
    pub per_page: u32,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: u32, per_page: u32, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(per_page as usize)
        };
        let start = (page as usize - 1) * per_page as usize;

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: (start + per_page as usize) < total,
            has_prev: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_empty_input_yields_defaults() {
        let input = PageInput::normalize(ListParams::default());
        assert_eq!(input.page, 1);
        assert_eq!(input.per_page, 10);
        assert_eq!(input.sort, None);
        assert_eq!(input.sort_dir, SortDir::Asc);
        assert_eq!(input.filter, None);
    }

    #[test]
    fn normalize_substitutes_out_of_range_values() {
        let input = PageInput::normalize(ListParams {
            page: Some(0),
            per_page: Some(0),
            ..Default::default()
        });
        assert_eq!(input.page, 1);
        assert_eq!(input.per_page, 10);
    }

    #[test]
    fn per_page_is_clamped_to_upper_bound() {
        let input = PageInput::normalize(ListParams {
            per_page: Some(10_000),
            ..Default::default()
        });
        assert_eq!(input.per_page, 100);
    }

    #[test]
    fn sort_dir_falls_back_to_asc_on_garbage() {
        assert_eq!(SortDir::parse_or_default(Some("DESC")), SortDir::Desc);
        assert_eq!(SortDir::parse_or_default(Some("upward")), SortDir::Asc);
        assert_eq!(SortDir::parse_or_default(None), SortDir::Asc);
    }

    #[test]
    fn offset_reflects_page_window() {
        let input = PageInput::normalize(ListParams {
            page: Some(3),
            per_page: Some(25),
            ..Default::default()
        });
        assert_eq!(input.offset(), 50);
    }

    #[test]
    fn pagination_meta_page_counts() {
        let meta = PaginationMeta::new(1, 10, 45);
        assert_eq!(meta.total_pages, 5);
        assert!(meta.has_next);
        assert!(!meta.has_prev);

        let last = PaginationMeta::new(5, 10, 45);
        assert!(!last.has_next);
        assert!(last.has_prev);
    }

    #[test]
    fn pagination_meta_empty_collection() {
        let meta = PaginationMeta::new(1, 10, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
    }
}
