//! Entity modules for the hiring domain: the job catalog, candidate
//! applications with their review lifecycle, and user accounts.

pub mod applications;
pub mod jobs;
pub mod users;

use serde::{Deserialize, Serialize};

/// Response envelope shared by every list/read operation: the payload plus
/// optional pagination metadata echoed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> Envelope<T> {
    pub fn bare(data: T) -> Self {
        Self { data, meta: None }
    }

    pub fn paged(data: T, meta: Option<PageMeta>) -> Self {
        Self { data, meta }
    }
}

/// One-based page window requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

/// Pagination echo attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

/// Applies an optional page window to an already filtered/sorted list and
/// reports the pre-window total in the echoed metadata.
pub fn paginate<T>(items: Vec<T>, page: Option<PageRequest>) -> (Vec<T>, Option<PageMeta>) {
    let Some(request) = page else {
        return (items, None);
    };

    let total = items.len();
    let page_size = request.page_size.max(1);
    let page_number = request.page.max(1);
    let start = (page_number - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    let window = items.into_iter().skip(start).take(end - start).collect();

    (
        window,
        Some(PageMeta {
            page: page_number,
            page_size,
            total,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_without_request_returns_everything() {
        let (items, meta) = paginate(vec![1, 2, 3], None);
        assert_eq!(items, vec![1, 2, 3]);
        assert!(meta.is_none());
    }

    #[test]
    fn paginate_windows_and_echoes_totals() {
        let (items, meta) = paginate(
            (1..=10).collect(),
            Some(PageRequest {
                page: 2,
                page_size: 4,
            }),
        );
        assert_eq!(items, vec![5, 6, 7, 8]);
        assert_eq!(
            meta,
            Some(PageMeta {
                page: 2,
                page_size: 4,
                total: 10
            })
        );
    }

    #[test]
    fn paginate_clamps_past_the_end() {
        let (items, meta) = paginate(
            vec![1, 2, 3],
            Some(PageRequest {
                page: 5,
                page_size: 2,
            }),
        );
        assert!(items.is_empty());
        assert_eq!(meta.expect("meta echoed").total, 3);
    }
}
