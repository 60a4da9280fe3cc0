use crate::shared::error::ObservesError;
use crate::shared::Result;
use serde::Serialize;

/// One page of an in-memory collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transforms the items while keeping the paging information
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Paginator service for client-side paging of small collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(ObservesError::Validation {
                message: "page size must be at least 1".to_string(),
            }
            .into());
        }
        Ok(Self { page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the requested 1-based page
    ///
    /// Page 0 is treated as page 1. A page past the end is empty but still
    /// carries the totals.
    pub fn paginate<T>(&self, items: Vec<T>, page: usize) -> Page<T> {
        let page = page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(self.page_size);
        let start = (page - 1).saturating_mul(self.page_size);

        let items = items
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();

        Page {
            items,
            page,
            page_size: self.page_size,
            total_items,
            total_pages,
        }
    }
}
