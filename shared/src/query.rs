//! List query and paginated response types

use serde::{Deserialize, Serialize};

use crate::table::{PAGE_SIZE, clamp_page, filter_rows, page_count, page_slice};

/// Query string of list endpoints: `?search=..&page=..`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// 1-based page; omitted means the whole filtered list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ListQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            page: None,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Filter and page `rows` with the table algorithm
    pub fn apply<T: Serialize + Clone>(&self, rows: &[T]) -> PaginatedResponse<T> {
        let filtered = filter_rows(rows, self.search.as_deref().unwrap_or_default());
        match self.page {
            None => PaginatedResponse::single_page(filtered.into_iter().cloned().collect()),
            Some(page) => {
                let total = filtered.len();
                let page = clamp_page(page as usize, page_count(total));
                let data = page_slice(&filtered, page).iter().map(|r| (*r).clone()).collect();
                PaginatedResponse::new(data, total as u64, page as u32, PAGE_SIZE as u32)
            }
        }
    }
}

/// Paginated response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    /// 1-based
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 { total.div_ceil(limit as u64) as u32 } else { 1 };

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Single-page response (unpaged listing)
    pub fn single_page(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self {
            data,
            total,
            page: 1,
            limit: total as u32,
            total_pages: 1,
        }
    }
}
