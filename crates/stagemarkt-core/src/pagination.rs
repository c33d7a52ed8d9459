//! Page walking for the paginated search endpoints
//!
//! The paginator holds no I/O. The client asks it which page to fetch
//! next, hands it every decoded page and stops once it reports done.

use crate::models::SearchPage;

/// Largest page the search endpoints accept
pub const MAX_PAGE_SIZE: usize = 20;

/// Collects items across result pages up to an optional limit
#[derive(Debug)]
pub struct Paginator<T> {
    limit: Option<usize>,
    page_size: usize,
    current_page: u32,
    done: bool,
    items: Vec<T>,
}

impl<T> Paginator<T> {
    /// Create a paginator
    ///
    /// # Arguments
    /// * `limit` - Maximum number of items; `None` walks every page, `Some(0)` counts as one
    /// * `max_page_size` - Upper bound for the page size, itself capped at [`MAX_PAGE_SIZE`]
    pub fn new(limit: Option<usize>, max_page_size: usize) -> Self {
        let limit = limit.map(|l| l.max(1));
        let max_page_size = max_page_size.clamp(1, MAX_PAGE_SIZE);
        let page_size = limit.unwrap_or(max_page_size).clamp(1, max_page_size);
        Self {
            limit,
            page_size,
            current_page: 1,
            done: false,
            items: Vec::new(),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 1-based number of the page to fetch next, `None` once finished
    pub fn next_page(&self) -> Option<u32> {
        (!self.done).then_some(self.current_page)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn collected(&self) -> usize {
        self.items.len()
    }

    /// Take in a fetched page
    ///
    /// # Returns
    /// `true` when another page should be fetched
    pub fn absorb(&mut self, page: SearchPage<T>) -> bool {
        if self.done {
            return false;
        }
        if page.items.is_empty() {
            self.done = true;
            return false;
        }

        self.items.extend(page.items);

        if let Some(limit) = self.limit
            && self.items.len() >= limit
        {
            self.items.truncate(limit);
            self.done = true;
            return false;
        }

        let has_more = page
            .has_next_page
            .unwrap_or(self.current_page < page.total_pages);
        if has_more {
            self.current_page += 1;
        } else {
            self.done = true;
        }
        has_more
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
