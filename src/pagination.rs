//! Pagination
//!
//! Splits a list into fixed-size pages and tracks which page is shown.
//! Page size follows the viewport through a breakpoint table.

/// Page size chosen by a breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Fixed(usize),
    /// Every item on a single page
    All,
}

/// Viewport width threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub min_width: u32,
    pub size: PageSize,
}

impl Breakpoint {
    pub const fn new(min_width: u32, size: PageSize) -> Self {
        Self { min_width, size }
    }
}

impl PageSize {
    /// Breakpoint entry for a viewport width.
    ///
    /// The table is ordered widest first; the first entry whose width does not
    /// exceed the viewport wins. Without a match every item goes on one page.
    pub fn for_width(width: u32, table: &[Breakpoint]) -> Self {
        table
            .iter()
            .find(|bp| bp.min_width <= width)
            .map_or(PageSize::All, |bp| bp.size)
    }

    /// Items per page for a list of `total_items`
    pub fn resolve(self, total_items: usize) -> usize {
        match self {
            PageSize::Fixed(n) => n,
            PageSize::All => total_items,
        }
    }
}

/// Partition `items` into consecutive groups of at most `page_size`.
///
/// Always returns at least one page; a size of 0 puts everything on one page.
pub fn partition<T: Clone>(items: &[T], page_size: usize) -> Vec<Vec<T>> {
    if items.is_empty() || page_size == 0 {
        return vec![items.to_vec()];
    }
    items.chunks(page_size).map(<[T]>::to_vec).collect()
}

/// Paged view over a list with wraparound navigation
#[derive(Debug, Clone, PartialEq)]
pub struct Pager<T> {
    pages: Vec<Vec<T>>,
    page_index: usize,
    page_size: usize,
}

impl<T: Clone> Pager<T> {
    pub fn new(items: &[T], page_size: usize) -> Self {
        Self {
            pages: partition(items, page_size),
            page_index: 0,
            page_size,
        }
    }

    /// Re-partition from page 0
    pub fn repartition(&mut self, items: &[T]) {
        self.pages = partition(items, self.page_size);
        self.page_index = 0;
    }

    /// Change the page size; returns whether the pages were rebuilt
    pub fn set_page_size(&mut self, page_size: usize, items: &[T]) -> bool {
        if page_size == self.page_size {
            return false;
        }
        self.page_size = page_size;
        self.repartition(items);
        true
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn current(&self) -> &[T] {
        self.pages.get(self.page_index).map_or(&[], Vec::as_slice)
    }

    /// Arrows are only useful with more than one page
    pub fn has_multiple_pages(&self) -> bool {
        self.pages.len() > 1
    }

    pub fn next(&mut self) {
        self.page_index = if self.page_index + 1 >= self.pages.len() {
            0
        } else {
            self.page_index + 1
        };
    }

    pub fn prev(&mut self) {
        self.page_index = if self.page_index == 0 {
            self.pages.len().saturating_sub(1)
        } else {
            self.page_index - 1
        };
    }
}
