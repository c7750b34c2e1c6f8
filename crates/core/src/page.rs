//! Pagination value objects and the slicing engine.

/// Page size used when a caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A request for one page of a result set.
///
/// Construction normalizes out-of-range inputs instead of rejecting them:
/// negative page numbers clamp to 0 and non-positive sizes clamp to 1, so a
/// `PageRequest` always describes a valid slice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    pub fn of(page: i64, size: i64) -> Self {
        Self {
            page: page.max(0) as usize,
            size: size.max(1) as usize,
        }
    }

    /// Zero-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Element offset of the first item on the requested page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A bounded slice of a result set plus the metadata needed to navigate the
/// full set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    total_elements: u64,
    total_pages: usize,
    page: usize,
    size: usize,
}

impl<T> Page<T> {
    /// Slice `items` according to `request`.
    ///
    /// An offset past the end yields an empty page and a partial tail is
    /// truncated, never padded. `total_elements` always reflects the
    /// pre-slice count of `items`.
    pub fn paginate(items: &[T], request: &PageRequest) -> Self
    where
        T: Clone,
    {
        let content: Vec<T> = items
            .iter()
            .skip(request.offset())
            .take(request.size())
            .cloned()
            .collect();
        Self::of(content, items.len() as u64, request)
    }

    /// Assemble a page from already-sliced content and the pre-slice total.
    pub fn of(content: Vec<T>, total_elements: u64, request: &PageRequest) -> Self {
        // request.size() >= 1 by construction, so this is always defined.
        let total_pages = (total_elements as usize).div_ceil(request.size());

        Self {
            content,
            total_elements,
            total_pages,
            page: request.page(),
            size: request.size(),
        }
    }

    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Count of the underlying full result set, before slicing.
    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Zero-based index of this page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Map the content while keeping the page metadata intact.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            page: self.page,
            size: self.size,
        }
    }
}
