/// Fixed number of records shown per listing page.
pub const PAGE_SIZE: i64 = 25;

/// A validated, 1-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    page: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageParams {
    /// Clamps anything below 1 to the first page.
    pub fn new(page: i64) -> Self {
        Self { page: page.max(1) }
    }

    /// Parse the raw `pagina` query value. Missing, non-numeric and
    /// non-positive values all select the first page.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok()).map(Self::new).unwrap_or_default()
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    /// SQL OFFSET for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(PAGE_SIZE)
    }
}

/// One page of results plus the metadata the listing template needs.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub previous_page: Option<i64>,
    pub next_page: Option<i64>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, params: PageParams, total_items: i64) -> Self {
        let page_size = params.limit();
        let total_pages = (total_items + page_size - 1) / page_size;
        let page = params.page();

        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            previous_page: (page > 1).then(|| page - 1),
            next_page: (page < total_pages).then(|| page + 1),
        }
    }
}
