// src/domain/pagination.rs
//! Offset pagination shared by recipe and pending-user listings.

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        let limit = if limit == 0 { DEFAULT_PAGE_SIZE } else { limit };
        Self {
            page: page.max(1),
            limit,
        }
    }

    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let limit = parse_positive(limit).unwrap_or(DEFAULT_PAGE_SIZE);
        Self::new(page, limit)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    let value = raw?.trim().parse::<i64>().ok()?;
    if value < 1 {
        return None;
    }
    Some(u32::try_from(value).unwrap_or(u32::MAX))
}

/// Position of one page relative to the full filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub prev: Option<u32>,
    pub next: Option<u32>,
    pub total_pages: u64,
    pub total: u64,
}

impl PageMeta {
    pub fn new(request: PageRequest, total: u64) -> Self {
        let page = request.page();
        let limit = request.limit();
        let reached = u64::from(page) * u64::from(limit);
        Self {
            page,
            limit,
            prev: (page > 1).then(|| page - 1),
            next: (reached < total).then(|| page.saturating_add(1)),
            total_pages: total.div_ceil(u64::from(limit)),
            total,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, meta: PageMeta) -> Self {
        Self { items, meta }
    }
}
