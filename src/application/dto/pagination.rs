use crate::domain::pagination::PageMeta;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Navigation block attached to every paged listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationDto {
    /// Previous page number, absent on the first page.
    pub prev: Option<u32>,
    /// Next page number, absent on the last page.
    pub next: Option<u32>,
    /// Total number of pages.
    pub max: u64,
    /// Total number of matching items.
    pub total: u64,
}

impl From<PageMeta> for PaginationDto {
    fn from(meta: PageMeta) -> Self {
        Self {
            prev: meta.prev,
            next: meta.next,
            max: meta.total_pages,
            total: meta.total,
        }
    }
}
