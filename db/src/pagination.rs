//! Offset pagination over an ordered, filtered query.
//!
//! The source query is never materialized in full: the paginator issues one
//! COUNT and one LIMIT/OFFSET fetch for the requested slice.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, Select};

/// One page of a larger ordered result set, plus paging metadata.
#[derive(Debug, Clone)]
pub struct PaginatedList<T> {
    pub items: Vec<T>,
    /// 1-based page number.
    pub page_index: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> PaginatedList<T> {
    pub fn new(items: Vec<T>, total_items: u64, page_index: u64, page_size: u64) -> Self {
        let total_pages = total_items.div_ceil(page_size);
        Self {
            items,
            page_index,
            page_size,
            total_items,
            total_pages,
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page_index < self.total_pages
    }
}

/// Fetches page `page` (1-based; values below 1 are treated as 1) of `select`
/// with `page_size` items per page. Sorting and filtering must already be
/// applied to `select`.
pub async fn paginate<C, E>(
    db: &C,
    select: Select<E>,
    page: i32,
    page_size: u64,
) -> Result<PaginatedList<E::Model>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
{
    let page = page.max(1) as u64;
    let paginator = select.paginate(db, page_size);
    let total_items = paginator.num_items().await?;
    let items = paginator.fetch_page(page - 1).await?;
    Ok(PaginatedList::new(items, total_items, page, page_size))
}
