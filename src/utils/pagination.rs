use serde::Serialize;

pub const DEFAULT_PER_PAGE: u32 = 25;

#[derive(Serialize, Clone, Debug)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PaginatedMeta,
}

#[derive(Serialize, Clone, Debug)]
pub struct PaginatedMeta {
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
}

impl PaginatedMeta {
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u32, page: u32, per_page: u32) -> Paginated<T> {
        Self {
            items,
            meta: PaginatedMeta {
                total,
                page,
                per_page,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// The given 1-based page at the default page size.
    pub fn page(page: u32) -> Self {
        Self {
            page,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }

    pub fn offset(&self) -> i64 {
        (self.page.saturating_sub(1) as i64) * self.per_page as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_offsets_from_one_based_pages() {
        let pagination = Pagination {
            page: 3,
            per_page: 25,
        };
        assert_eq!(pagination.limit(), 25);
        assert_eq!(pagination.offset(), 50);
        assert_eq!(Pagination::default().offset(), 0);
    }

    #[test]
    fn rounds_total_pages_up() {
        let paginated = Paginated::new(vec![1, 2], 51, 1, 25);
        assert_eq!(paginated.meta.total_pages(), 3);
        assert_eq!(Paginated::<u8>::new(vec![], 0, 1, 25).meta.total_pages(), 0);
        assert_eq!(Paginated::<u8>::new(vec![], 25, 1, 25).meta.total_pages(), 1);
    }

    #[test]
    fn page_zero_starts_at_the_beginning() {
        assert_eq!(Pagination::page(0).offset(), 0);
        assert_eq!(Pagination::page(2).offset(), 25);
    }
}
