#[derive(Debug, thiserror::Error)]
pub enum PaginationError {
    #[error("page must be a positive integer")]
    NonPositivePage,
    #[error("limit must be a positive integer")]
    NonPositiveLimit,
}

/// Validated 1-indexed pagination window. Non-positive values are rejected
/// at construction so the offset and ceiling arithmetic below never divides
/// by zero or produces a negative offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    limit: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Result<Self, PaginationError> {
        if page < 1 {
            return Err(PaginationError::NonPositivePage);
        }
        if limit < 1 {
            return Err(PaginationError::NonPositiveLimit);
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Number of the last page holding any of `total` records. Zero when
    /// the table is empty, so every requested page is past the end then.
    pub fn last_page(&self, total: i64) -> i64 {
        (total + self.limit - 1) / self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_reject_non_positive_page() {
        assert!(matches!(
            Pagination::new(0, 10),
            Err(PaginationError::NonPositivePage)
        ));
        assert!(matches!(
            Pagination::new(-3, 10),
            Err(PaginationError::NonPositivePage)
        ));
    }

    #[test]
    fn should_reject_non_positive_limit() {
        assert!(matches!(
            Pagination::new(1, 0),
            Err(PaginationError::NonPositiveLimit)
        ));
        assert!(matches!(
            Pagination::new(1, -1),
            Err(PaginationError::NonPositiveLimit)
        ));
    }

    #[test]
    fn should_compute_offset_from_page_and_limit() {
        let pagination = Pagination::new(4, 2).unwrap();
        assert_eq!(pagination.offset(), 6);
    }

    #[test]
    fn should_compute_last_page_with_ceiling_division() {
        let pagination = Pagination::new(1, 2).unwrap();
        assert_eq!(pagination.last_page(5), 3);
        assert_eq!(pagination.last_page(4), 2);
        assert_eq!(pagination.last_page(0), 0);
    }

    proptest! {
        #[test]
        fn last_page_covers_all_records(total in 0i64..100_000, limit in 1i64..1_000) {
            let pagination = Pagination::new(1, limit).unwrap();
            let last_page = pagination.last_page(total);
            prop_assert!(last_page * limit >= total);
            if total > 0 {
                prop_assert!((last_page - 1) * limit < total);
            } else {
                prop_assert_eq!(last_page, 0);
            }
        }

        #[test]
        fn in_range_page_slice_is_nonempty_and_at_most_limit(
            total in 1i64..100_000,
            limit in 1i64..1_000,
            page_seed in 1i64..1_000,
        ) {
            let probe = Pagination::new(1, limit).unwrap();
            let last_page = probe.last_page(total);
            let page = 1 + (page_seed - 1) % last_page;
            let pagination = Pagination::new(page, limit).unwrap();
            let slice_len = (total - pagination.offset()).min(limit);
            prop_assert!(slice_len >= 1);
            prop_assert!(slice_len <= limit);
        }
    }
}
