//! Fixed-size windowing over ordered result sets. Every request recomputes
//! the window against the live record count; there is no cursor state.

#[derive(Debug, PartialEq, Eq)]
pub struct Window {
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PageOutOfRange;

/// The `LIMIT`/`OFFSET` pair for 1-based page `page` over `total` records.
/// Pages below 1 and empty pages past the first are out of range; page 1
/// over an empty set yields an empty window rather than an error.
pub fn page_window(page: i64, page_size: i64, total: i64) -> Result<Window, PageOutOfRange> {
    if page < 1 {
        return Err(PageOutOfRange);
    }
    let offset = (page - 1).checked_mul(page_size).ok_or(PageOutOfRange)?;
    if page > 1 && offset >= total {
        return Err(PageOutOfRange);
    }
    Ok(Window {
        limit: page_size,
        offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(
            page_window(1, 10, 25),
            Ok(Window {
                limit: 10,
                offset: 0
            })
        );
    }

    #[test]
    fn later_pages_advance_by_page_size() {
        assert_eq!(
            page_window(3, 10, 25),
            Ok(Window {
                limit: 10,
                offset: 20
            })
        );
    }

    #[test]
    fn page_past_the_end_is_out_of_range() {
        assert_eq!(page_window(4, 10, 25), Err(PageOutOfRange));
        assert_eq!(page_window(2, 10, 10), Err(PageOutOfRange));
    }

    #[test]
    fn page_zero_and_below_are_out_of_range() {
        assert_eq!(page_window(0, 10, 25), Err(PageOutOfRange));
        assert_eq!(page_window(-1, 10, 25), Err(PageOutOfRange));
    }

    #[test]
    fn first_page_over_empty_set_is_allowed() {
        assert_eq!(
            page_window(1, 10, 0),
            Ok(Window {
                limit: 10,
                offset: 0
            })
        );
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        assert_eq!(page_window(i64::MAX, 10, 25), Err(PageOutOfRange));
    }
}
