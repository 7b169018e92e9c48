//! Offset-cursor to page-number mapping.
//!
//! The host speaks an offset-based cursor protocol; the site speaks 1-based
//! `page=` query parameters with a fixed 20 results per page. The mapping is
//! stateless: `page = offset / 20 + 1`. Callers are expected to advance the
//! offset in multiples of 20; non-aligned offsets land on the page that
//! contains them.

use crate::models::PageInfo;

/// Results per listing page on the site. Fixed by the site, not negotiable.
pub const RESULTS_PER_PAGE: u32 = 20;

/// Map an offset cursor to the site's 1-based page number.
pub fn to_page_param(offset: u64) -> u64 {
    offset / u64::from(RESULTS_PER_PAGE) + 1
}

/// Build the pagination envelope for a listing fetched at `offset`.
pub fn build_page_info(offset: u64) -> PageInfo {
    PageInfo {
        results_per_page: RESULTS_PER_PAGE,
        offset,
        next_page: to_page_param(offset).to_string(),
    }
}
