use std::ops::Range;

/// Users shown per page.
pub const USERS_PER_PAGE: usize = 15;

/// `ceil(count / page_size)`, never less than one page.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    count.div_ceil(page_size).max(1)
}

/// Clamp a 1-indexed page into `[1, total]`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Slice bounds of `page` within a sequence of `len` items, truncated at the end.
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}
