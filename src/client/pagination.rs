/// One page out of an ordered list.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<'a, T> {
    pub items: &'a [T],
    /// 1-indexed, always within `1..=total_pages`
    pub page: usize,
    pub total_pages: usize,
}

impl<'a, T> Paginated<'a, T> {
    pub fn prev(&self) -> Option<usize> {
        (self.page > 1).then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<usize> {
        (self.page < self.total_pages).then(|| self.page + 1)
    }
}

/// Slices page `requested` out of `items`.
///
/// There is always at least one page, even for an empty list. A page past the
/// end is clamped to the last one.
pub fn paginate<T>(items: &[T], requested: usize, per_page: usize) -> Paginated<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let page = requested.clamp(1, total_pages);

    let start = ((page - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());

    Paginated {
        items: &items[start..end],
        page,
        total_pages,
    }
}
