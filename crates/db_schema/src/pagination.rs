use serde::Serialize;

/// Fixed page size for every listing.
pub const POSTS_PER_PAGE: i64 = 10;

/// Parses the untrusted `page` query parameter. Anything that isn't a number
/// is treated as absent; range handling happens in [resolve_page].
pub fn parse_page(raw: Option<&str>) -> Option<i64> {
  raw.and_then(|r| r.trim().parse::<i64>().ok())
}

/// One resolved page of a listing: which slice to fetch and the metadata the
/// renderer needs for previous/next navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
  pub number: i64,
  pub total_pages: i64,
  pub total_items: i64,
  pub per_page: i64,
  pub has_previous: bool,
  pub has_next: bool,
}

impl PageMeta {
  pub fn limit(&self) -> i64 {
    self.per_page
  }

  pub fn offset(&self) -> i64 {
    self.per_page * (self.number - 1)
  }
}

/// Resolves a requested page number against the collection size, failing
/// open: a missing or non-numeric request lands on the first page, a numeric
/// request outside the valid range (zero, negative, past the end) lands on
/// the last. An empty collection resolves to a single empty page. Pure; no
/// error path.
pub fn resolve_page(requested: Option<i64>, total_items: i64, per_page: i64) -> PageMeta {
  let total_items = total_items.max(0);
  let total_pages = ((total_items + per_page - 1) / per_page).max(1);
  let number = match requested {
    None => 1,
    Some(n) if (1..=total_pages).contains(&n) => n,
    Some(_) => total_pages,
  };
  PageMeta {
    number,
    total_pages,
    total_items,
    per_page,
    has_previous: number > 1,
    has_next: number < total_pages,
  }
}

/// A page of items plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paged<T> {
  pub items: Vec<T>,
  pub page: PageMeta,
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_parse_page() {
    assert_eq!(parse_page(None), None);
    assert_eq!(parse_page(Some("")), None);
    assert_eq!(parse_page(Some("abc")), None);
    assert_eq!(parse_page(Some("2")), Some(2));
    assert_eq!(parse_page(Some(" 3 ")), Some(3));
    assert_eq!(parse_page(Some("-1")), Some(-1));
  }

  #[test]
  fn test_resolve_sends_a_missing_request_to_the_first_page() {
    let page = resolve_page(None, 13, POSTS_PER_PAGE);
    assert_eq!(page.number, 1);
    assert_eq!(page.offset(), 0);
  }

  #[test]
  fn test_resolve_sends_numeric_out_of_range_to_the_last_page() {
    for requested in [Some(0), Some(-5), Some(99)] {
      let page = resolve_page(requested, 13, POSTS_PER_PAGE);
      assert_eq!(page.number, 2);
      assert_eq!(page.total_pages, 2);
      assert!(!page.has_next);
      assert!(page.has_previous);
    }
  }

  #[test]
  fn test_thirteen_items_second_page_holds_three() {
    let page = resolve_page(Some(2), 13, POSTS_PER_PAGE);
    assert_eq!(page.limit(), 10);
    assert_eq!(page.offset(), 10);
    // 3 items remain past the offset
    assert_eq!(page.total_items - page.offset(), 3);
  }

  #[test]
  fn test_exact_multiple_fills_the_last_page() {
    let page = resolve_page(Some(2), 20, POSTS_PER_PAGE);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.total_items - page.offset(), 10);
  }

  #[test]
  fn test_empty_collection_is_one_empty_page() {
    let page = resolve_page(None, 0, POSTS_PER_PAGE);
    assert_eq!(page.number, 1);
    assert_eq!(page.total_pages, 1);
    assert!(!page.has_previous);
    assert!(!page.has_next);
  }

  #[test]
  fn test_first_page_holds_at_most_per_page() {
    let page = resolve_page(Some(1), 7, POSTS_PER_PAGE);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.total_items.min(page.limit()), 7);
  }
}
