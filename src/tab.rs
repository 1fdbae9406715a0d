use super::*;

pub(crate) struct Tab {
  pub(crate) category: Category,
  pub(crate) query: Option<String>,
}

impl Tab {
  /// The remote listing behind this tab, if any. The search tab has no
  /// source until a query is submitted, and the wish list tab never has
  /// one.
  pub(crate) fn source(&self) -> Option<PageSource> {
    match self.category.kind {
      CategoryKind::Genre(genre_id) => Some(PageSource::Genre(genre_id)),
      CategoryKind::Search => self.query.clone().map(PageSource::Search),
      CategoryKind::Trending => Some(PageSource::Trending),
      CategoryKind::Wishlist => None,
    }
  }
}
