use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FeedUpdate {
  Failed,
  Merged,
  Stale,
}

/// Accumulates movies fetched page by page from one remote source. Items
/// arrive in fetch order and are never deduplicated, matching what TMDB
/// rankings return across adjacent pages.
pub(crate) struct Feed {
  error: Option<String>,
  fetching_more: bool,
  generation: u64,
  items: Vec<Movie>,
  loading: bool,
  pending_page: Option<u64>,
  remote_page: u64,
  total_pages: u64,
}

impl Default for Feed {
  fn default() -> Self {
    Self {
      error: None,
      fetching_more: false,
      generation: 0,
      items: Vec::new(),
      loading: false,
      pending_page: None,
      remote_page: START_PAGE,
      total_pages: 1,
    }
  }
}

impl Feed {
  /// Applies a fetch result. Results whose generation no longer matches
  /// belong to a superseded reset and are dropped without touching state.
  pub(crate) fn apply(
    &mut self,
    generation: u64,
    page: u64,
    result: Result<PageResponse, String>,
  ) -> FeedUpdate {
    if generation != self.generation {
      return FeedUpdate::Stale;
    }

    self.pending_page = None;
    self.loading = false;
    self.fetching_more = false;

    match result {
      Ok(response) => {
        self.error = None;
        self.items.extend(response.results);
        self.remote_page = response.page.unwrap_or(page);

        self.total_pages = response
          .total_pages
          .unwrap_or(self.total_pages)
          .max(self.remote_page);

        FeedUpdate::Merged
      }
      Err(message) => {
        self.error = Some(message);
        FeedUpdate::Failed
      }
    }
  }

  pub(crate) fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  pub(crate) fn fetching_more(&self) -> bool {
    self.fetching_more
  }

  pub(crate) fn has_more(&self) -> bool {
    self.remote_page < self.total_pages
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.loading
  }

  pub(crate) fn items(&self) -> &[Movie] {
    &self.items
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn remote_page(&self) -> u64 {
    self.remote_page
  }

  /// Starts fetching the page after the current one. Returns no ticket
  /// when the source is exhausted or a fetch is already in flight.
  pub(crate) fn request_next(&mut self) -> Option<FetchTicket> {
    if self.pending_page.is_some() || !self.has_more() {
      return None;
    }

    let page = self.remote_page.saturating_add(1);

    self.fetching_more = true;
    self.pending_page = Some(page);

    Some(FetchTicket {
      generation: self.generation,
      page,
    })
  }

  /// Clears everything for a new parameter set and hands out a ticket for
  /// the first page. Any fetch still in flight resolves against the old
  /// generation and is ignored on arrival.
  pub(crate) fn reset(&mut self, start_page: u64) -> FetchTicket {
    self.generation = self.generation.wrapping_add(1);
    self.error = None;
    self.fetching_more = false;
    self.items.clear();
    self.loading = true;
    self.pending_page = Some(start_page);
    self.remote_page = start_page;
    self.total_pages = 1;

    FetchTicket {
      generation: self.generation,
      page: start_page,
    }
  }

  /// Replaces the collection with locally sourced items, used by the wish
  /// list tab which never talks to the network.
  pub(crate) fn set_local(&mut self, items: Vec<Movie>) {
    self.generation = self.generation.wrapping_add(1);
    self.error = None;
    self.fetching_more = false;
    self.items = items;
    self.loading = false;
    self.pending_page = None;
    self.remote_page = START_PAGE;
    self.total_pages = 1;
  }

  pub(crate) fn total_pages(&self) -> u64 {
    self.total_pages
  }
}
