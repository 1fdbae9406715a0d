use super::*;

/// A fixed-size window over a [`Feed`], plus a cursor inside the window.
/// Moving past the last locally known window asks the feed for another
/// remote page and advances by exactly one window once that page merges,
/// however many items it brought.
pub(crate) struct Carousel {
  advance_pending: bool,
  cursor: usize,
  feed: Feed,
  window_index: usize,
  window_size: usize,
}

impl Carousel {
  /// Resolves a fetch issued by this carousel. Window arithmetic runs at
  /// resolution time so a window size changed while the fetch was in
  /// flight is accounted for.
  pub(crate) fn apply_page(
    &mut self,
    generation: u64,
    page: u64,
    result: Result<PageResponse, String>,
  ) -> FeedUpdate {
    let windows_before = self.window_count();

    let update = self.feed.apply(generation, page, result);

    match update {
      FeedUpdate::Merged => {
        if self.advance_pending && self.window_count() > windows_before {
          self.window_index += 1;
          self.cursor = 0;
        }

        self.advance_pending = false;
        self.clamp();
      }
      FeedUpdate::Failed => {
        self.advance_pending = false;
      }
      FeedUpdate::Stale => {}
    }

    update
  }

  pub(crate) fn can_next(&self) -> bool {
    self.window_index + 1 < self.window_count() || self.has_more_remote()
  }

  pub(crate) fn can_prev(&self) -> bool {
    self.window_index > 0
  }

  fn clamp(&mut self) {
    self.window_index = self.window_index.min(self.window_count() - 1);
    self.cursor = self.cursor.min(self.visible().len().saturating_sub(1));
  }

  pub(crate) fn cursor(&self) -> usize {
    self.cursor
  }

  pub(crate) fn error(&self) -> Option<&str> {
    self.feed.error()
  }

  pub(crate) fn fetching_more(&self) -> bool {
    self.feed.fetching_more()
  }

  pub(crate) fn has_more_remote(&self) -> bool {
    self.feed.has_more()
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.feed.is_empty()
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.feed.is_loading()
  }

  pub(crate) fn items(&self) -> &[Movie] {
    self.feed.items()
  }

  pub(crate) fn new(window_size: usize) -> Self {
    Self {
      advance_pending: false,
      cursor: 0,
      feed: Feed::default(),
      window_index: 0,
      window_size: window_size.max(1),
    }
  }

  /// Moves to the next window. Advances immediately when one already
  /// exists locally; otherwise requests the next remote page and leaves
  /// an advance pending that [`Self::apply_page`] applies exactly once.
  pub(crate) fn next(&mut self) -> Option<FetchTicket> {
    if self.window_index + 1 < self.window_count() {
      self.window_index += 1;
      self.cursor = 0;
      return None;
    }

    let ticket = self.feed.request_next();

    if ticket.is_some() {
      self.advance_pending = true;
    }

    ticket
  }

  pub(crate) fn prev(&mut self) {
    if self.can_prev() {
      self.window_index -= 1;
      self.cursor = 0;
    }
  }

  pub(crate) fn remote_page(&self) -> u64 {
    self.feed.remote_page()
  }

  pub(crate) fn reset(&mut self, start_page: u64) -> FetchTicket {
    self.advance_pending = false;
    self.cursor = 0;
    self.window_index = 0;

    self.feed.reset(start_page)
  }

  pub(crate) fn select_first(&mut self) {
    self.cursor = 0;
    self.window_index = 0;
  }

  /// Moves the cursor down one card, rolling over into the next window
  /// at the end of the visible slice.
  pub(crate) fn select_next(&mut self) -> Option<FetchTicket> {
    if self.cursor + 1 < self.visible().len() {
      self.cursor += 1;
      return None;
    }

    self.next()
  }

  pub(crate) fn select_previous(&mut self) {
    if self.cursor > 0 {
      self.cursor -= 1;
    } else if self.can_prev() {
      self.prev();
      self.cursor = self.visible().len().saturating_sub(1);
    }
  }

  pub(crate) fn selected(&self) -> Option<&Movie> {
    self.visible().get(self.cursor)
  }

  pub(crate) fn set_local(&mut self, items: Vec<Movie>) {
    self.advance_pending = false;
    self.feed.set_local(items);
    self.clamp();
  }

  pub(crate) fn set_window_size(&mut self, window_size: usize) {
    self.window_size = window_size.max(1);
    self.clamp();
  }

  pub(crate) fn total_pages(&self) -> u64 {
    self.feed.total_pages()
  }

  pub(crate) fn visible(&self) -> &[Movie] {
    let start = (self.window_index * self.window_size).min(self.feed.len());
    let end = (start + self.window_size).min(self.feed.len());

    &self.feed.items()[start..end]
  }

  pub(crate) fn window_count(&self) -> usize {
    self.feed.len().div_ceil(self.window_size).max(1)
  }

  pub(crate) fn window_index(&self) -> usize {
    self.window_index
  }
}
