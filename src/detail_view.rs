use super::*;

pub(crate) struct DetailView {
  in_wishlist: bool,
  movie: MovieDetail,
  scroll: u16,
}

impl DetailView {
  pub(crate) fn clamp_scroll(&mut self, max: u16) {
    self.scroll = self.scroll.min(max);
  }

  pub(crate) fn in_wishlist(&self) -> bool {
    self.in_wishlist
  }

  pub(crate) fn movie(&self) -> &MovieDetail {
    &self.movie
  }

  pub(crate) fn new(movie: MovieDetail, in_wishlist: bool) -> Self {
    Self {
      in_wishlist,
      movie,
      scroll: 0,
    }
  }

  pub(crate) fn scroll(&self) -> u16 {
    self.scroll
  }

  pub(crate) fn scroll_down(&mut self, lines: u16) {
    self.scroll = self.scroll.saturating_add(lines);
  }

  pub(crate) fn scroll_up(&mut self, lines: u16) {
    self.scroll = self.scroll.saturating_sub(lines);
  }

  pub(crate) fn set_in_wishlist(&mut self, in_wishlist: bool) {
    self.in_wishlist = in_wishlist;
  }

  pub(crate) fn wish_item(&self) -> WishItem {
    WishItem::from(&self.movie)
  }
}
