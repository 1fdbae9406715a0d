use super::*;

#[derive(Clone)]
pub(crate) enum Effect {
  FetchMovieDetail {
    movie_id: u64,
    request_id: u64,
  },
  FetchPage {
    generation: u64,
    page: u64,
    source: PageSource,
    tab_index: usize,
  },
  OpenUrl {
    url: String,
  },
}
