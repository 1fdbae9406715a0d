use super::*;

pub(crate) enum Event {
  MovieDetail {
    request_id: u64,
    result: Result<MovieDetail>,
  },
  Page {
    generation: u64,
    page: u64,
    result: Result<PageResponse>,
    tab_index: usize,
  },
}
