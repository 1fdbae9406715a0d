use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub(crate) struct WishItem {
  pub(crate) id: u64,
  pub(crate) poster_path: Option<String>,
  pub(crate) title: String,
  pub(crate) year: Option<String>,
}

impl From<&Movie> for WishItem {
  fn from(movie: &Movie) -> Self {
    Self {
      id: movie.id,
      poster_path: movie.poster_path.clone(),
      title: movie.display_title().to_string(),
      year: movie.year().map(str::to_string),
    }
  }
}

impl From<&MovieDetail> for WishItem {
  fn from(detail: &MovieDetail) -> Self {
    Self {
      id: detail.id,
      poster_path: detail.poster_path.clone(),
      title: detail.display_title().to_string(),
      year: detail.year().map(str::to_string),
    }
  }
}
