use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Movie {
  pub(crate) id: u64,
  pub(crate) name: Option<String>,
  pub(crate) overview: Option<String>,
  pub(crate) poster_path: Option<String>,
  pub(crate) release_date: Option<String>,
  pub(crate) title: Option<String>,
  pub(crate) vote_average: Option<f64>,
}

impl From<WishItem> for Movie {
  fn from(item: WishItem) -> Self {
    Self {
      id: item.id,
      name: None,
      overview: None,
      poster_path: item.poster_path,
      release_date: item.year,
      title: Some(item.title),
      vote_average: None,
    }
  }
}

impl Movie {
  pub(crate) fn display_title(&self) -> &str {
    self
      .title
      .as_deref()
      .or(self.name.as_deref())
      .unwrap_or("Untitled")
  }

  pub(crate) fn tmdb_url(&self) -> String {
    format!("{TMDB_MOVIE_URL}/{}", self.id)
  }

  pub(crate) fn year(&self) -> Option<&str> {
    self.release_date.as_deref().and_then(release_year)
  }
}
