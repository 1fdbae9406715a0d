use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct MovieDetail {
  pub(crate) genres: Option<Vec<Genre>>,
  pub(crate) id: u64,
  pub(crate) name: Option<String>,
  pub(crate) overview: Option<String>,
  pub(crate) poster_path: Option<String>,
  pub(crate) release_date: Option<String>,
  pub(crate) runtime: Option<u64>,
  pub(crate) tagline: Option<String>,
  pub(crate) title: Option<String>,
  pub(crate) vote_average: Option<f64>,
}

impl MovieDetail {
  pub(crate) fn display_title(&self) -> &str {
    self
      .title
      .as_deref()
      .or(self.name.as_deref())
      .unwrap_or("Untitled")
  }

  pub(crate) fn genre_names(&self) -> Vec<&str> {
    self
      .genres
      .as_deref()
      .unwrap_or_default()
      .iter()
      .map(|genre| genre.name.as_str())
      .collect()
  }

  pub(crate) fn tmdb_url(&self) -> String {
    format!("{TMDB_MOVIE_URL}/{}", self.id)
  }

  pub(crate) fn year(&self) -> Option<&str> {
    self.release_date.as_deref().and_then(release_year)
  }
}
