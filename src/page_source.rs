use super::*;

/// One remote paged listing, together with everything needed to build the
/// request besides `page` and `language`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PageSource {
  Genre(u64),
  Search(String),
  Trending,
}

impl PageSource {
  pub(crate) fn path(&self) -> &'static str {
    match self {
      Self::Genre(_) => "/discover/movie",
      Self::Search(_) => "/search/movie",
      Self::Trending => "/trending/movie/day",
    }
  }

  pub(crate) fn query(&self, page: u64, language: &str) -> Vec<(&'static str, String)> {
    let mut params = vec![
      ("language", language.to_string()),
      ("page", page.to_string()),
    ];

    match self {
      Self::Genre(genre_id) => {
        params.push(("include_adult", "false".to_string()));
        params.push(("sort_by", "popularity.desc".to_string()));
        params.push(("with_genres", genre_id.to_string()));
      }
      Self::Search(query) => {
        params.push(("include_adult", "false".to_string()));
        params.push(("query", query.clone()));
      }
      Self::Trending => {}
    }

    params
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn discover_request_carries_genre_filter_and_sort() {
    let source = PageSource::Genre(28);

    assert_eq!(source.path(), "/discover/movie");

    let query = source.query(3, "en-US");

    assert!(query.contains(&("with_genres", "28".to_string())));
    assert!(query.contains(&("sort_by", "popularity.desc".to_string())));
    assert!(query.contains(&("include_adult", "false".to_string())));
    assert!(query.contains(&("page", "3".to_string())));
    assert!(query.contains(&("language", "en-US".to_string())));
  }

  #[test]
  fn search_request_carries_the_query_verbatim() {
    let source = PageSource::Search("blade runner".to_string());

    assert_eq!(source.path(), "/search/movie");
    assert!(source.query(1, "es-ES").contains(&("query", "blade runner".to_string())));
  }

  #[test]
  fn trending_request_has_no_extra_parameters() {
    let source = PageSource::Trending;

    assert_eq!(source.path(), "/trending/movie/day");
    assert_eq!(source.query(2, "en-US").len(), 2);
  }
}
