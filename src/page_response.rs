use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct PageResponse {
  pub(crate) page: Option<u64>,
  #[serde(default)]
  pub(crate) results: Vec<Movie>,
  pub(crate) total_pages: Option<u64>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_pagination_fields_deserialize_to_none() {
    let response: PageResponse = serde_json::from_str("{}").unwrap();

    assert!(response.results.is_empty());
    assert_eq!(response.page, None);
    assert_eq!(response.total_pages, None);
  }

  #[test]
  fn tmdb_shape_deserializes() {
    let response: PageResponse = serde_json::from_str(
      r#"{
        "page": 1,
        "results": [
          {
            "genre_ids": [28, 12],
            "id": 603,
            "overview": "A hacker learns the truth.",
            "poster_path": "/matrix.jpg",
            "release_date": "1999-03-30",
            "title": "The Matrix",
            "vote_average": 8.2
          }
        ],
        "total_pages": 42,
        "total_results": 833
      }"#,
    )
    .unwrap();

    assert_eq!(response.page, Some(1));
    assert_eq!(response.total_pages, Some(42));
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].display_title(), "The Matrix");
  }
}
