use {super::*, anyhow::bail};

#[derive(Clone)]
pub(crate) struct Client {
  api_key: Option<String>,
  client: reqwest::Client,
  language: String,
  token: Option<String>,
}

impl Client {
  const API_BASE_URL: &str = "https://api.themoviedb.org/3";

  pub(crate) async fn fetch_movie(&self, movie_id: u64) -> Result<MovieDetail> {
    self
      .get(
        &format!("/movie/{movie_id}"),
        &[("language", self.language.clone())],
      )
      .await
  }

  pub(crate) async fn fetch_page(
    &self,
    source: &PageSource,
    page: u64,
  ) -> Result<PageResponse> {
    self
      .get(source.path(), &source.query(page, &self.language))
      .await
  }

  pub(crate) fn from_env() -> Result<Self> {
    let token = env::var("TMDB_API_TOKEN").ok().filter(|v| !v.is_empty());
    let api_key = env::var("TMDB_API_KEY").ok().filter(|v| !v.is_empty());

    if token.is_none() && api_key.is_none() {
      bail!("set TMDB_API_TOKEN or TMDB_API_KEY to reach the TMDB API");
    }

    let language =
      env::var("REEL_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.into());

    Ok(Self {
      api_key,
      client: reqwest::Client::new(),
      language,
      token,
    })
  }

  async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
  where
    T: serde::de::DeserializeOwned,
  {
    let mut request = self
      .client
      .get(format!("{}{path}", Self::API_BASE_URL))
      .query(query);

    if let Some(token) = &self.token {
      request = request.bearer_auth(token);
    } else if let Some(api_key) = &self.api_key {
      request = request.query(&[("api_key", api_key.as_str())]);
    }

    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      bail!("TMDb {status}: {}", truncate(&body, 120));
    }

    Ok(response.json().await?)
  }
}
