use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Genre {
  #[allow(dead_code)]
  pub(crate) id: u64,
  pub(crate) name: String,
}
