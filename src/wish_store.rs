use super::*;

/// Storage port for the wish list. Core logic never touches ambient
/// storage directly, only this seam.
pub(crate) trait WishStore {
  fn read(&self) -> Result<Vec<WishItem>>;
  fn write(&self, items: &[WishItem]) -> Result;
}

pub(crate) struct JsonFileStore {
  path: PathBuf,
}

impl JsonFileStore {
  fn ensure_parent_dir(path: &Path) -> Result {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    Ok(())
  }

  pub(crate) fn from_env() -> Result<Self> {
    if let Ok(path) = env::var("REEL_WISHLIST_FILE") {
      return Ok(Self::new(PathBuf::from(path)));
    }

    let base_dir = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".config")
    } else {
      env::current_dir()?.join(".config")
    };

    Ok(Self::new(base_dir.join("reel").join("wishlist.json")))
  }

  pub(crate) fn new(path: PathBuf) -> Self {
    Self { path }
  }
}

impl WishStore for JsonFileStore {
  fn read(&self) -> Result<Vec<WishItem>> {
    if !self.path.exists() {
      return Ok(Vec::new());
    }

    let data = fs::read(&self.path)?;

    if data.is_empty() {
      return Ok(Vec::new());
    }

    Ok(serde_json::from_slice(&data)?)
  }

  fn write(&self, items: &[WishItem]) -> Result {
    Self::ensure_parent_dir(&self.path)?;

    let serialized = serde_json::to_vec_pretty(items)?;

    fs::write(&self.path, serialized)?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::sync::atomic::{AtomicUsize, Ordering};

  static COUNTER: AtomicUsize = AtomicUsize::new(0);

  fn temp_store() -> (JsonFileStore, PathBuf) {
    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);

    let path = env::temp_dir()
      .join(format!("reel_wishlist_test_{unique}"))
      .join("wishlist.json");

    (JsonFileStore::new(path.clone()), path)
  }

  fn sample_item(id: u64) -> WishItem {
    WishItem {
      id,
      poster_path: Some(format!("/poster_{id}.jpg")),
      title: format!("Movie {id}"),
      year: Some("2024".to_string()),
    }
  }

  #[test]
  fn read_returns_empty_when_file_is_absent() {
    let (store, _) = temp_store();

    assert!(store.read().unwrap().is_empty());
  }

  #[test]
  fn write_then_read_round_trips() {
    let (store, path) = temp_store();

    let items = vec![sample_item(1), sample_item(2)];
    store.write(&items).unwrap();

    assert_eq!(store.read().unwrap(), items);

    let _ = fs::remove_file(&path);
  }
}
