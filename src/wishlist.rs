use super::*;

pub(crate) struct Wishlist {
  ids: HashSet<u64>,
  items: Vec<WishItem>,
  store: Box<dyn WishStore>,
}

impl Wishlist {
  pub(crate) fn contains(&self, id: u64) -> bool {
    self.ids.contains(&id)
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[WishItem] {
    &self.items
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn load(store: Box<dyn WishStore>) -> Result<Self> {
    let items = store.read()?;

    let ids = items.iter().map(|item| item.id).collect::<HashSet<_>>();

    Ok(Self { ids, items, store })
  }

  fn persist(&self) -> Result {
    self.store.write(&self.items)
  }

  pub(crate) fn remove(&mut self, id: u64) -> Result<bool> {
    if let Some(position) = self.items.iter().position(|item| item.id == id) {
      self.items.remove(position);
      self.ids.remove(&id);
      self.persist()?;
      Ok(true)
    } else {
      Ok(false)
    }
  }

  /// Adds the item when absent, removes it when present. Returns whether
  /// the item ended up on the list.
  pub(crate) fn toggle(&mut self, item: &WishItem) -> Result<bool> {
    if self.ids.contains(&item.id) {
      self.remove(item.id)?;
      Ok(false)
    } else {
      self.items.push(item.clone());
      self.ids.insert(item.id);
      self.persist()?;
      Ok(true)
    }
  }
}
