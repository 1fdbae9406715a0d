#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CategoryKind {
  Genre(u64),
  Search,
  Trending,
  Wishlist,
}

#[derive(Clone, Copy)]
pub(crate) struct Category {
  pub(crate) kind: CategoryKind,
  pub(crate) label: &'static str,
}

impl Category {
  pub(crate) fn all() -> &'static [Category] {
    &[
      Category {
        label: "trending",
        kind: CategoryKind::Trending,
      },
      Category {
        label: "action",
        kind: CategoryKind::Genre(28),
      },
      Category {
        label: "comedy",
        kind: CategoryKind::Genre(35),
      },
      Category {
        label: "drama",
        kind: CategoryKind::Genre(18),
      },
      Category {
        label: "horror",
        kind: CategoryKind::Genre(27),
      },
      Category {
        label: "sci-fi",
        kind: CategoryKind::Genre(878),
      },
    ]
  }
}
