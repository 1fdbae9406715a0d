use super::*;

pub(crate) struct State {
  active_tab: usize,
  carousels: Vec<Carousel>,
  help: HelpView,
  message: String,
  mode: Mode,
  next_request_id: u64,
  pending_detail: Option<PendingDetail>,
  pending_effects: Vec<Effect>,
  search_input: Option<SearchInput>,
  search_tab_index: Option<usize>,
  tabs: Vec<Tab>,
  transient_message: Option<TransientMessage>,
  viewport_rows: usize,
  wishlist: Wishlist,
  wishlist_tab_index: usize,
}

impl State {
  pub(crate) fn active_carousel(&self) -> &Carousel {
    &self.carousels[self.active_tab]
  }

  fn active_carousel_mut(&mut self) -> &mut Carousel {
    &mut self.carousels[self.active_tab]
  }

  pub(crate) fn active_tab(&self) -> usize {
    self.active_tab
  }

  fn cancel_search(&mut self) {
    if let Some(input) = self.search_input.take() {
      self.message = input.message_backup;
    }
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn close_detail(&mut self) {
    self.mode = Mode::Browse;

    if !self.help.is_visible() {
      self.message = BROWSE_STATUS.into();
    }
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::StartSearch => self.start_search(),
      Command::CancelSearch => self.cancel_search(),
      Command::SubmitSearch => self.submit_search(),
      Command::SwitchTabLeft => self.switch_tab_left(),
      Command::SwitchTabRight => self.switch_tab_right(),
      Command::SelectNext => self.select_next(),
      Command::SelectPrevious => self.select_previous(),
      Command::SelectFirst => self.select_first(),
      Command::NextWindow => self.next_window(),
      Command::PrevWindow => self.prev_window(),
      Command::OpenDetail => self.open_detail(),
      Command::CloseDetail => self.close_detail(),
      Command::OpenInBrowser => self.open_in_browser(),
      Command::ToggleWish => self.toggle_wish()?,
      Command::Reload => self.reload(),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  fn ensure_search_tab(&mut self) -> usize {
    if let Some(index) = self.search_tab_index {
      return index;
    }

    let tab_index = self.tabs.len();

    self.tabs.push(Tab {
      category: Category {
        kind: CategoryKind::Search,
        label: "search",
      },
      query: None,
    });

    self.carousels.push(Carousel::new(DEFAULT_WINDOW_SIZE));
    self.search_tab_index = Some(tab_index);

    tab_index
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::MovieDetail { request_id, result } => {
        let Some(pending) = self.pending_detail.as_ref() else {
          return;
        };

        if pending.request_id != request_id {
          return;
        }

        self.pending_detail = None;

        match result {
          Ok(detail) => {
            let in_wishlist = self.wishlist.contains(detail.id);

            self.mode = Mode::Detail(DetailView::new(detail, in_wishlist));

            if !self.help.is_visible() {
              self.message = DETAIL_STATUS.into();
            }
          }
          Err(error) => {
            if !self.help.is_visible() {
              self.set_transient_message(format!(
                "Could not load movie details: {error}"
              ));
            }
          }
        }
      }
      Event::Page {
        generation,
        page,
        result,
        tab_index,
      } => {
        let Some(carousel) = self.carousels.get_mut(tab_index) else {
          return;
        };

        let had_items = !carousel.is_empty();

        let update = carousel.apply_page(
          generation,
          page,
          result.map_err(|error| error.to_string()),
        );

        match update {
          FeedUpdate::Merged => {
            if !self.help.is_visible() && self.search_input.is_none() {
              self.message = BROWSE_STATUS.into();
            }
          }
          FeedUpdate::Failed => {
            let error = self
              .carousels
              .get(tab_index)
              .and_then(|carousel| carousel.error())
              .unwrap_or("unknown error")
              .to_string();

            if had_items && !self.help.is_visible() {
              self.set_transient_message(format!(
                "Could not load more movies: {error}"
              ));
            }
          }
          FeedUpdate::Stale => {}
        }
      }
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) -> Command {
    if self.search_input.is_none() {
      return Command::None;
    }

    match key.code {
      KeyCode::Esc => Command::CancelSearch,
      KeyCode::Enter => Command::SubmitSearch,
      KeyCode::Backspace => {
        if let Some(input) = self.search_input.as_mut() {
          input.buffer.pop();
        }

        self.update_search_message();

        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Command::None;
        }

        if let Some(input) = self.search_input.as_mut() {
          input.buffer.push(ch);
        }

        self.update_search_message();

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn is_wished(&self, movie_id: u64) -> bool {
    self.wishlist.contains(movie_id)
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  pub(crate) fn new(wishlist: Wishlist) -> Self {
    let mut tabs: Vec<Tab> = Category::all()
      .iter()
      .map(|category| Tab {
        category: *category,
        query: None,
      })
      .collect();

    tabs.push(Tab {
      category: Category {
        kind: CategoryKind::Wishlist,
        label: "wish list",
      },
      query: None,
    });

    let wishlist_tab_index = tabs.len().saturating_sub(1);

    let carousels = tabs
      .iter()
      .map(|_| Carousel::new(DEFAULT_WINDOW_SIZE))
      .collect();

    let mut state = Self {
      active_tab: 0,
      carousels,
      help: HelpView::new(),
      message: BROWSE_STATUS.into(),
      mode: Mode::Browse,
      next_request_id: 0,
      pending_detail: None,
      pending_effects: Vec::new(),
      search_input: None,
      search_tab_index: None,
      tabs,
      transient_message: None,
      viewport_rows: 0,
      wishlist,
      wishlist_tab_index,
    };

    for index in 0..state.tabs.len() {
      state.reset_tab(index);
    }

    state.refresh_wishlist_tab();

    state
  }

  fn next_window(&mut self) {
    if let Some(ticket) = self.active_carousel_mut().next() {
      if !self.help.is_visible() {
        self.message = LOADING_MORE_STATUS.into();
      }

      self.push_fetch(self.active_tab, ticket);
    }
  }

  fn open_detail(&mut self) {
    let Some(movie) = self.active_carousel().selected() else {
      return;
    };

    let movie_id = movie.id;

    if !self.help.is_visible() {
      self.message = LOADING_DETAIL_STATUS.into();
    }

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.pending_detail = Some(PendingDetail { request_id });

    self.pending_effects.push(Effect::FetchMovieDetail {
      movie_id,
      request_id,
    });
  }

  fn open_in_browser(&mut self) {
    let url = match &self.mode {
      Mode::Browse => self.active_carousel().selected().map(Movie::tmdb_url),
      Mode::Detail(view) => Some(view.movie().tmdb_url()),
    };

    if let Some(url) = url {
      self.pending_effects.push(Effect::OpenUrl { url });
    }
  }

  fn prev_window(&mut self) {
    self.active_carousel_mut().prev();
  }

  fn push_fetch(&mut self, tab_index: usize, ticket: FetchTicket) {
    let Some(source) = self.tabs.get(tab_index).and_then(Tab::source) else {
      return;
    };

    self.pending_effects.push(Effect::FetchPage {
      generation: ticket.generation,
      page: ticket.page,
      source,
      tab_index,
    });
  }

  fn refresh_wishlist_tab(&mut self) {
    let movies = self
      .wishlist
      .items()
      .iter()
      .cloned()
      .map(Movie::from)
      .collect();

    if let Some(carousel) = self.carousels.get_mut(self.wishlist_tab_index) {
      carousel.set_local(movies);
    }
  }

  fn reload(&mut self) {
    if self.active_tab == self.wishlist_tab_index {
      self.refresh_wishlist_tab();
      return;
    }

    if !self.help.is_visible() {
      self.message = LOADING_STATUS.into();
    }

    self.reset_tab(self.active_tab);
  }

  fn reset_tab(&mut self, tab_index: usize) {
    let Some(source) = self.tabs.get(tab_index).and_then(Tab::source) else {
      return;
    };

    let Some(carousel) = self.carousels.get_mut(tab_index) else {
      return;
    };

    let ticket = carousel.reset(START_PAGE);

    self.pending_effects.push(Effect::FetchPage {
      generation: ticket.generation,
      page: ticket.page,
      source,
      tab_index,
    });
  }

  pub(crate) fn search_input_command(
    &mut self,
    key: KeyEvent,
  ) -> Option<Command> {
    if self.search_input.is_some() {
      Some(self.handle_search_key(key))
    } else {
      None
    }
  }

  fn select_first(&mut self) {
    self.active_carousel_mut().select_first();
  }

  fn select_next(&mut self) {
    if let Some(ticket) = self.active_carousel_mut().select_next() {
      if !self.help.is_visible() {
        self.message = LOADING_MORE_STATUS.into();
      }

      self.push_fetch(self.active_tab, ticket);
    }
  }

  fn select_previous(&mut self) {
    self.active_carousel_mut().select_previous();
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  pub(crate) fn set_viewport_rows(&mut self, rows: usize) {
    self.viewport_rows = rows;

    let window_size = (rows / CARD_HEIGHT).max(1);

    for carousel in &mut self.carousels {
      carousel.set_window_size(window_size);
    }
  }

  fn start_search(&mut self) {
    if self.search_input.is_some() {
      return;
    }

    let backup = self.message.clone();

    self.search_input = Some(SearchInput::new(backup));

    self.update_search_message();
  }

  fn submit_search(&mut self) {
    let Some(search) = self.search_input.take() else {
      return;
    };

    let query = search.buffer.trim().to_string();

    if query.is_empty() {
      self.message = search.message_backup;
      return;
    }

    if matches!(self.mode, Mode::Detail(_)) {
      self.mode = Mode::Browse;
    }

    let tab_index = self.ensure_search_tab();

    if let Some(tab) = self.tabs.get_mut(tab_index) {
      tab.query = Some(query.clone());
    }

    self.active_tab = tab_index;

    let ticket = self
      .carousels
      .get_mut(tab_index)
      .map(|carousel| carousel.reset(START_PAGE));

    if let Some(ticket) = ticket {
      self.push_fetch(tab_index, ticket);
    }

    self.message = format!("Searching for \"{}\"...", truncate(&query, 40));
  }

  fn switch_tab_left(&mut self) {
    let tab_count = self.tabs.len();

    if tab_count != 0 {
      self.active_tab = (self.active_tab + tab_count - 1) % tab_count;
    }
  }

  fn switch_tab_right(&mut self) {
    let tab_count = self.tabs.len();

    if tab_count != 0 {
      self.active_tab = (self.active_tab + 1) % tab_count;
    }
  }

  pub(crate) fn tab(&self, index: usize) -> Option<&Tab> {
    self.tabs.get(index)
  }

  pub(crate) fn tabs(&self) -> &[Tab] {
    &self.tabs
  }

  pub(crate) fn take_pending_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  fn toggle_wish(&mut self) -> Result {
    let item = match &self.mode {
      Mode::Browse => self.active_carousel().selected().map(WishItem::from),
      Mode::Detail(view) => Some(view.wish_item()),
    };

    let Some(item) = item else {
      return Ok(());
    };

    let added = self.wishlist.toggle(&item)?;

    if let Mode::Detail(view) = &mut self.mode {
      view.set_in_wishlist(added);
    }

    self.refresh_wishlist_tab();

    if !self.help.is_visible() {
      let title = truncate(&item.title, 40);

      let message = if added {
        format!("Added \"{title}\" to the wish list")
      } else {
        format!("Removed \"{title}\" from the wish list")
      };

      self.set_transient_message(message);
    }

    Ok(())
  }

  fn update_search_message(&mut self) {
    if let Some(input) = &self.search_input {
      let prompt = input.prompt();
      self.message = truncate(&prompt, 80);
    }
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }

  pub(crate) fn viewport_rows(&self) -> usize {
    self.viewport_rows
  }

  pub(crate) fn wishlist(&self) -> &Wishlist {
    &self.wishlist
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::cell::RefCell;

  #[derive(Default)]
  struct MemoryStore {
    items: RefCell<Vec<WishItem>>,
  }

  impl WishStore for MemoryStore {
    fn read(&self) -> Result<Vec<WishItem>> {
      Ok(self.items.borrow().clone())
    }

    fn write(&self, items: &[WishItem]) -> Result {
      *self.items.borrow_mut() = items.to_vec();
      Ok(())
    }
  }

  fn movie(id: u64) -> Movie {
    Movie {
      id,
      name: None,
      overview: Some("Synopsis".to_string()),
      poster_path: None,
      release_date: Some("2024-01-01".to_string()),
      title: Some(format!("Movie {id}")),
      vote_average: Some(7.5),
    }
  }

  fn page_response(ids: std::ops::RangeInclusive<u64>, page: u64, total_pages: u64) -> PageResponse {
    PageResponse {
      page: Some(page),
      results: ids.map(movie).collect(),
      total_pages: Some(total_pages),
    }
  }

  fn new_state() -> State {
    let wishlist = Wishlist::load(Box::new(MemoryStore::default())).unwrap();
    State::new(wishlist)
  }

  fn fetch_generation(effects: &[Effect], wanted_tab: usize) -> u64 {
    effects
      .iter()
      .find_map(|effect| match effect {
        Effect::FetchPage {
          generation,
          tab_index,
          ..
        } if *tab_index == wanted_tab => Some(*generation),
        _ => None,
      })
      .expect("fetch effect for tab")
  }

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn startup_issues_one_fetch_per_remote_tab() {
    let mut state = new_state();

    let effects = state.take_pending_effects();

    let fetches = effects
      .iter()
      .filter(|effect| matches!(effect, Effect::FetchPage { page: 1, .. }))
      .count();

    assert_eq!(fetches, Category::all().len());
    assert!(state.active_carousel().is_loading());
  }

  #[test]
  fn reload_supersedes_the_previous_fetch() {
    let mut state = new_state();

    let stale = fetch_generation(&state.take_pending_effects(), 0);

    let dispatch = state.dispatch_command(Command::Reload).unwrap();
    let fresh = fetch_generation(&dispatch.effects, 0);

    state.handle_event(Event::Page {
      generation: stale,
      page: 1,
      result: Ok(page_response(1..=5, 1, 2)),
      tab_index: 0,
    });

    assert!(state.active_carousel().is_empty(), "stale page discarded");

    state.handle_event(Event::Page {
      generation: fresh,
      page: 1,
      result: Ok(page_response(6..=10, 1, 2)),
      tab_index: 0,
    });

    assert_eq!(state.active_carousel().items().len(), 5);
    assert_eq!(state.active_carousel().items()[0].id, 6);
  }

  #[test]
  fn open_detail_emits_fetch_effect_for_the_selected_movie() {
    let mut state = new_state();

    let generation = fetch_generation(&state.take_pending_effects(), 0);

    state.handle_event(Event::Page {
      generation,
      page: 1,
      result: Ok(page_response(1..=5, 1, 1)),
      tab_index: 0,
    });

    let dispatch = state.dispatch_command(Command::OpenDetail).unwrap();

    assert_eq!(dispatch.effects.len(), 1);

    match &dispatch.effects[0] {
      Effect::FetchMovieDetail { movie_id, .. } => assert_eq!(*movie_id, 1),
      _ => panic!("unexpected effect variant"),
    }

    assert_eq!(state.message, LOADING_DETAIL_STATUS);
  }

  #[test]
  fn detail_result_with_unknown_request_id_is_ignored() {
    let mut state = new_state();
    state.take_pending_effects();

    let detail = MovieDetail {
      genres: None,
      id: 603,
      name: None,
      overview: None,
      poster_path: None,
      release_date: None,
      runtime: None,
      tagline: None,
      title: Some("The Matrix".to_string()),
      vote_average: None,
    };

    state.handle_event(Event::MovieDetail {
      request_id: 41,
      result: Ok(detail),
    });

    assert!(matches!(state.mode, Mode::Browse));
  }

  #[test]
  fn submit_search_creates_a_search_tab_and_resets_it() {
    let mut state = new_state();
    state.take_pending_effects();

    let dispatch = state.dispatch_command(Command::StartSearch).unwrap();
    assert!(dispatch.effects.is_empty());
    assert_eq!(state.message, "Search movies: ");

    for ch in "heat".chars() {
      let command = state.search_input_command(key(KeyCode::Char(ch)));
      assert_eq!(command, Some(Command::None));
    }

    let command = state.search_input_command(key(KeyCode::Enter));
    assert_eq!(command, Some(Command::SubmitSearch));

    let dispatch = state.dispatch_command(Command::SubmitSearch).unwrap();

    assert_eq!(dispatch.effects.len(), 1);

    match &dispatch.effects[0] {
      Effect::FetchPage { page, source, .. } => {
        assert_eq!(*page, 1);
        assert_eq!(*source, PageSource::Search("heat".to_string()));
      }
      _ => panic!("unexpected effect variant"),
    }

    let search_tab = state.search_tab_index.unwrap();
    assert_eq!(state.active_tab, search_tab);
    assert!(state.carousels[search_tab].is_loading());
  }

  #[test]
  fn resubmitting_a_search_discards_results_of_the_old_query() {
    let mut state = new_state();
    state.take_pending_effects();

    state.dispatch_command(Command::StartSearch).unwrap();
    state.search_input_command(key(KeyCode::Char('a')));
    let first = state.dispatch_command(Command::SubmitSearch).unwrap();

    let search_tab = state.search_tab_index.unwrap();
    let stale = fetch_generation(&first.effects, search_tab);

    state.dispatch_command(Command::StartSearch).unwrap();
    state.search_input_command(key(KeyCode::Char('b')));
    let second = state.dispatch_command(Command::SubmitSearch).unwrap();
    let fresh = fetch_generation(&second.effects, search_tab);

    state.handle_event(Event::Page {
      generation: stale,
      page: 1,
      result: Ok(page_response(1..=3, 1, 1)),
      tab_index: search_tab,
    });

    assert!(state.carousels[search_tab].is_empty());

    state.handle_event(Event::Page {
      generation: fresh,
      page: 1,
      result: Ok(page_response(4..=6, 1, 1)),
      tab_index: search_tab,
    });

    assert_eq!(state.carousels[search_tab].items().len(), 3);
    assert_eq!(state.carousels[search_tab].items()[0].id, 4);
  }

  #[test]
  fn toggle_wish_persists_and_refreshes_the_wishlist_tab() {
    let mut state = new_state();

    let generation = fetch_generation(&state.take_pending_effects(), 0);

    state.handle_event(Event::Page {
      generation,
      page: 1,
      result: Ok(page_response(1..=5, 1, 1)),
      tab_index: 0,
    });

    state.dispatch_command(Command::ToggleWish).unwrap();

    assert!(state.is_wished(1));
    assert_eq!(state.carousels[state.wishlist_tab_index].items().len(), 1);

    state.dispatch_command(Command::ToggleWish).unwrap();

    assert!(!state.is_wished(1));
    assert!(state.carousels[state.wishlist_tab_index].is_empty());
  }

  #[test]
  fn incremental_failure_keeps_the_window_and_reports_transiently() {
    let mut state = new_state();

    let generation = fetch_generation(&state.take_pending_effects(), 0);

    state.handle_event(Event::Page {
      generation,
      page: 1,
      result: Ok(page_response(1..=5, 1, 2)),
      tab_index: 0,
    });

    let dispatch = state.dispatch_command(Command::NextWindow).unwrap();
    assert_eq!(dispatch.effects.len(), 1);

    state.handle_event(Event::Page {
      generation,
      page: 2,
      result: Err(anyhow::anyhow!("TMDb 503")),
      tab_index: 0,
    });

    assert_eq!(state.active_carousel().items().len(), 5);
    assert_eq!(state.active_carousel().window_index(), 0);
    assert!(state.message.contains("TMDb 503"));
  }
}
