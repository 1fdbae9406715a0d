use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_viewport_rows(layout[1].height as usize);

    let tab_titles: Vec<Line> = self
      .state
      .tabs()
      .iter()
      .map(|tab| Line::from(tab.category.label.to_uppercase()))
      .collect();

    let tabs_widget = Tabs::new(tab_titles)
      .select(self.state.active_tab())
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(tabs_widget, layout[0]);

    if layout[0].height > 1 {
      if let Some(line) = self.position_line() {
        let area =
          Rect::new(layout[0].x, layout[0].y + 1, layout[0].width, 1);

        let position = Paragraph::new(line)
          .style(Style::default().fg(Color::DarkGray));

        frame.render_widget(position, area);
      }
    }

    if matches!(self.state.mode(), Mode::Detail(_)) {
      if let Mode::Detail(view) = self.state.mode_mut() {
        Self::draw_detail(frame, layout[1], view);
      }
    } else {
      self.draw_browse(frame, layout[1]);
    }

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn draw_browse(&self, frame: &mut Frame, area: Rect) {
    let carousel = self.state.active_carousel();

    let kind = self
      .state
      .tab(self.state.active_tab())
      .map(|tab| tab.category.kind);

    let list_items: Vec<ListItem> = if carousel.is_loading() {
      vec![placeholder_item(LOADING_STATUS)]
    } else if carousel.is_empty() && carousel.error().is_some() {
      let error = carousel.error().unwrap_or_default();

      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          format!("Error: {error}"),
          Style::default().fg(Color::Red),
        ),
      ]))]
    } else if carousel.visible().is_empty() {
      let text = match kind {
        Some(CategoryKind::Search) => "No results yet. Try another query.",
        Some(CategoryKind::Wishlist) => {
          "Your wish list is empty. Press w on a movie to save it."
        }
        _ => "No movies to show.",
      };

      vec![placeholder_item(text)]
    } else {
      carousel
        .visible()
        .iter()
        .map(|movie| self.movie_card(movie))
        .collect()
    };

    let selected = if carousel.visible().is_empty() {
      None
    } else {
      Some(carousel.cursor())
    };

    let mut list_state = ListState::default().with_selected(selected);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, area, &mut list_state);
  }

  fn draw_detail(frame: &mut Frame, area: Rect, view: &mut DetailView) {
    let movie = view.movie();

    let mut meta = Vec::new();

    if let Some(year) = movie.year() {
      meta.push(year.to_string());
    }

    meta.push(format_rating(movie.vote_average));

    if let Some(runtime) = movie.runtime {
      meta.push(format!("{runtime} min"));
    }

    let mut lines = vec![
      Line::from(Span::styled(
        movie.display_title().to_string(),
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )),
      Line::from(Span::styled(
        meta.join(" · "),
        Style::default().fg(Color::DarkGray),
      )),
    ];

    let genres = movie.genre_names().join(", ");

    if !genres.is_empty() {
      lines.push(Line::from(Span::styled(
        genres,
        Style::default().fg(Color::DarkGray),
      )));
    }

    if let Some(tagline) = movie.tagline.as_deref().filter(|t| !t.is_empty()) {
      lines.push(Line::default());

      lines.push(Line::from(Span::styled(
        tagline.to_string(),
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::ITALIC),
      )));
    }

    if let Some(overview) = movie.overview.as_deref().filter(|o| !o.is_empty())
    {
      lines.push(Line::default());
      lines.push(Line::from(Span::raw(overview.to_string())));
    }

    lines.push(Line::default());

    let wish_line = if view.in_wishlist() {
      "♥ on your wish list (w to remove)"
    } else {
      "press w to add to your wish list"
    };

    lines.push(Line::from(Span::styled(
      wish_line,
      Style::default().fg(Color::DarkGray),
    )));

    let max_scroll =
      u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_sub(1);

    view.clamp_scroll(max_scroll);

    let paragraph = Paragraph::new(lines)
      .wrap(Wrap { trim: true })
      .scroll((view.scroll(), 0));

    frame.render_widget(paragraph, area);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchMovieDetail {
        movie_id,
        request_id,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::MovieDetail {
            request_id,
            result: client.fetch_movie(movie_id).await,
          });
        });
      }
      Effect::FetchPage {
        generation,
        page,
        source,
        tab_index,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::Page {
            generation,
            page,
            result: client.fetch_page(&source, page).await,
            tab_index,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  fn movie_card(&self, movie: &Movie) -> ListItem {
    let marker = if self.state.is_wished(movie.id) {
      "♥ "
    } else {
      ""
    };

    let mut detail = Vec::new();

    if let Some(year) = movie.year() {
      detail.push(year.to_string());
    }

    detail.push(format_rating(movie.vote_average));

    ListItem::new(vec![
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          format!("{marker}{}", movie.display_title()),
          Style::default().fg(Color::White),
        ),
      ]),
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          detail.join(" · "),
          Style::default().fg(Color::DarkGray),
        ),
      ]),
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          movie
            .overview
            .as_deref()
            .map(|overview| truncate(overview, 100))
            .unwrap_or_default(),
          Style::default().fg(Color::DarkGray),
        ),
      ]),
    ])
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn position_line(&self) -> Option<String> {
    let kind = self
      .state
      .tab(self.state.active_tab())
      .map(|tab| tab.category.kind)?;

    if kind == CategoryKind::Wishlist {
      let wishlist = self.state.wishlist();

      if wishlist.is_empty() {
        return None;
      }

      return Some(format!("{} saved", wishlist.len()));
    }

    let carousel = self.state.active_carousel();

    if carousel.is_loading() || carousel.is_empty() {
      return None;
    }

    let left = if carousel.can_prev() { "‹ " } else { "" };
    let right = if carousel.can_next() { " ›" } else { "" };

    let progress = if carousel.fetching_more() {
      " · loading"
    } else {
      ""
    };

    Some(format!(
      "{left}slide {}/{} · page {}/{}{progress}{right}",
      carousel.window_index() + 1,
      carousel.window_count(),
      carousel.remote_page(),
      carousel.total_pages(),
    ))
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    for effect in self.state.take_pending_effects() {
      self.execute_effect(effect);
    }

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        self.process_pending_events();
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        self.process_pending_events();
        continue;
      };

      if key.kind != KeyEventKind::Press {
        self.process_pending_events();
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(command) = self.state.search_input_command(key) {
        command
      } else {
        let page = self.state.viewport_rows().max(1);
        self.state.mode_mut().handle_key(key, page)
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }

          self.process_pending_events();
        }
        Err(error) => {
          self.state.clear_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
          self.process_pending_events();
        }
      }
    }

    Ok(())
  }
}

fn placeholder_item(text: &str) -> ListItem<'static> {
  ListItem::new(Line::from(vec![
    Span::raw(BASE_INDENT),
    Span::raw(text.to_string()),
  ]))
}
