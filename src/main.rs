use {
  anyhow::Context,
  app::App,
  carousel::Carousel,
  category::{Category, CategoryKind},
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  detail_view::DetailView,
  effect::Effect,
  event::Event,
  feed::{Feed, FeedUpdate},
  fetch_ticket::FetchTicket,
  genre::Genre,
  help_view::HelpView,
  mode::Mode,
  movie::Movie,
  movie_detail::MovieDetail,
  page_response::PageResponse,
  page_source::PageSource,
  pending_detail::PendingDetail,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap,
    },
  },
  search_input::SearchInput,
  serde::{Deserialize, Serialize},
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::HashSet,
    env, fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  tab::Tab,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  transient_message::TransientMessage,
  utils::{format_rating, release_year, truncate},
  wish_item::WishItem,
  wish_store::{JsonFileStore, WishStore},
  wishlist::Wishlist,
};

mod app;
mod carousel;
mod category;
mod client;
mod command;
mod command_dispatch;
mod detail_view;
mod effect;
mod event;
mod feed;
mod fetch_ticket;
mod genre;
mod help_view;
mod mode;
mod movie;
mod movie_detail;
mod page_response;
mod page_source;
mod pending_detail;
mod search_input;
mod state;
mod tab;
mod transient_message;
mod utils;
mod wish_item;
mod wish_store;
mod wishlist;

const BASE_INDENT: &str = " ";

/// Rows one movie card occupies in the browse list; the window size of
/// every carousel is derived from the viewport height in these units.
const CARD_HEIGHT: usize = 3;

const DEFAULT_LANGUAGE: &str = "en-US";
const DEFAULT_WINDOW_SIZE: usize = 5;

const START_PAGE: u64 = 1;

const TMDB_MOVIE_URL: &str = "https://www.themoviedb.org/movie";

const BROWSE_STATUS: &str = "←/→ tabs • ↑/↓ move • pg↓/pg↑ slide • enter details • w wish • o open • / search • q quit • ? help";

const DETAIL_STATUS: &str =
  "↑/↓ scroll • w wish • o open in browser • esc back";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_STATUS: &str = "Loading movies...";
const LOADING_MORE_STATUS: &str = "Loading more movies...";
const LOADING_DETAIL_STATUS: &str = "Loading movie details...";

const HELP_TEXT: &str = "\
Navigation:
  ← / h   previous tab
  → / l   next tab
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     next slide
  pg↑     previous slide
  ctrl+d  next slide
  ctrl+u  previous slide
  home    jump to the first movie

Actions:
  enter   open details for the selected movie
  w       toggle the selected movie on your wish list
  o       open the selected movie on TMDB in your browser
  /       start a search (type to edit, enter to submit)
  r       reload the current tab
  q       quit reel
  esc     close help or quit from the browse view
  scroll  keep going past the last slide to load more movies
  ?       toggle this help

Details:
  ↑ / k   scroll up
  ↓ / j   scroll down
  pg↓     scroll a page down
  pg↑     scroll a page up
  w       toggle the movie on your wish list
  o       open the movie on TMDB in your browser
  esc     return to browsing
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let client = Client::from_env()?;

  let store = JsonFileStore::from_env()?;

  let wishlist =
    Wishlist::load(Box::new(store)).context("could not load wish list")?;

  let state = State::new(wishlist);

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, state);

  app.run(&mut terminal)?;

  restore_terminal(&mut terminal)
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
