use super::*;

pub(crate) enum Mode {
  Browse,
  Detail(DetailView),
}

impl Mode {
  pub(crate) fn handle_key(&mut self, key: KeyEvent, page: usize) -> Command {
    let modifiers = key.modifiers;

    match self {
      Mode::Browse => match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Char('/') => Command::StartSearch,
        KeyCode::Left | KeyCode::Char('h') => Command::SwitchTabLeft,
        KeyCode::Right | KeyCode::Char('l') => Command::SwitchTabRight,
        KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
        KeyCode::PageDown => Command::NextWindow,
        KeyCode::PageUp => Command::PrevWindow,
        KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
          Command::NextWindow
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
          Command::PrevWindow
        }
        KeyCode::Home => Command::SelectFirst,
        KeyCode::Enter => Command::OpenDetail,
        KeyCode::Char('o' | 'O') => Command::OpenInBrowser,
        KeyCode::Char('w' | 'W') => Command::ToggleWish,
        KeyCode::Char('r' | 'R') => Command::Reload,
        _ => Command::None,
      },
      Mode::Detail(view) => match key.code {
        KeyCode::Char('q' | 'Q') => Command::Quit,
        KeyCode::Esc => Command::CloseDetail,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Char('o' | 'O') => Command::OpenInBrowser,
        KeyCode::Char('w' | 'W') => Command::ToggleWish,
        KeyCode::Down | KeyCode::Char('j') => {
          view.scroll_down(1);
          Command::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
          view.scroll_up(1);
          Command::None
        }
        KeyCode::PageDown => {
          view.scroll_down(page_scroll(page));
          Command::None
        }
        KeyCode::PageUp => {
          view.scroll_up(page_scroll(page));
          Command::None
        }
        KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
          view.scroll_down(page_scroll(page));
          Command::None
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
          view.scroll_up(page_scroll(page));
          Command::None
        }
        KeyCode::Home => {
          view.clamp_scroll(0);
          Command::None
        }
        _ => Command::None,
      },
    }
  }
}

fn page_scroll(page: usize) -> u16 {
  u16::try_from(page.saturating_sub(1).max(1)).unwrap_or(u16::MAX)
}
