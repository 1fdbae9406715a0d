#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CancelSearch,
  CloseDetail,
  HideHelp,
  NextWindow,
  None,
  OpenDetail,
  OpenInBrowser,
  PrevWindow,
  Quit,
  Reload,
  SelectFirst,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  StartSearch,
  SubmitSearch,
  SwitchTabLeft,
  SwitchTabRight,
  ToggleWish,
}
