/// Capability to issue exactly one remote page fetch. The generation is
/// compared again when the result comes back, so tickets minted before a
/// reset can never mutate state that belongs to newer parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FetchTicket {
  pub(crate) generation: u64,
  pub(crate) page: u64,
}
