pub(crate) struct PendingDetail {
  pub(crate) request_id: u64,
}
