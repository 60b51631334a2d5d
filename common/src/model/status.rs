/// Client-side status of one extraction run.
///
/// Transitions are owned exclusively by the workflow machine: `Idle` on load
/// and after any upload or clear, `Processing` while the request is in
/// flight, then `Completed` or `Error`. Neither outcome is terminal; a new
/// submit or a new upload re-enters the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingStatus {
    #[default]
    Idle,
    Processing,
    Completed,
    Error,
}
