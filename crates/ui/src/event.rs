use core_types::Record;

/// Completions reported back to the event loop by spawned network tasks.
/// Errors arrive already rendered as user-facing messages.
#[derive(Debug)]
pub enum AppEvent {
    RecordsFetched(Result<Vec<Record>, String>),
    RecordCreated(Result<Record, String>),
}
