//! Application state for the records terminal client.

use core_types::Record;

/// Top-level application state, passed explicitly to the rendering code.
///
/// `is_loading` is set before a network exchange begins and cleared when it
/// settles, on success and failure alike. While it is set, new submissions
/// are ignored; this flag is the only duplicate-submission guard.
pub struct App {
    /// Fetched records, most recent first.
    pub records: Vec<Record>,
    /// Current input buffer for a new record.
    pub draft: String,
    /// Whether a fetch or create exchange is in flight.
    pub is_loading: bool,
    /// User-facing error message from the last failed exchange, if any.
    pub error: Option<String>,
    /// Set when the user asks to exit.
    pub should_quit: bool,
}

impl App {
    /// Create a new application state with defaults.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            draft: String::new(),
            is_loading: false,
            error: None,
            should_quit: false,
        }
    }

    /// Whether a submission is currently allowed: the trimmed draft must be
    /// non-empty and no exchange may be in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.draft.trim().is_empty()
    }

    /// Marks the start of a network exchange: clears any stale error and
    /// raises the loading flag.
    pub fn begin_request(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Applies the outcome of a list fetch.
    pub fn finish_fetch(&mut self, result: Result<Vec<Record>, String>) {
        match result {
            Ok(records) => self.records = records,
            Err(message) => self.error = Some(message),
        }
        self.is_loading = false;
    }

    /// Applies the outcome of a create: the server's row is prepended to the
    /// local list and the draft cleared. On failure the draft is kept so the
    /// user can resubmit.
    pub fn finish_create(&mut self, result: Result<Record, String>) {
        match result {
            Ok(record) => {
                self.records.insert(0, record);
                self.draft.clear();
            }
            Err(message) => self.error = Some(message),
        }
        self.is_loading = false;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: i32, content: &str) -> Record {
        Record {
            id,
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn begin_request_raises_loading_and_clears_error() {
        let mut app = App::new();
        app.error = Some("stale".to_string());
        app.begin_request();
        assert!(app.is_loading);
        assert!(app.error.is_none());
    }

    #[test]
    fn fetch_success_populates_records_and_settles() {
        let mut app = App::new();
        app.begin_request();
        app.finish_fetch(Ok(vec![record(2, "second"), record(1, "first")]));
        assert_eq!(app.records.len(), 2);
        assert_eq!(app.records[0].id, 2);
        assert!(!app.is_loading);
        assert!(app.error.is_none());
    }

    #[test]
    fn fetch_failure_sets_error_and_settles() {
        let mut app = App::new();
        app.begin_request();
        app.finish_fetch(Err("Failed to fetch records. Please try again.".to_string()));
        assert!(app.records.is_empty());
        assert!(!app.is_loading);
        assert_eq!(
            app.error.as_deref(),
            Some("Failed to fetch records. Please try again.")
        );
    }

    #[test]
    fn create_success_prepends_and_clears_draft() {
        let mut app = App::new();
        app.records = vec![record(1, "older")];
        app.draft = "buy milk".to_string();
        app.begin_request();
        app.finish_create(Ok(record(2, "buy milk")));
        assert_eq!(app.records[0].id, 2);
        assert_eq!(app.records[1].id, 1);
        assert!(app.draft.is_empty());
        assert!(!app.is_loading);
    }

    #[test]
    fn create_failure_keeps_draft_and_sets_error() {
        let mut app = App::new();
        app.draft = "buy milk".to_string();
        app.begin_request();
        app.finish_create(Err("Failed to create record. Please try again.".to_string()));
        assert_eq!(app.draft, "buy milk");
        assert!(app.error.is_some());
        assert!(!app.is_loading);
    }

    #[test]
    fn blank_or_in_flight_drafts_cannot_be_submitted() {
        let mut app = App::new();
        assert!(!app.can_submit());

        app.draft = "   ".to_string();
        assert!(!app.can_submit());

        app.draft = "buy milk".to_string();
        assert!(app.can_submit());

        app.begin_request();
        assert!(!app.can_submit());
    }
}
