//! Terminal client for the records API.
//!
//! Provides a reusable [`run`] function that launches the Ratatui UI against
//! a records API base URL. Network calls run on spawned tasks and report
//! back to the event loop over a channel, so rendering never blocks on I/O.

mod app;
mod event;
mod ui;

use api_client::RecordsClient;
use app::App;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use event::AppEvent;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};

/// Launch the terminal client against the API rooted at `api_url`.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails. Network failures
/// are not errors here; they surface inside the UI as messages.
pub async fn run(api_url: &str) -> anyhow::Result<()> {
    let client = Arc::new(RecordsClient::new(api_url));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_loop(&mut terminal, client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    client: Arc<RecordsClient>,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new();

    // Initial fetch, mirrored by Ctrl+R later.
    app.begin_request();
    spawn_fetch(client.clone(), tx.clone());

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if crossterm::event::poll(Duration::from_millis(50))? {
            if let CrosstermEvent::Key(key) = crossterm::event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key.code, key.modifiers, &client, &tx);
                }
            }
        }

        while let Ok(event) = rx.try_recv() {
            match event {
                AppEvent::RecordsFetched(result) => app.finish_fetch(result),
                AppEvent::RecordCreated(result) => app.finish_create(result),
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    client: &Arc<RecordsClient>,
    tx: &UnboundedSender<AppEvent>,
) {
    match code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => {
            if !app.is_loading {
                app.begin_request();
                spawn_fetch(client.clone(), tx.clone());
            }
        }
        KeyCode::Enter => {
            if app.can_submit() {
                let content = app.draft.clone();
                app.begin_request();
                spawn_create(client.clone(), tx.clone(), content);
            }
        }
        KeyCode::Backspace => {
            app.draft.pop();
        }
        KeyCode::Char(c) => app.draft.push(c),
        _ => {}
    }
}

fn spawn_fetch(client: Arc<RecordsClient>, tx: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let result = client
            .list_records()
            .await
            .map_err(|_| "Failed to fetch records. Please try again.".to_string());
        let _ = tx.send(AppEvent::RecordsFetched(result));
    });
}

fn spawn_create(client: Arc<RecordsClient>, tx: UnboundedSender<AppEvent>, content: String) {
    tokio::spawn(async move {
        let result = client
            .create_record(&content)
            .await
            .map_err(|_| "Failed to create record. Please try again.".to_string());
        let _ = tx.send(AppEvent::RecordCreated(result));
    });
}
