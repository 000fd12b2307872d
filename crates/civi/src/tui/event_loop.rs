//! Event loop - terminal setup, input polling, analyzer dispatch

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{error, info};

use civi_common::{AnalyzerClient, CiviConfig, SentimentScore};

use super::render::draw_ui;
use super::state::{handle_key, CiviTuiState, KeyOutcome};

/// Messages delivered back into the event loop from spawned work.
#[derive(Debug)]
pub enum TuiMessage {
    /// The analyzer answered; apply the scores and show the dashboard.
    ScoresReady(Vec<SentimentScore>),
}

/// Run the TUI until the user exits.
pub async fn run(config: CiviConfig) -> Result<()> {
    let client = AnalyzerClient::new(config.analyzer_url.clone(), config.request_timeout_secs)?;

    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!("failed to enable raw mode: {e}. Run civi in a real terminal (TTY).")
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("failed to initialize terminal: {e}")
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = CiviTuiState::new(config.effective_word_limit());
    let (tx, mut rx) = mpsc::channel(16);

    info!(endpoint = %client.endpoint(), "tui started");
    let result = run_event_loop(&mut terminal, &mut state, &client, tx, &mut rx).await;
    let cleanup = restore_terminal(&mut terminal);

    result.and(cleanup)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut CiviTuiState,
    client: &AnalyzerClient,
    tx: mpsc::Sender<TuiMessage>,
    rx: &mut mpsc::Receiver<TuiMessage>,
) -> Result<()> {
    loop {
        // Drain analyzer replies before drawing.
        while let Ok(msg) = rx.try_recv() {
            match msg {
                TuiMessage::ScoresReady(scores) => {
                    state.session.complete_analysis(&scores);
                }
            }
        }

        terminal.draw(|f| draw_ui(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match handle_key(state, key) {
                    KeyOutcome::Continue => {}
                    KeyOutcome::Quit => break,
                    KeyOutcome::Submit(text) => submit_statement(client, &tx, text),
                }
            }
        }
    }

    Ok(())
}

/// Fire one analysis request. Failures are logged and the input view stays
/// up; there is no retry and no coordination between in-flight requests.
fn submit_statement(client: &AnalyzerClient, tx: &mpsc::Sender<TuiMessage>, text: String) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        match client.analyze(&text).await {
            Ok(scores) => {
                let _ = tx.send(TuiMessage::ScoresReady(scores)).await;
            }
            Err(e) => error!("sentiment analysis failed: {e}"),
        }
    });
}
