//! Folio TUI - Actor-based portfolio page and counter demo
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use folio_tui::constants::LOG_FILE;
use folio_tui::messages::ui_events::key_to_ui_event;
use folio_tui::ui::{draw_pending, draw_ui};
use folio_tui::{AppActor, AppState, ConfigStore, RenderState, UiEvent};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = ConfigStore::new().load();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(&config, render_tx);
    let app_handle = tokio::spawn(app_actor.run(ui_rx));

    let initial_state = AppState::new(&config).to_render_state();
    run_ui_loop(&mut terminal, initial_state, ui_tx, &mut render_rx).await?;

    let _ = app_handle.await;
    tracing::info!("shutdown complete");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    mut current_state: RenderState,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|f| draw_ui(f, &current_state))?;
            dirty = false;
        }

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(event) =
                        key_to_ui_event(key, current_state.active_tab, current_state.show_help)
                    {
                        let quit = event == UiEvent::Quit;
                        let _ = ui_tx.send(event);
                        if quit {
                            break;
                        }
                    }
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        // One frame per state update, so no activation is skipped on screen
        if draw_pending(terminal, render_rx, &mut current_state)? > 0 {
            dirty = false;
        }
    }

    Ok(())
}
