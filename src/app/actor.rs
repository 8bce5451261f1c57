//! App actor - message loop processing UI events

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::config::PortfolioConfig;
use crate::messages::{RenderState, UiEvent};

/// App actor that owns all state and processes UI events in order
pub struct AppActor {
    state: AppState,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(config: &PortfolioConfig, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor {
            state: AppState::new(config),
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        while let Some(event) = ui_rx.recv().await {
            if self.handle_ui_event(event) {
                tracing::info!("quit requested");
                break;
            }
            // Only state changes that asked for a redraw reach the UI
            if self.state.redraw_flag().take() {
                tracing::debug!(
                    tab = ?self.state.active_tab,
                    count = ?self.state.count(),
                    "render requested"
                );
                let _ = self.render_tx.send(self.state.to_render_state());
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::SwitchTab(tab) => self.state.switch_tab(tab),
            UiEvent::Increment => self.state.increment(),
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),
            UiEvent::Quit => return true,
        }

        false
    }
}
