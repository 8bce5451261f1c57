//! App state - pure data structure with no I/O logic

use crate::components::{Component, Counter, Node, Portfolio, RedrawFlag, RenderTrigger};
use crate::config::PortfolioConfig;
use crate::messages::ui_events::AppTab;
use crate::messages::RenderState;

/// Main application state - pure data, no I/O
pub struct AppState {
    pub active_tab: AppTab,
    pub show_help: bool,

    portfolio: Portfolio,

    /// Mounted only while the Counter tab is active
    counter: Option<Counter<RedrawFlag>>,

    redraw: RedrawFlag,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&PortfolioConfig::default())
    }
}

impl AppState {
    pub fn new(config: &PortfolioConfig) -> Self {
        AppState {
            active_tab: AppTab::Portfolio,
            show_help: false,
            portfolio: Portfolio::new(config),
            counter: None,
            redraw: RedrawFlag::new(),
        }
    }

    /// Shared flag set whenever state changed and the UI should redraw
    pub fn redraw_flag(&self) -> &RedrawFlag {
        &self.redraw
    }

    pub fn count(&self) -> Option<u64> {
        self.counter.as_ref().map(Counter::count)
    }

    pub fn switch_tab(&mut self, tab: AppTab) {
        if self.active_tab == tab {
            return;
        }
        tracing::info!(from = ?self.active_tab, to = ?tab, "switching tab");
        self.active_tab = tab;
        self.counter = match tab {
            AppTab::Counter => Some(Counter::mount(self.redraw.clone())),
            AppTab::Portfolio => None,
        };
        self.redraw.request_render();
    }

    /// Activate the Increment control; no-op when no counter is mounted
    pub fn increment(&mut self) {
        match self.counter.as_mut() {
            Some(counter) => counter.increment(),
            None => tracing::debug!("increment ignored, counter not mounted"),
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.redraw.request_render();
    }

    pub fn close_help(&mut self) {
        if self.show_help {
            self.show_help = false;
            self.redraw.request_render();
        }
    }

    /// Component tree of the active tab
    pub fn view(&self) -> Node {
        match (&self.active_tab, &self.counter) {
            (AppTab::Counter, Some(counter)) => counter.render(),
            _ => self.portfolio.render(),
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            active_tab: self.active_tab,
            view: self.view(),
            show_help: self.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_mounts_on_tab_switch() {
        let mut state = AppState::default();
        assert_eq!(state.count(), None);

        state.switch_tab(AppTab::Counter);
        assert!(state.redraw_flag().take());
        assert_eq!(state.count(), Some(0));
        assert_eq!(state.view().plain_text(), "Count is 0\nIncrement");
    }

    #[test]
    fn test_increments_request_render() {
        let mut state = AppState::default();
        state.switch_tab(AppTab::Counter);
        state.redraw_flag().take();

        for _ in 0..5 {
            state.increment();
            assert!(state.redraw_flag().take());
        }
        assert_eq!(state.count(), Some(5));
        assert_eq!(state.view().children()[0], Node::text("Count is 5"));
    }

    #[test]
    fn test_unmount_discards_count() {
        let mut state = AppState::default();
        state.switch_tab(AppTab::Counter);
        state.increment();
        state.increment();
        state.switch_tab(AppTab::Portfolio);
        assert_eq!(state.count(), None);

        state.switch_tab(AppTab::Counter);
        assert_eq!(state.count(), Some(0));
    }

    #[test]
    fn test_increment_without_counter_is_ignored() {
        let mut state = AppState::default();
        state.increment();
        assert!(!state.redraw_flag().take());
        assert_eq!(state.view().component_name(), Some("Portfolio"));
    }

    #[test]
    fn test_same_tab_is_noop() {
        let mut state = AppState::default();
        state.switch_tab(AppTab::Portfolio);
        assert!(!state.redraw_flag().take());
    }

    #[test]
    fn test_help_toggle() {
        let mut state = AppState::default();
        state.toggle_help();
        assert!(state.show_help);
        assert!(state.redraw_flag().take());
        state.close_help();
        assert!(!state.show_help);
        state.close_help();
        assert!(state.redraw_flag().take());
        assert!(!state.redraw_flag().take());
    }
}
