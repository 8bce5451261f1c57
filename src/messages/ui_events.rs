//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Application tabs
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AppTab {
    #[default]
    Portfolio,
    Counter,
}

impl AppTab {
    pub fn title(&self) -> &'static str {
        match self {
            AppTab::Portfolio => "Portfolio",
            AppTab::Counter => "Counter",
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SwitchTab(AppTab),

    /// Activation of the counter's Increment control
    Increment,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, active_tab: AppTab, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Any key closes the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('1') => Some(UiEvent::SwitchTab(AppTab::Portfolio)),
        KeyCode::Char('2') => Some(UiEvent::SwitchTab(AppTab::Counter)),
        KeyCode::Tab | KeyCode::BackTab => Some(UiEvent::SwitchTab(match active_tab {
            AppTab::Portfolio => AppTab::Counter,
            AppTab::Counter => AppTab::Portfolio,
        })),
        // The tab seen here may be stale; the app ignores it without a counter
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('+') => Some(UiEvent::Increment),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_increment_independent_of_tab() {
        let enter = press(KeyCode::Enter);
        assert_eq!(key_to_ui_event(enter, AppTab::Counter, false), Some(UiEvent::Increment));
        assert_eq!(key_to_ui_event(enter, AppTab::Portfolio, false), Some(UiEvent::Increment));
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char(' ')), AppTab::Counter, false),
            Some(UiEvent::Increment)
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_to_ui_event(release, AppTab::Counter, false), None);
    }

    #[test]
    fn test_help_swallows_keys() {
        let enter = press(KeyCode::Enter);
        assert_eq!(key_to_ui_event(enter, AppTab::Counter, true), Some(UiEvent::CloseHelp));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(ctrl_c, AppTab::Counter, true), Some(UiEvent::Quit));
    }

    #[test]
    fn test_tab_switching() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('2')), AppTab::Portfolio, false),
            Some(UiEvent::SwitchTab(AppTab::Counter))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Tab), AppTab::Counter, false),
            Some(UiEvent::SwitchTab(AppTab::Portfolio))
        );
    }
}
