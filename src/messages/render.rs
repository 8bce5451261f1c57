//! Render state - data structure sent from App layer to UI for rendering

use crate::components::Node;
use crate::messages::ui_events::AppTab;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub active_tab: AppTab,

    /// Component tree of the active tab
    pub view: Node,

    pub show_help: bool,
}
