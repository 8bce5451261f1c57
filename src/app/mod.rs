//! App layer - central state management and event processing
//!
//! The App actor receives UI events, updates state, and emits render state
//! whenever a re-render was requested.

pub mod state;
pub mod actor;

pub use state::AppState;
pub use actor::AppActor;
