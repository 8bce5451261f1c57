//! # Folio TUI
//!
//! A terminal portfolio page and a click-counter demo, both built from
//! small components rendered into a structural [`Node`] tree.
//!
//! ## Features
//! - Portfolio page: Header, About, Projects, Footer in fixed order
//! - Counter demo: one state cell, one Increment control
//! - Portfolio content from `~/.folio/portfolio.yaml`
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine, owns the components)
//! - Component Layer - pure tree construction plus the counter's state cell

pub mod models;
pub mod config;
pub mod constants;
pub mod components;
pub mod ui;
pub mod messages;
pub mod app;

// Re-export commonly used types
pub use models::{Link, Profile, Project};
pub use config::{ConfigStore, PortfolioConfig};
pub use components::{Component, Counter, Node, Portfolio, RedrawFlag, RenderTrigger};
pub use messages::{RenderState, UiEvent};
pub use app::{AppActor, AppState};
