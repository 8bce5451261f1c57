//! Application constants
//!
//! Centralized location for labels and configuration defaults.

/// Application name
pub const APP_NAME: &str = "Folio TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory under the home directory holding the config file
pub const CONFIG_DIR: &str = ".folio";

/// Portfolio content file name
pub const CONFIG_FILE: &str = "portfolio.yaml";

/// Log file written next to the working directory
pub const LOG_FILE: &str = "folio.log";

/// Label of the counter's only control
pub const INCREMENT_LABEL: &str = "Increment";

/// Prefix of the counter's text region
pub const COUNT_PREFIX: &str = "Count is";
