//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so a partial or missing file still works.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub element: ElementConfig,
    /// Id of the element the toggle is bound to at startup.
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            element: ElementConfig::default(),
            target: default_target(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// The element placed in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementConfig {
    #[serde(default = "default_target")]
    pub id: String,
    #[serde(default = "default_text")]
    pub text: String,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            id: default_target(),
            text: default_text(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            show_status_bar: true,
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_target() -> String {
    "hello".to_string()
}
fn default_text() -> String {
    "Hello, world!".to_string()
}
fn default_tick_ms() -> u64 {
    50
}
fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/clicktint/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
