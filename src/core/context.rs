//! Shared context passed to modules

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::StatsScope;

/// Shared context available to all modules
#[derive(Debug, Clone)]
pub struct Context {
    /// Prefix for money values
    pub currency: String,

    /// Record set the page headers summarize
    pub stats_scope: StatsScope,

    /// Where `:export` writes
    pub export_dir: PathBuf,

    /// Last text copied with `y`
    pub clipboard: Option<String>,
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Context {
    pub fn from_config(config: &Config) -> Self {
        Self {
            currency: config.currency_symbol.clone(),
            stats_scope: config.stats_scope,
            export_dir: config.export_dir(),
            clipboard: None,
        }
    }

    /// Set clipboard content
    pub fn set_clipboard(&mut self, content: String) {
        self.clipboard = Some(content);
    }

    /// Get clipboard content
    pub fn get_clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }
}
