//! Settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. A TOML file passed with `--config`
//! 3. Environment variables: `BST_PLAYGROUND_*` prefix
//!
//! Command line flags are applied on top by the binary.

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::element::ElementKind;
use crate::error::{Error, Result};

/// Prefix of the environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "BST_PLAYGROUND";

/// Session settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// How many entries each history (session and per-tree) keeps before evicting the oldest.
    pub history_capacity: usize,
    /// Whether replies are colored.
    pub colors: bool,
    /// Element type for the session. When unset the binary asks at start-up.
    pub element: Option<ElementKind>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_capacity: 20,
            colors: true,
            element: None,
        }
    }
}

impl Settings {
    /// Loads settings from defaults, then `file` if given, then the environment.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("history_capacity", defaults.history_capacity as u64)?
            .set_default("colors", defaults.colors)?;

        if let Some(path) = file {
            debug!(path = %path.display(), "loading settings file");
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Rejects values no session can run with.
    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(Error::InvalidSetting {
                key: "history_capacity",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
