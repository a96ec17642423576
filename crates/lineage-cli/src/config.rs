//! Optional settings file.
//!
//! ```toml
//! default_base = "origin/main"
//!
//! [walk]
//! max_commits = 200000
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use lineage_revwalk::WalkOptions;
use serde::Deserialize;
use tracing::debug;

/// File looked up at the repository root when `--config` is not given.
pub const DEFAULT_FILE: &str = ".lineage.toml";

const FALLBACK_BASE: &str = "main";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Reference used by `ahead-behind` when no base is given.
    pub default_base: Option<String>,
    pub walk: WalkOptions,
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("invalid config file '{}'", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// An explicit path must exist; otherwise `<repo_root>/.lineage.toml`
    /// is used when present and defaults apply when it is not.
    pub fn discover(explicit: Option<&Path>, repo_root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = repo_root.join(DEFAULT_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn default_base(&self) -> &str {
        self.default_base.as_deref().unwrap_or(FALLBACK_BASE)
    }
}
