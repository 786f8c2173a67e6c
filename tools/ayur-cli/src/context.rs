//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::AyurConfig;
use crate::output::Output;

/// Config file names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["ayur.toml", ".ayur.toml", "ayur.json"];

/// Execution context for CLI commands.
pub struct Context {
    pub config: AyurConfig,
    pub output: Output,
    pub cwd: PathBuf,
    /// File the config came from, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from an explicit config file, or the nearest one found
    /// walking up from the working directory. Environment overrides apply
    /// either way.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (AyurConfig::load(path)?, Some(PathBuf::from(path))),
            None => match Self::find_config(&cwd) {
                Some(path) => {
                    let config = path
                        .to_str()
                        .map(AyurConfig::load)
                        .transpose()?
                        .unwrap_or_default();
                    (config, Some(path))
                }
                None => (AyurConfig::default(), None),
            },
        };

        Ok(Self {
            config: config.with_env(),
            output,
            cwd,
            config_path,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let candidate = current.join(name);
                if candidate.exists() {
                    return Some(candidate);
                }
            }
            if !current.pop() {
                return None;
            }
        }
    }
}
