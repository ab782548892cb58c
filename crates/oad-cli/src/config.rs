use std::path::{Path, PathBuf};

use oad_diff::{OutputStyle, RenderOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}", path = .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rendering defaults read from a TOML file. Unset fields fall through to
/// [`RenderOptions::default`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    pub style: Option<OutputStyle>,
    pub flatten_depth: Option<usize>,
    pub skip_schemas: Option<bool>,
    pub show_unchanged: Option<bool>,
}

impl CliConfig {
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Merge: command-line flags, then this file, then defaults.
    pub fn render_options(&self, cli: &Cli) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            style: cli
                .format
                .map(OutputStyle::from)
                .or(self.style)
                .unwrap_or(defaults.style),
            flatten_depth: cli
                .flatten_depth
                .or(self.flatten_depth)
                .unwrap_or(defaults.flatten_depth),
            skip_schemas: cli.skip_schemas
                || self.skip_schemas.unwrap_or(defaults.skip_schemas),
            show_unchanged: cli.show_unchanged
                || self.show_unchanged.unwrap_or(defaults.show_unchanged),
        }
    }
}
