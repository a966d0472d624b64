//! Settings shared by every subcommand.
//!
//! Command-line flags win over `FIXTUREGEN_ROOT`, which wins over the config file, which wins
//! over the built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

use crate::fixture::DEFAULT_ROOT;
use crate::ops::{DEFAULT_COMPILER, DEFAULT_SEPARATOR};
use crate::table::QuoteStyle;
use crate::FixtureResult;

/// Config file picked up from the current directory.
pub const CONFIG_FILE: &str = "fixturegen.toml";

/// Environment variable overriding the fixtures root.
pub const ROOT_ENV: &str = "FIXTUREGEN_ROOT";

/// Contents of a config file; every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub root: Option<PathBuf>,
    pub quotes: Option<QuoteStyle>,
    pub separator: Option<char>,
    pub compiler: Option<String>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> FixtureResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load `path`, or `fixturegen.toml` if it exists when no path is given.
    pub fn load(path: Option<&Path>) -> FixtureResult<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(CONFIG_FILE).is_file() => Path::new(CONFIG_FILE),
            None => {
                log::trace!("no {} found, using defaults", CONFIG_FILE);
                return Ok(Self::default());
            }
        };
        log::trace!("loading config from {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }
}

/// Fully resolved settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub quotes: QuoteStyle,
    pub separator: char,
    pub compiler: String,
}

impl Config {
    pub fn resolve(
        file: ConfigFile,
        root_flag: Option<PathBuf>,
        root_env: Option<PathBuf>,
    ) -> Self {
        Self {
            root: root_flag
                .or(root_env)
                .or(file.root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
            quotes: file.quotes.unwrap_or_default(),
            separator: file.separator.unwrap_or(DEFAULT_SEPARATOR),
            compiler: file.compiler.unwrap_or_else(|| DEFAULT_COMPILER.to_owned()),
        }
    }
}
