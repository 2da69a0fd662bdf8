use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use parley_types::DEFAULT_ENDPOINT;

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "parley.toml";

/// Contents of `parley.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub verbose: bool,
}

impl FileConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load an explicit path, or `./parley.toml` if it exists, or nothing
    pub fn discover(explicit: Option<&Path>) -> Result<Option<Self>> {
        match explicit {
            Some(path) => Self::load(path).map(Some),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(&fallback).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }
}

/// Pick the endpoint: flag or env first, then the config file, then the default
pub fn resolve_endpoint(from_cli: Option<&str>, file: Option<&FileConfig>) -> String {
    from_cli
        .map(str::to_string)
        .or_else(|| file.and_then(|f| f.endpoint.clone()))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}
