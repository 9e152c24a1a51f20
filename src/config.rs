use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG: &str = include_str!("data/config.yaml");

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
  #[serde(default = "default_log_level")]
  pub log_level: String,
  #[serde(default)]
  pub log_file: Option<String>,
  #[serde(default)]
  pub geometries: Vec<String>,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Config {
  pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
    match path {
      Some(path) => {
        let contents = fs::read_to_string(path)
          .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&contents)
          .with_context(|| format!("Failed to parse config file: {}", path.display()))
      }
      None => Self::parse(DEFAULT_CONFIG).context("Failed to parse built-in config"),
    }
  }

  pub fn parse(contents: &str) -> anyhow::Result<Self> {
    Ok(serde_yaml::from_str(contents)?)
  }
}
