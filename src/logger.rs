use std::{fs::OpenOptions, str::FromStr, sync::Mutex};

use anyhow::Context;
use tracing::Level;

use crate::config::Config;

pub struct Logger {}

impl Logger {
  pub fn level(config: &Config) -> anyhow::Result<Level> {
    Level::from_str(config.log_level.trim())
      .map_err(|_| anyhow::anyhow!("Invalid log_level: {:?}", config.log_level))
  }

  /// Installs the global subscriber. Logs go to `log_file` when set, stderr otherwise.
  pub fn init(config: &Config) -> anyhow::Result<()> {
    let level = Self::level(config)?;
    let builder = tracing_subscriber::fmt().with_max_level(level);

    match &config.log_file {
      Some(path) => {
        let file = OpenOptions::new()
          .create(true)
          .append(true)
          .open(path)
          .with_context(|| format!("Failed to open log file: {}", path))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
      }
      None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config(log_level: &str) -> Config {
    Config {
      log_level: log_level.to_string(),
      log_file: None,
      geometries: vec![],
    }
  }

  #[test]
  fn parses_levels() {
    assert_eq!(Logger::level(&config("debug")).unwrap(), Level::DEBUG);
    assert_eq!(Logger::level(&config("WARN")).unwrap(), Level::WARN);
    assert!(Logger::level(&config("loud")).is_err());
  }
}
