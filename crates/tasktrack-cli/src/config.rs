use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{
  Path,
  PathBuf
};

use anyhow::Context;
use serde::Deserialize;
use tasktrack_core::StatusFilter;
use tracing::{
  debug,
  info
};

/// Environment variable naming the config file. `/dev/null` turns
/// loading off.
pub const CONFIG_ENV: &str =
  "TASKTRACK_CONFIG";

pub const DEFAULT_PROMPT: &str =
  "tasktrack> ";

/// Settings read from `config.toml`. Missing keys keep their defaults,
/// unknown keys are rejected.
#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub default_filter: StatusFilter,
  pub prompt:         String
}

impl Default for Config {
  fn default() -> Self {
    Self {
      default_filter:
        StatusFilter::default(),
      prompt: DEFAULT_PROMPT
        .to_string()
    }
  }
}

/// Where the config comes from and whether a missing file is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
  Explicit(PathBuf),
  Env(PathBuf),
  Default(PathBuf),
  Disabled
}

impl Config {
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    toml::from_str::<Config>(text)
      .context("invalid configuration")
  }

  /// Resolves the file from `--config`, the environment and the user
  /// config directory, then loads it.
  #[tracing::instrument]
  pub fn load(
    explicit: Option<&Path>
  ) -> anyhow::Result<Self> {
    let source = resolve_source(
      explicit,
      std::env::var_os(CONFIG_ENV),
      dirs::config_dir()
    );
    Self::load_from(&source)
  }

  pub fn load_from(
    source: &ConfigSource
  ) -> anyhow::Result<Self> {
    let (path, required) = match source
    {
      | ConfigSource::Explicit(path)
      | ConfigSource::Env(path) => {
        (path, true)
      }
      | ConfigSource::Default(path) => {
        (path, false)
      }
      | ConfigSource::Disabled => {
        info!(
          "config loading disabled"
        );
        return Ok(Config::default());
      }
    };

    let text = match fs::read_to_string(
      path
    ) {
      | Ok(text) => text,
      | Err(err)
        if !required
          && err.kind()
            == io::ErrorKind::NotFound =>
      {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(Config::default());
      }
      | Err(err) => {
        return Err(err).with_context(
          || {
            format!(
              "failed to read {}",
              path.display()
            )
          }
        );
      }
    };

    info!(path = %path.display(), "loading config");
    Self::from_toml_str(&text)
      .with_context(|| {
        format!(
          "in {}",
          path.display()
        )
      })
  }

  /// Startup flags win over the file.
  pub fn apply_flags(
    &mut self,
    filter: Option<StatusFilter>,
    prompt: Option<String>
  ) {
    if let Some(filter) = filter {
      self.default_filter = filter;
    }
    if let Some(prompt) = prompt {
      self.prompt = prompt;
    }
  }
}

/// `--config` first, then a non-empty `TASKTRACK_CONFIG`, then
/// `<config dir>/tasktrack/config.toml`.
pub fn resolve_source(
  explicit: Option<&Path>,
  env_value: Option<OsString>,
  config_dir: Option<PathBuf>
) -> ConfigSource {
  if let Some(path) = explicit {
    return ConfigSource::Explicit(
      path.to_path_buf()
    );
  }

  if let Some(value) = env_value
    && !value.is_empty()
  {
    if value == "/dev/null" {
      return ConfigSource::Disabled;
    }
    return ConfigSource::Env(
      PathBuf::from(value)
    );
  }

  match config_dir {
    | Some(dir) => {
      ConfigSource::Default(
        dir
          .join("tasktrack")
          .join("config.toml")
      )
    }
    | None => ConfigSource::Disabled
  }
}
