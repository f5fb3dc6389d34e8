pub mod error;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::constants::{
    BUNDLED_TIMELINE, ENV_ANIMATION_DURATION, ENV_FADE_PAUSE, ENV_TIMELINE,
    ENV_TITLE,
};
use crate::models::{
    AnimationConfig, PlayerConfig, TimelineDocument, TimelineSource,
};
use crate::util::{non_blank, parse_duration};
use crate::validation::{self, ConfigWarnings};

use error::ConfigLoadError;

/// Snapshot of the environment variables the loader cares about.
///
/// Captured once so resolution is deterministic and tests never touch the
/// process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    const KEYS: [&'static str; 4] =
        [ENV_TIMELINE, ENV_TITLE, ENV_ANIMATION_DURATION, ENV_FADE_PAUSE];

    pub fn from_process() -> Self {
        let vars = Self::KEYS
            .iter()
            .filter_map(|key| {
                std::env::var(key).ok().map(|value| (key.to_string(), value))
            })
            .collect();
        Self { vars }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Fill unset keys from a `.env` file. Values already present win, the
    /// same way `dotenvy` treats the process environment.
    pub fn merge_env_file(&mut self, path: &Path) -> Result<(), ConfigLoadError> {
        let to_error = |source| ConfigLoadError::EnvFile {
            path: path.to_path_buf(),
            source,
        };
        for entry in dotenvy::from_path_iter(path).map_err(to_error)? {
            let (key, value) = entry.map_err(to_error)?;
            if Self::KEYS.contains(&key.as_str()) {
                self.vars.entry(key).or_insert(value);
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        non_blank(self.vars.get(key).map(String::as_str))
    }
}

/// Result of a successful load: the resolved config plus anything suspicious
/// found in the data.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: PlayerConfig,
    pub warnings: ConfigWarnings,
}

/// Resolves a [`PlayerConfig`] with precedence CLI > environment > timeline
/// document > built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    cli: Cli,
    env: EnvSnapshot,
}

impl ConfigLoader {
    pub fn new(cli: Cli, env: EnvSnapshot) -> Self {
        Self { cli, env }
    }

    /// Loader for the running process: reads `./.env` when present, then any
    /// `--env-file` given on the command line.
    pub fn from_process(cli: Cli) -> Result<Self, ConfigLoadError> {
        let mut env = EnvSnapshot::from_process();
        let default_env = Path::new(".env");
        if default_env.exists() {
            env.merge_env_file(default_env)?;
        }
        if let Some(path) = cli.env_file.as_deref() {
            env.merge_env_file(path)?;
        }
        Ok(Self::new(cli, env))
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (document, source) = match self.timeline_path() {
            Some(path) => (read_document(&path)?, TimelineSource::File(path)),
            None => (bundled_document()?, TimelineSource::Bundled),
        };

        let mut animation = AnimationConfig::default();
        animation.merge_section(document.animation);
        self.apply_animation_overrides(&mut animation)?;

        let title = self
            .cli
            .title
            .clone()
            .or_else(|| self.env.get(ENV_TITLE).map(str::to_string))
            .or(document.title);

        let warnings = validation::validate(&document.periods, &animation);

        tracing::debug!(
            target: "chronodial_config",
            "loaded {} periods from {source}",
            document.periods.len()
        );

        Ok(ConfigLoad {
            config: PlayerConfig {
                title,
                periods: document.periods,
                animation,
                source,
            },
            warnings,
        })
    }

    fn timeline_path(&self) -> Option<PathBuf> {
        self.cli
            .timeline
            .clone()
            .or_else(|| self.env.get(ENV_TIMELINE).map(PathBuf::from))
    }

    fn apply_animation_overrides(
        &self,
        animation: &mut AnimationConfig,
    ) -> Result<(), ConfigLoadError> {
        if let Some(duration) = self.env_duration(ENV_ANIMATION_DURATION)? {
            animation.duration = duration;
        }
        if let Some(pause) = self.env_duration(ENV_FADE_PAUSE)? {
            animation.fade_pause = pause;
        }
        if let Some(duration) = self.cli.duration {
            animation.duration = duration;
        }
        if let Some(pause) = self.cli.fade_pause {
            animation.fade_pause = pause;
        }
        Ok(())
    }

    fn env_duration(
        &self,
        key: &str,
    ) -> Result<Option<std::time::Duration>, ConfigLoadError> {
        self.env
            .get(key)
            .map(|raw| {
                parse_duration(raw).map_err(|source| {
                    ConfigLoadError::InvalidDuration {
                        key: key.to_string(),
                        source,
                    }
                })
            })
            .transpose()
    }
}

/// Parse a timeline document, picking the format from the file extension.
pub fn read_document(path: &Path) -> Result<TimelineDocument, ConfigLoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str, String) -> Result<TimelineDocument, ConfigLoadError> =
        match extension.as_deref() {
            Some("toml") => parse_toml,
            Some("json") => parse_json,
            _ => {
                return Err(ConfigLoadError::UnsupportedFormat(
                    path.to_path_buf(),
                ));
            }
        };

    let raw =
        std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    parse(&raw, path.display().to_string())
}

pub fn bundled_document() -> Result<TimelineDocument, ConfigLoadError> {
    parse_toml(BUNDLED_TIMELINE, TimelineSource::Bundled.to_string())
}

fn parse_toml(
    raw: &str,
    origin: String,
) -> Result<TimelineDocument, ConfigLoadError> {
    toml::from_str(raw).map_err(|source| ConfigLoadError::Toml { origin, source })
}

fn parse_json(
    raw: &str,
    origin: String,
) -> Result<TimelineDocument, ConfigLoadError> {
    serde_json::from_str(raw)
        .map_err(|source| ConfigLoadError::Json { origin, source })
}
