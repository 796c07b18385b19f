//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags and their environment variables (handled at the call-site)
//! 2. `--config FILE`, which must exist
//! 3. `.tfreadme.toml` in the current directory
//! 4. `config.toml` in the platform config directory
//! 5. Built-in defaults (always present)
//!
//! Files are merged over the defaults, so a config file may set any subset
//! of keys.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".tfreadme.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Source file locations.
    pub inputs: InputsConfig,
    /// Rendering settings.
    pub render: RenderConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    pub variables: PathBuf,
    pub outputs: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Title override; the current directory name when unset.
    pub module_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            variables: PathBuf::from("variables.tf"),
            outputs: PathBuf::from("outputs.tf"),
        }
    }
}

impl AppConfig {
    /// Load configuration following the resolution order above.
    ///
    /// `config_file` is the path the user passed via `--config`; it is an
    /// error for it to be missing. The implicit locations are skipped when
    /// absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::from_file(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::from_file(&local);
        }

        let global = Self::config_path();
        if global.is_file() {
            return Self::from_file(&global);
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Read and parse one TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = Self::from_toml(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.tfreadme.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "tfreadme", "tfreadme")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.inputs.variables, PathBuf::from("variables.tf"));
        assert_eq!(cfg.inputs.outputs, PathBuf::from("outputs.tf"));
        assert!(cfg.render.module_name.is_none());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = AppConfig::from_toml("[render]\nmodule_name = \"network\"\n").unwrap();
        assert_eq!(cfg.render.module_name.as_deref(), Some("network"));
        assert_eq!(cfg.inputs.variables, PathBuf::from("variables.tf"));
    }

    #[test]
    fn full_file() {
        let cfg = AppConfig::from_toml(
            "[inputs]\nvariables = \"vars.tf\"\noutputs = \"outs.tf.json\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();
        assert_eq!(cfg.inputs.outputs, PathBuf::from("outs.tf.json"));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn unknown_shape_is_an_error() {
        assert!(AppConfig::from_toml("inputs = 3").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tfreadme.toml");
        std::fs::write(&path, "[inputs]\nvariables = \"a.tf\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.inputs.variables, PathBuf::from("a.tf"));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }

    #[test]
    fn roundtrips_through_toml() {
        let cfg = AppConfig::default();
        let raw = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(AppConfig::from_toml(&raw).unwrap(), cfg);
    }
}
