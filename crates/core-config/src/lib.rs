//! Configuration loading and parsing.
//!
//! Parses `ledit.toml` (or an override path provided by the binary): the
//! default cipher key under `[cipher] shift` and an optional log file path
//! under `[log] file`. Unknown fields are ignored (TOML deserialization
//! tolerance) so the file format can evolve without immediate warnings.
//! An absent file yields defaults; a present-but-malformed file is an error
//! surfaced to the caller rather than silently ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::info;

/// Default discovery name in the working directory.
pub const CONFIG_FILE_NAME: &str = "ledit.toml";

fn default_shift() -> u8 {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct CipherConfig {
    /// Key used when the cipher prompt is left empty.
    #[serde(default = "default_shift")]
    pub shift: u8,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            shift: default_shift(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LogConfig {
    /// Log file path; the binary falls back to `ledit.log` beside the cwd.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub cipher: CipherConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Original file string, kept for diagnostics (None when defaulted).
    pub raw: Option<String>,
    pub file: ConfigFile,
}

/// Load configuration from `override_path` when given, else discover
/// `ledit.toml` in the working directory, else defaults.
pub fn load_from(override_path: Option<PathBuf>) -> Result<Config> {
    let path = override_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    if !path.exists() {
        info!(target: "config", path = %path.display(), "config_absent_using_defaults");
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let file: ConfigFile = toml::from_str(&raw)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    info!(target: "config", path = %path.display(), shift = file.cipher.shift, "config_loaded");
    Ok(Config {
        raw: Some(raw),
        file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_from(Some(dir.path().join("nope.toml"))).unwrap();
        assert_eq!(cfg.file.cipher.shift, 3);
        assert!(cfg.file.log.file.is_none());
        assert!(cfg.raw.is_none());
    }

    #[test]
    fn parses_known_sections_and_tolerates_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledit.toml");
        std::fs::write(
            &path,
            "[cipher]\nshift = 7\n\n[log]\nfile = \"run.log\"\n\n[future]\nknob = true\n",
        )
        .unwrap();
        let cfg = load_from(Some(path)).unwrap();
        assert_eq!(cfg.file.cipher.shift, 7);
        assert_eq!(cfg.file.log.file.as_deref().unwrap().to_str(), Some("run.log"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[cipher\nshift = ").unwrap();
        assert!(load_from(Some(path)).is_err());
    }
}
