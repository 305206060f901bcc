//! Server configuration.
//!
//! Loaded once at startup from a YAML file. Every field has a default so an
//! empty (or absent) file yields a working local setup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// File consulted when no explicit config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "server.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub listen_addr: String,
    /// Idle timeout applied to every read on a client connection.
    pub read_timeout_secs: u64,
    /// Upper bound on a single request or header line.
    pub max_line_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            read_timeout_secs: 2,
            max_line_bytes: 8 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

/// Filesystem layout. Relative paths are resolved against `base_dir`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    pub base_dir: PathBuf,
    pub webroot: PathBuf,
    /// Document served for `/`, relative to the webroot.
    pub default_document: String,
    pub uploads_dir: PathBuf,
    /// Image sent with every 404, when present.
    pub not_found_image: Option<PathBuf>,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            webroot: PathBuf::from("webroot"),
            default_document: "index.html".to_string(),
            uploads_dir: PathBuf::from("upload"),
            not_found_image: Some(PathBuf::from("special_images/not_found_duck.jpg")),
        }
    }
}

impl StaticConfig {
    pub fn webroot_path(&self) -> PathBuf {
        self.base_dir.join(&self.webroot)
    }

    pub fn uploads_path(&self) -> PathBuf {
        self.base_dir.join(&self.uploads_dir)
    }

    pub fn not_found_image_path(&self) -> Option<PathBuf> {
        self.not_found_image.as_ref().map(|p| self.base_dir.join(p))
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        // serde_yaml rejects an empty document, treat it as "all defaults"
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn with_listen_override(mut self, listen_addr: Option<String>) -> Self {
        if let Some(addr) = listen_addr {
            self.server.listen_addr = addr;
        }
        self
    }
}
