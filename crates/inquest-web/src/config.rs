use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub upload_dir: Option<String>,
    pub max_upload_mb: Option<usize>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub upload_dir: PathBuf,
    pub max_upload_mb: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: 5000,
            upload_dir: PathBuf::from("uploads"),
            max_upload_mb: 50,
        }
    }
}

impl Settings {
    /// Resolve settings by cascading: defaults, then platform config,
    /// then CWD `.inquest.toml`, then environment variables.
    pub fn load() -> Self {
        let platform = config_path().and_then(|p| load_from_path(&p));
        let cwd = load_from_path(&PathBuf::from(".inquest.toml"));
        let file = match (platform, cwd) {
            (None, None) => ConfigFile::default(),
            (Some(p), None) => p,
            (None, Some(c)) => c,
            (Some(p), Some(c)) => merge(p, c),
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Apply a config file and environment lookups over the defaults.
    /// Split out from [`Settings::load`] so tests can inject both.
    pub fn resolve(file: ConfigFile, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Settings::default();
        if let Some(server) = file.server {
            if let Some(port) = server.port {
                settings.port = port;
            }
            if let Some(dir) = server.upload_dir {
                settings.upload_dir = PathBuf::from(dir);
            }
            if let Some(mb) = server.max_upload_mb {
                settings.max_upload_mb = mb;
            }
        }
        if let Some(port) = env("INQUEST_PORT").and_then(|v| v.parse().ok()) {
            settings.port = port;
        }
        if let Some(dir) = env("INQUEST_UPLOAD_DIR") {
            settings.upload_dir = PathBuf::from(dir);
        }
        if let Some(mb) = env("INQUEST_MAX_UPLOAD_MB").and_then(|v| v.parse().ok()) {
            settings.max_upload_mb = mb;
        }
        settings
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

/// Platform config directory path: `<config_dir>/inquest/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("inquest").join("config.toml"))
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        server: Some(ServerConfig {
            port: overlay
                .server
                .as_ref()
                .and_then(|s| s.port)
                .or_else(|| base.server.as_ref().and_then(|s| s.port)),
            upload_dir: overlay
                .server
                .as_ref()
                .and_then(|s| s.upload_dir.clone())
                .or_else(|| base.server.as_ref().and_then(|s| s.upload_dir.clone())),
            max_upload_mb: overlay
                .server
                .as_ref()
                .and_then(|s| s.max_upload_mb)
                .or_else(|| base.server.as_ref().and_then(|s| s.max_upload_mb)),
        }),
    }
}
