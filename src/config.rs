//! Runtime configuration.
//!
//! Values come from command-line flags first, then environment variables:
//! - `DR_MACADAMIA_DATA` - path to the knowledge base CSV (default: `./macadamia.csv`)
//! - `DR_MACADAMIA_PORT` - port for `serve` (default: `3000`)
//! - `DR_MACADAMIA_URL` - API base URL used in remote mode

use std::path::PathBuf;

pub const DATA_ENV: &str = "DR_MACADAMIA_DATA";
pub const PORT_ENV: &str = "DR_MACADAMIA_PORT";
pub const URL_ENV: &str = "DR_MACADAMIA_URL";

/// File name of the knowledge base table.
pub const DATA_FILE: &str = "macadamia.csv";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_URL: &str = "http://localhost:3000/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Knowledge base table to load.
    pub data_path: PathBuf,
    /// Port the HTTP API binds on 127.0.0.1.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let data_path = std::env::var_os(DATA_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_path);

        let port = parse_port(std::env::var(PORT_ENV).ok().as_deref());

        Self { data_path, port }
    }

    /// Override values from the environment with explicit flags.
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, port: Option<u16>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_FILE),
            port: DEFAULT_PORT,
        }
    }
}

/// `./macadamia.csv`, unless only the per-user data directory has one.
pub fn default_data_path() -> PathBuf {
    pick_data_path(PathBuf::from(DATA_FILE), user_data_path())
}

fn pick_data_path(local: PathBuf, user: Option<PathBuf>) -> PathBuf {
    if local.exists() {
        return local;
    }
    user.filter(|path| path.exists()).unwrap_or(local)
}

/// Knowledge base location inside the per-user data directory.
pub fn user_data_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "dr-macadamia")
        .map(|dirs| dirs.data_dir().join(DATA_FILE))
}

/// API base URL for remote mode.
pub fn server_url(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var(URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_URL.to_string())
}

fn parse_port(value: Option<&str>) -> u16 {
    match value.map(str::trim) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}: {:?}", PORT_ENV, raw);
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}
