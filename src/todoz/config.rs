use crate::error::{Result, TodozError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DATA_FILE: &str = "todos.json";
const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;
const DEFAULT_USERS_API_URL: &str = "https://reqres.in/api/users";
const DEFAULT_USERS_API_KEY: &str = "reqres-free-v1";

/// Configuration for both the todo service and the user directory client,
/// stored in `config.json` and overridable from the environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Port the todo service listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface the todo service binds
    #[serde(default = "default_host")]
    pub host: String,

    /// JSON file holding the todo collection
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Largest accepted request body
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Paginated user listing endpoint
    #[serde(default = "default_users_api_url")]
    pub users_api_url: String,

    /// Value sent in the `x-api-key` header
    #[serde(default = "default_users_api_key")]
    pub users_api_key: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

fn default_users_api_url() -> String {
    DEFAULT_USERS_API_URL.to_string()
}

fn default_users_api_key() -> String {
    DEFAULT_USERS_API_KEY.to_string()
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            data_file: default_data_file(),
            max_body_bytes: default_max_body_bytes(),
            users_api_url: default_users_api_url(),
            users_api_key: default_users_api_key(),
        }
    }
}

/// Platform config directory (e.g. `~/.config/todoz`), if one can be determined.
pub fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "todoz", "todoz").map(|dirs| dirs.config_dir().to_path_buf())
}

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodozError::Io)?;
        let config: TodozConfig =
            serde_json::from_str(&content).map_err(TodozError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodozError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodozError::Serialization)?;
        fs::write(config_path, content).map_err(TodozError::Io)?;
        Ok(())
    }

    /// Apply environment overrides. `lookup` is `std::env::var` in production.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.port = parse_env("PORT", &port)?;
        }
        if let Some(path) = lookup("TODOZ_DATA_FILE") {
            self.data_file = PathBuf::from(path);
        }
        if let Some(bytes) = lookup("TODOZ_MAX_BODY_BYTES") {
            self.max_body_bytes = parse_env("TODOZ_MAX_BODY_BYTES", &bytes)?;
        }
        if let Some(url) = lookup("TODOZ_USERS_API_URL") {
            self.users_api_url = url;
        }
        if let Some(key) = lookup("TODOZ_USERS_API_KEY") {
            self.users_api_key = key;
        }
        Ok(())
    }

    /// `load` followed by `apply_env` with the process environment.
    pub fn resolve<P: AsRef<Path>>(config_dir: Option<P>) -> Result<Self> {
        let mut config = match config_dir {
            Some(dir) => Self::load(dir)?,
            None => match default_config_dir() {
                Some(dir) => Self::load(dir)?,
                None => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| TodozError::Config(format!("invalid value for {}: {:?}", key, raw)))
}
