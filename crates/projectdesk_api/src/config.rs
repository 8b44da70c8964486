//! API configuration and secret resolution.
//!
//! # Responsibility
//! - Load `ApiConfig` from TOML with environment overrides.
//! - Resolve the database connection string by name through a `SecretStore`.
//! - Parse connection strings into a `DbTarget`.
//!
//! # Invariants
//! - The connection string never lives in the config file itself.
//! - Secret values are never logged.

use projectdesk_core::db::DbTarget;
use projectdesk_core::{default_log_level, init_logging, init_stderr_logging};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_CONNECTION_SECRET: &str = "ProjectsDb";
const SECRET_ENV_PREFIX: &str = "PROJECTDESK_SECRET_";
const BIND_ENV: &str = "PROJECTDESK_BIND";
const LOG_LEVEL_ENV: &str = "PROJECTDESK_LOG_LEVEL";
const MEMORY_TARGET: &str = ":memory:";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, error: std::io::Error },
    Parse(String),
    InvalidBind(String),
    MissingSecret(String),
    InvalidConnectionString(String),
    Logging(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, error } => write!(f, "failed to read `{}`: {error}", path.display()),
            Self::Parse(message) => write!(f, "invalid configuration: {message}"),
            Self::InvalidBind(value) => write!(f, "invalid bind address `{value}`"),
            Self::MissingSecret(name) => write!(f, "secret `{name}` is not defined"),
            Self::InvalidConnectionString(message) => {
                write!(f, "invalid connection string: {message}")
            }
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Absolute directory for rolling files; stderr when unset.
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Name of the secret that holds the connection string.
    pub connection_string_secret: String,
    /// TOML file with a `[secrets]` table; environment when unset.
    pub secrets_file: Option<PathBuf>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection_string_secret: DEFAULT_CONNECTION_SECRET.to_string(),
            secrets_file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
}

impl ApiConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Reads `path` (defaults when `None`) and applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_toml_str(&read_file(path)?)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Applies `PROJECTDESK_BIND` and `PROJECTDESK_LOG_LEVEL` when set.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(bind) = non_empty(lookup(BIND_ENV)) {
            self.server.bind = bind;
        }
        if let Some(level) = non_empty(lookup(LOG_LEVEL_ENV)) {
            self.logging.level = level;
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBind(self.server.bind.clone()))
    }

    pub fn init_logging(&self) -> Result<(), ConfigError> {
        let result = match self.logging.dir.as_deref() {
            Some(dir) => init_logging(&self.logging.level, dir),
            None => init_stderr_logging(&self.logging.level),
        };
        result.map_err(ConfigError::Logging)
    }

    /// Secret store selected by `database.secrets_file`.
    pub fn secret_store(&self) -> Result<Box<dyn SecretStore>, ConfigError> {
        match self.database.secrets_file.as_deref() {
            Some(path) => Ok(Box::new(FileSecretStore::load(path)?)),
            None => Ok(Box::new(EnvSecretStore)),
        }
    }

    /// Looks up the connection string secret and parses it.
    pub fn resolve_database(&self, store: &dyn SecretStore) -> Result<DbTarget, ConfigError> {
        let name = self.database.connection_string_secret.as_str();
        let raw = store
            .get_secret(name)?
            .ok_or_else(|| ConfigError::MissingSecret(name.to_string()))?;
        parse_connection_string(&raw)
    }
}

/// Named secret lookup.
pub trait SecretStore: Send + Sync {
    fn get_secret(&self, name: &str) -> Result<Option<String>, ConfigError>;
}

/// Reads secrets from `PROJECTDESK_SECRET_<NAME>` variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretStore;

impl SecretStore for EnvSecretStore {
    fn get_secret(&self, name: &str) -> Result<Option<String>, ConfigError> {
        Ok(non_empty(std::env::var(secret_env_var(name)).ok()))
    }
}

/// Environment variable name for a secret: `ProjectsDb` -> `PROJECTDESK_SECRET_PROJECTSDB`.
pub fn secret_env_var(name: &str) -> String {
    let suffix = name
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect::<String>();
    format!("{SECRET_ENV_PREFIX}{suffix}")
}

/// Secrets loaded from a TOML file's `[secrets]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileSecretStore {
    #[serde(default)]
    secrets: BTreeMap<String, String>,
}

impl FileSecretStore {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&read_file(path)?)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))
    }
}

impl SecretStore for FileSecretStore {
    fn get_secret(&self, name: &str) -> Result<Option<String>, ConfigError> {
        Ok(non_empty(self.secrets.get(name).cloned()))
    }
}

/// Parses `Data Source=<path>;...`, a bare path, or `:memory:`.
///
/// Keys are case-insensitive. `Mode=Memory` selects an in-memory database.
/// Unrecognized keys are ignored.
pub fn parse_connection_string(raw: &str) -> Result<DbTarget, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidConnectionString(
            "value is empty".to_string(),
        ));
    }
    if trimmed == MEMORY_TARGET {
        return Ok(DbTarget::Memory);
    }
    if !trimmed.contains('=') {
        return Ok(DbTarget::File(PathBuf::from(trimmed)));
    }

    let mut data_source = None;
    for pair in trimmed.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            ConfigError::InvalidConnectionString(format!("segment `{pair}` has no `=`"))
        })?;
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "data source" | "datasource" | "filename" => data_source = Some(value),
            "mode" if value.eq_ignore_ascii_case("memory") => return Ok(DbTarget::Memory),
            _ => {}
        }
    }

    match data_source {
        Some(MEMORY_TARGET) => Ok(DbTarget::Memory),
        Some(path) if !path.is_empty() => Ok(DbTarget::File(PathBuf::from(path))),
        _ => Err(ConfigError::InvalidConnectionString(
            "missing `Data Source`".to_string(),
        )),
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
        path: path.to_path_buf(),
        error,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
