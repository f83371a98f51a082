use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use once_cell::sync::Lazy;

use crate::logging::LoggerVersion;

static DEFAULT_LOG_NAME: &str = "runsim.log";
static ENV_DATA_DIR: &str = "RUNSIM_DATA_DIR";
static ENV_LOGGER: &str = "RUNSIM_LOGGER";

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("dev", "runsim", "runsim"));

#[derive(Debug, Clone)]
pub struct AppConfig {
    data_dir: PathBuf,
    log_path: PathBuf,
    logger_version: LoggerVersion,
}

impl AppConfig {
    /// Construct [`AppConfig`] by resolving the data directory and logger version using the
    /// provided overrides, environment variables, and platform defaults.
    pub fn discover(
        data_dir_override: Option<PathBuf>,
        logger_override: Option<LoggerVersion>,
    ) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir_override)?;
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).with_context(|| {
                format!("Failed to create data directory at {}", data_dir.display())
            })?;
        }
        let logger_version = resolve_logger_version(logger_override)?;
        Ok(Self::from_data_dir(data_dir).with_logger_version(logger_version))
    }

    /// Construct [`AppConfig`] directly from a resolved data directory, bound to the default logger.
    pub fn from_data_dir(data_dir: PathBuf) -> Self {
        let log_path = data_dir.join(DEFAULT_LOG_NAME);
        Self {
            data_dir,
            log_path,
            logger_version: LoggerVersion::default(),
        }
    }

    pub fn with_logger_version(mut self, version: LoggerVersion) -> Self {
        self.logger_version = version;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn logger_version(&self) -> LoggerVersion {
        self.logger_version
    }
}

fn resolve_logger_version(logger_override: Option<LoggerVersion>) -> Result<LoggerVersion> {
    if let Some(version) = logger_override {
        return Ok(version);
    }

    match env::var(ENV_LOGGER) {
        Ok(value) => value
            .parse::<LoggerVersion>()
            .with_context(|| format!("invalid {} value", ENV_LOGGER)),
        Err(_) => Ok(LoggerVersion::default()),
    }
}

fn resolve_data_dir(data_dir_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir_override {
        return Ok(dir);
    }

    if let Ok(env_dir) = env::var(ENV_DATA_DIR) {
        return Ok(PathBuf::from(env_dir));
    }

    if cfg!(debug_assertions) {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let dev_dir = manifest_dir.join("..").join("tmp").join("dev-runsim");
        return Ok(dev_dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(base) = BaseDirs::new() {
            return Ok(base.home_dir().join(".runsim"));
        }
    }

    if let Some(project) = &*PROJECT_DIRS {
        return Ok(project.data_dir().to_path_buf());
    }

    if let Some(base) = BaseDirs::new() {
        return Ok(base.home_dir().join(".runsim"));
    }

    Ok(env::current_dir()?.join(".runsim"))
}
