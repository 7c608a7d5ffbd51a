use lazy_static::lazy_static;
use serde::Deserialize;
use structopt::StructOpt;
use tracing::warn;

use std::{fs, path::Path, time::Duration as StdDuration};

use crate::{
    error::{Error, ResultExt},
    THE_MEAL_DB_API,
};

use self::args::{Args, Command};

pub mod args;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

lazy_static! {
    pub static ref CONF: Config = Config::assemble();
}

#[derive(Debug)]
pub struct Config {
    pub args: Args,
    file: Option<ConfigFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all(deserialize = "kebab-case"))]
pub struct ConfigFile {
    #[serde(default)]
    api_base: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl ConfigFile {
    pub fn load_or_log<P: AsRef<Path>>(path: P) -> Option<Self> {
        let file = fs::read_to_string(path)
            .map_err(Error::ReadingConfig)
            .log_warn()?;
        toml::from_str(&file)
            .map_err(Error::DeserializingConfig)
            .log_err()
    }
}

impl Config {
    #[cfg(not(test))]
    fn assemble() -> Self {
        let args = Args::from_args();
        let default_config_path = || {
            let dirs = directories_next::ProjectDirs::from("com", "themealdb", "desserts")?;
            Some(dirs.config_dir().join("config.toml"))
        };
        let file = args
            .config
            .clone()
            .or_else(default_config_path)
            .and_then(ConfigFile::load_or_log);
        Self { args, file }
    }

    #[cfg(test)]
    fn assemble() -> Self {
        let args = Args::from_iter(&["desserts", "--color", "never"]);
        Self { args, file: None }
    }

    pub fn cmd(&self) -> Command {
        self.args.command.clone().unwrap_or_default()
    }

    /// Base url of the api.
    ///
    /// Arguments take precedence over the configuration file.
    pub fn api_base(&self) -> &str {
        let from_file = || self.file.as_ref()?.api_base.as_deref();
        self.args
            .api
            .as_deref()
            .or_else(from_file)
            .unwrap_or(THE_MEAL_DB_API)
    }

    /// Timeout for a single request.
    ///
    /// Arguments take precedence over the configuration file. A timeout of
    /// zero would fail every request and is replaced by the default.
    pub fn request_timeout(&self) -> StdDuration {
        let from_file = || self.file.as_ref()?.timeout_secs;
        let secs = match self.args.timeout.or_else(from_file) {
            Some(0) => {
                warn!("Ignoring a timeout of 0 seconds, using {}s", DEFAULT_TIMEOUT_SECS);
                DEFAULT_TIMEOUT_SECS
            }
            Some(secs) => secs,
            None => DEFAULT_TIMEOUT_SECS,
        };
        StdDuration::from_secs(secs)
    }
}
