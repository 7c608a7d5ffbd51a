use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("reqwest error: {_0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("serialization failed while {_1}: {_0}")]
    Serializing(#[source] serde_json::Error, &'static str),
    #[error("deserialization failed while {_1}: {_0}")]
    Deserializing(#[source] serde_json::Error, &'static str),
    #[error("io error while {_1}: {_0}")]
    Io(#[source] std::io::Error, &'static str),
    #[error("malformed url {_0:?}: {_1}")]
    MalformedUrl(String, String),
    #[error("Url {_0:?} returned status {_1}")]
    NonSuccessStatusCode(String, reqwest::StatusCode),
    #[error("No meal details found for id {_0:?}")]
    MealNotFound(String),
    #[error("field {_0:?} must be a string or null")]
    InvalidSlot(String),
    #[error("could not read configuration file: {_0}")]
    ReadingConfig(#[source] std::io::Error),
    #[error("could not deserialize configuration file: {_0}")]
    DeserializingConfig(#[source] toml::de::Error),
    #[error("--json cannot be combined with the interactive browse command")]
    JsonNotInteractive,
    #[error("failed to read terminal size for standard output")]
    UnableToGetTerminalSize,
}

pub trait ResultExt<T> {
    fn log_err(self) -> Option<T>;
    fn log_warn(self) -> Option<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn log_err(self) -> Option<T> {
        match self {
            Ok(inner) => Some(inner),
            Err(why) => {
                let why = why.into();
                error!("{}", why);
                None
            }
        }
    }

    fn log_warn(self) -> Option<T> {
        match self {
            Ok(inner) => Some(inner),
            Err(why) => {
                let why = why.into();
                warn!("{}", why);
                None
            }
        }
    }
}
