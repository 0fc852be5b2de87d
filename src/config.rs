use crate::error::Error;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Settings for the JavaScript bindings. The codec functions themselves are
/// not configurable.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Config {
    pub log_level: LogLevel,

    /// Longest input, in bytes, the bindings will hand to the codec.
    pub max_input_length: Option<usize>,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Config, Error> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn check_input(&self, input: &str) -> Result<(), Error> {
        match self.max_input_length {
            Some(limit) if input.len() > limit => Err(Error::InputTooLong {
                length: input.len(),
                limit,
            }),
            _ => Ok(()),
        }
    }
}
