//! Server configuration from the environment

use std::str::FromStr;

use verse_core::PracticeSettings;

use crate::error::ApiError;

/// Server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Largest request text, in bytes, a handler will work on.
    pub max_input_bytes: usize,
    pub practice: PracticeSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_input_bytes: 64 * 1024,
            practice: PracticeSettings::default(),
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT`, `MAX_INPUT_BYTES`, `WORDS_PER_CHUNK`,
    /// `PASS_THRESHOLD` and `MAX_ATTEMPTS_PER_WORD`, falling back to defaults
    /// for unset variables.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let practice = PracticeSettings {
            words_per_chunk: parse_or(
                &lookup,
                "WORDS_PER_CHUNK",
                defaults.practice.words_per_chunk,
            )?,
            pass_threshold: parse_or(
                &lookup,
                "PASS_THRESHOLD",
                defaults.practice.pass_threshold,
            )?
            .min(100),
            max_attempts_per_word: parse_or(
                &lookup,
                "MAX_ATTEMPTS_PER_WORD",
                defaults.practice.max_attempts_per_word,
            )?,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            max_input_bytes: parse_or(&lookup, "MAX_INPUT_BYTES", defaults.max_input_bytes)?,
            practice,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ApiError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ApiError::Config(format!("{} has invalid value {:?}", key, raw))),
        None => Ok(default),
    }
}
