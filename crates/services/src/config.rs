use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_QUESTION_COUNT: usize = 5;
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(3000);

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_LANGUAGE: &str = "Arabic";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Quiz pacing: how many questions a run asks for and how long an answer stays
/// revealed before the session advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub question_count: usize,
    pub reveal_delay: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            reveal_delay: DEFAULT_REVEAL_DELAY,
        }
    }
}

impl QuizConfig {
    /// Read `QUIZ_QUESTION_COUNT` and `QUIZ_REVEAL_DELAY_MS`, defaulting unset values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a set value is not a number, or the count is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Same as [`QuizConfig::from_env`] with a custom variable lookup.
    ///
    /// # Errors
    ///
    /// See [`QuizConfig::from_env`].
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup("QUIZ_QUESTION_COUNT") {
            config.question_count = parse_positive("QUIZ_QUESTION_COUNT", &raw)?;
        }
        if let Some(raw) = lookup("QUIZ_REVEAL_DELAY_MS") {
            let ms: u64 = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
                name: "QUIZ_REVEAL_DELAY_MS",
                raw: raw.clone(),
            })?;
            config.reveal_delay = Duration::from_millis(ms);
        }
        Ok(config)
    }
}

/// Parse a strictly positive count.
///
/// # Errors
///
/// Returns `ConfigError` if `raw` is not an integer or is zero.
pub fn parse_positive(name: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::NotPositive {
            name,
            raw: raw.to_string(),
        }),
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::NotANumber {
            name,
            raw: raw.to_string(),
        }),
    }
}

/// Connection settings for an OpenAI-compatible chat completions endpoint.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    /// Language the vocabulary is drawn from.
    pub language: String,
    pub timeout: Duration,
}

impl GeneratorConfig {
    /// `None` when `QUIZ_AI_API_KEY` is unset or blank.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = lookup("QUIZ_AI_API_KEY")?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = lookup("QUIZ_AI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let model = lookup("QUIZ_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());
        let language = lookup("QUIZ_AI_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.into());
        let timeout = match lookup("QUIZ_AI_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(raw = %raw, "ignoring invalid QUIZ_AI_TIMEOUT_SECS");
                    DEFAULT_TIMEOUT
                }
            },
            None => DEFAULT_TIMEOUT,
        };
        Some(Self {
            base_url,
            api_key,
            model,
            language,
            timeout,
        })
    }
}
