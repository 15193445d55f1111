use crate::scoring::{ScoringError, WeightTriple};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_SUGGESTION_MODEL: &str = "claude-sonnet-4-5-20250929";
pub const DEFAULT_SUGGESTION_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_SUGGESTION_MAX_TOKENS: u32 = 500;
pub const DEFAULT_SUGGESTION_TIMEOUT_SECS: u64 = 30;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the scoring service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
    pub suggestions: SuggestionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "5001".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = WeightTriple::default();
        let default_weights = WeightTriple::new(
            parse_var("APP_WEIGHT_GWP", defaults.gwp)?,
            parse_var("APP_WEIGHT_CIRCULARITY", defaults.circularity)?,
            parse_var("APP_WEIGHT_COST", defaults.cost)?,
        );
        default_weights
            .validate()
            .map_err(|source| ConfigError::InvalidWeights { source })?;

        let api_key = env::var("CLAUDE_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let suggestions = SuggestionConfig {
            api_key,
            model: env::var("APP_SUGGESTION_MODEL")
                .unwrap_or_else(|_| DEFAULT_SUGGESTION_MODEL.to_string()),
            api_url: env::var("APP_SUGGESTION_API_URL")
                .unwrap_or_else(|_| DEFAULT_SUGGESTION_API_URL.to_string()),
            max_tokens: parse_var("APP_SUGGESTION_MAX_TOKENS", DEFAULT_SUGGESTION_MAX_TOKENS)?,
            timeout_secs: parse_var(
                "APP_SUGGESTION_TIMEOUT_SECS",
                DEFAULT_SUGGESTION_TIMEOUT_SECS,
            )?,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            scoring: ScoringConfig { default_weights },
            suggestions,
        })
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Weights applied when a request does not bring its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub default_weights: WeightTriple,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_weights: WeightTriple::default(),
        }
    }
}

/// Connection settings for the text-generation provider.
#[derive(Clone)]
pub struct SuggestionConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_SUGGESTION_MODEL.to_string(),
            api_url: DEFAULT_SUGGESTION_API_URL.to_string(),
            max_tokens: DEFAULT_SUGGESTION_MAX_TOKENS,
            timeout_secs: DEFAULT_SUGGESTION_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for SuggestionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { name: &'static str, value: String },
    InvalidWeights { source: ScoringError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { name, value } => {
                write!(f, "{name} must be numeric (got '{value}')")
            }
            ConfigError::InvalidWeights { source } => write!(
                f,
                "APP_WEIGHT_GWP, APP_WEIGHT_CIRCULARITY and APP_WEIGHT_COST are invalid: {source}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidWeights { source } => Some(source),
            ConfigError::InvalidPort | ConfigError::InvalidNumber { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for name in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_WEIGHT_GWP",
            "APP_WEIGHT_CIRCULARITY",
            "APP_WEIGHT_COST",
            "CLAUDE_API_KEY",
            "APP_SUGGESTION_MODEL",
            "APP_SUGGESTION_API_URL",
            "APP_SUGGESTION_MAX_TOKENS",
            "APP_SUGGESTION_TIMEOUT_SECS",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.scoring.default_weights, WeightTriple::default());
        assert_eq!(config.suggestions.max_tokens, 500);
        assert_eq!(config.suggestions.model, DEFAULT_SUGGESTION_MODEL);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 5001));
        reset_env();
    }

    #[test]
    fn rejects_default_weights_that_do_not_sum_to_one() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_WEIGHT_GWP", "0.9");
        let err = AppConfig::load().expect_err("weights sum to 1.5");
        assert!(matches!(err, ConfigError::InvalidWeights { .. }));
        reset_env();
    }

    #[test]
    fn rejects_negative_default_weight() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_WEIGHT_GWP", "1.4");
        env::set_var("APP_WEIGHT_COST", "-0.75");
        let err = AppConfig::load().expect_err("negative cost weight");
        assert!(matches!(
            err,
            ConfigError::InvalidWeights {
                source: ScoringError::WeightOutOfRange { .. }
            }
        ));
        reset_env();
    }

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CLAUDE_API_KEY", "   ");
        let config = AppConfig::load().expect("config loads");
        assert!(config.suggestions.api_key.is_none());
        reset_env();
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = SuggestionConfig {
            api_key: Some("sk-secret".to_string()),
            ..SuggestionConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
