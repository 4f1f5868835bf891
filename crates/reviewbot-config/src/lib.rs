//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{AiDriver, ApiDriver, DriverError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API personal token.
    pub token: String,
    /// GitHub API request timeout (in milliseconds).
    pub request_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    /// AI driver.
    pub driver: AiDriver,
    /// Google options.
    pub google: AiGoogleConfig,
    /// Maximum generation attempts per request.
    pub max_retries: u32,
    /// Base backoff between generation attempts (in seconds).
    pub retry_backoff: u64,
}

#[derive(Debug, Clone)]
pub struct AiGoogleConfig {
    /// Generative API root URL.
    pub root_url: String,
    /// API key.
    pub api_key: String,
    /// Model name.
    pub model: String,
    /// Request timeout (in milliseconds).
    pub request_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
    /// Server webhook secret.
    pub webhook_secret: String,
    /// Disable webhook signature verification.
    pub disable_webhook_signature: bool,
    /// Webhook endpoint path.
    pub webhook_path: String,
    /// Health check endpoint path.
    pub health_check_path: String,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot username.
    pub name: String,
    /// API options.
    pub api: ApiConfig,
    /// AI options.
    pub ai: AiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version.
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            name: env_to_str("BOT_NAME", "reviewbot"),
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("BOT_API_DRIVER", "github"))
                    .unwrap_or(ApiDriver::GitHub),
                github: ApiGitHubConfig {
                    root_url: env_to_str("BOT_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    token: env_to_str("BOT_API_GITHUB_TOKEN", ""),
                    request_timeout: env_to_u64("BOT_API_GITHUB_REQUEST_TIMEOUT", 10_000),
                },
            },
            ai: AiConfig {
                driver: AiDriver::from_str(&env_to_str("BOT_AI_DRIVER", "google"))
                    .unwrap_or(AiDriver::Google),
                google: AiGoogleConfig {
                    root_url: env_to_str(
                        "BOT_AI_GOOGLE_ROOT_URL",
                        "https://generativelanguage.googleapis.com/v1beta",
                    ),
                    api_key: env_to_str("BOT_AI_GOOGLE_API_KEY", ""),
                    model: env_to_str("BOT_AI_GOOGLE_MODEL", "gemini-2.0-flash"),
                    request_timeout: env_to_u64("BOT_AI_GOOGLE_REQUEST_TIMEOUT", 30_000),
                },
                max_retries: env_to_u32("BOT_AI_MAX_RETRIES", 5),
                retry_backoff: env_to_u64("BOT_AI_RETRY_BACKOFF", 2),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            server: ServerConfig {
                bind_ip: env_to_str("BOT_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("BOT_SERVER_BIND_PORT", 8008),
                workers_count: env_to_optional_u16("BOT_SERVER_WORKERS_COUNT", None),
                webhook_secret: env_to_str("BOT_SERVER_WEBHOOK_SECRET", ""),
                disable_webhook_signature: env_to_bool(
                    "BOT_SERVER_DISABLE_WEBHOOK_SIGNATURE",
                    false,
                ),
                webhook_path: env_to_str("BOT_SERVER_WEBHOOK_PATH", "/webhook"),
                health_check_path: env_to_str("BOT_SERVER_HEALTH_CHECK_PATH", "/health"),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}
