//! Configuration validation.

use std::fmt::Write;

use reviewbot_config::{ApiDriver, Config};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        write!(error, "  - Missing env. var.: {}", name).unwrap();
    }

    let mut error = String::new();

    // Check server configuration
    if config.name.is_empty() {
        _missing(&mut error, "BOT_NAME");
    }
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "BOT_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "BOT_SERVER_BIND_PORT");
    }
    if config.server.webhook_path.is_empty() {
        _missing(&mut error, "BOT_SERVER_WEBHOOK_PATH");
    }

    // Check API credentials
    if config.api.driver == ApiDriver::GitHub && config.api.github.token.is_empty() {
        _missing(&mut error, "BOT_API_GITHUB_TOKEN");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}
