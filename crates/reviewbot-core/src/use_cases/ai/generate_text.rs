use std::time::Duration;

use rand::Rng;
use reviewbot_aiapi_interface::{AiError, AiService};
use reviewbot_config::Config;
use tracing::{error, info, warn};

// Cap on the exponential shift so the doubling stays bounded.
const MAX_BACKOFF_SHIFT: u32 = 6;

/// Retry-governed text generation.
///
/// Worst-case backoff wall time with the defaults (5 attempts, 2 s base) is
/// about 2+4+8+16 = 30 s plus jitter; there is no sleep after the last
/// attempt.
pub struct GenerateText<'a> {
    pub ai_service: &'a dyn AiService,
    pub config: &'a Config,
}

impl GenerateText<'_> {
    #[tracing::instrument(skip_all)]
    pub async fn run(&self, prompt: &str) -> Option<String> {
        self.run_with_max_retries(prompt, self.config.ai.max_retries)
            .await
    }

    pub async fn run_with_max_retries(&self, prompt: &str, max_retries: u32) -> Option<String> {
        if prompt.trim().is_empty() {
            error!(message = "Invalid prompt provided");
            return None;
        }

        for attempt in 1..=max_retries {
            info!(attempt, max_retries, message = "Generating AI response");

            match self.ai_service.text_generate(prompt).await {
                Ok(text) => return Some(text),
                Err(AiError::NotConfigured) => {
                    error!(message = "Text generation is not configured");
                    return None;
                }
                Err(err) => {
                    warn!(
                        attempt,
                        error = %err,
                        message = "AI generation attempt failed"
                    );

                    if attempt < max_retries {
                        let delay = retry_delay(self.config.ai.retry_backoff, attempt);
                        info!(
                            delay_secs = delay.as_secs_f64(),
                            message = "Retrying after backoff"
                        );
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        error!(
            max_retries,
            message = "Failed to generate AI response after all attempts"
        );
        None
    }
}

/// Exponential backoff with jitter: `base * 2^(attempt-1) + uniform(0, 1)` seconds.
fn retry_delay(base_secs: u64, attempt: u32) -> Duration {
    let backoff = base_secs.saturating_mul(1_u64 << attempt.saturating_sub(1).min(MAX_BACKOFF_SHIFT));
    let jitter: f64 = rand::thread_rng().gen_range(0.0..1.0);
    Duration::from_secs_f64(backoff as f64 + jitter)
}
