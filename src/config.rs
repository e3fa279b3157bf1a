//! Executor configuration.

use std::time::Duration;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value} - {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Knobs for one chain execution.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Upper bound on total stage visits, counting revisits through backward
    /// jumps. The executor fails with `ChainError::LoopExceeded` beyond it.
    pub max_stage_visits: usize,
    /// Deadline for a single backend call; `None` leaves timeouts entirely
    /// to the backend.
    pub backend_timeout: Option<Duration>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_stage_visits: 64,
            backend_timeout: None,
        }
    }
}

impl ChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_stage_visits(mut self, max_stage_visits: usize) -> Self {
        self.max_stage_visits = max_stage_visits;
        self
    }

    pub fn with_backend_timeout(mut self, timeout: Duration) -> Self {
        self.backend_timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_stage_visits == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_stage_visits",
                value: "0".to_string(),
                reason: "a chain needs at least one stage visit",
            });
        }
        if let Some(timeout) = self.backend_timeout {
            if timeout.is_zero() {
                return Err(ConfigError::InvalidValue {
                    field: "backend_timeout",
                    value: "0s".to_string(),
                    reason: "use None to disable the timeout",
                });
            }
        }
        Ok(())
    }
}
