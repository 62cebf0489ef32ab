use std::time::Duration;

use perto_core::{PositionError, UserPosition};

/// Options passed to a geolocation request.
#[derive(Debug, Clone, Copy)]
pub struct PositionOptions {
    pub timeout_secs: u64,
    /// Maximum acceptable age of a cached position.
    pub maximum_age_secs: u64,
    pub high_accuracy: bool,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            maximum_age_secs: 60,
            high_accuracy: false,
        }
    }
}

/// The geolocation collaborator: one call requesting the current position.
///
/// Implementations decide where the position actually comes from — a device
/// service, a flag on the command line, a canned value in a test. The
/// [`crate::PositionTracker`] drives the lifecycle around this call and owns
/// the timeout bound, so implementations are free to take as long as their
/// backing source does.
#[allow(async_fn_in_trait)]
pub trait PositionProvider {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<UserPosition, PositionError>;
}

/// A provider that returns a configured outcome after a configurable
/// latency.
///
/// This is the explicit async boundary with latency and failure injection:
/// the CLI wraps `--lat`/`--lon` flags in it, and tests use it to exercise
/// every branch of the position lifecycle without a real device.
#[derive(Debug, Clone)]
pub struct FixedPositionProvider {
    outcome: Result<UserPosition, PositionError>,
    latency: Duration,
}

impl FixedPositionProvider {
    #[must_use]
    pub fn resolving_to(position: UserPosition) -> Self {
        Self {
            outcome: Ok(position),
            latency: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn failing_with(error: PositionError) -> Self {
        Self {
            outcome: Err(error),
            latency: Duration::ZERO,
        }
    }

    /// Adds an artificial delay before the outcome is produced.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl PositionProvider for FixedPositionProvider {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<UserPosition, PositionError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.outcome.clone()
    }
}
