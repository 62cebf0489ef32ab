use std::time::Duration;

use perto_core::{PositionError, PositionState};

use crate::provider::{PositionOptions, PositionProvider};

/// Drives the session's geolocation lifecycle:
/// `Unrequested → Pending → Resolved | Failed`.
///
/// The provider call is bounded by a timeout; when it elapses the state
/// transitions to `Failed(Timeout)` rather than staying pending forever. A
/// failed state persists until the caller explicitly re-resolves.
#[derive(Debug)]
pub struct PositionTracker {
    state: PositionState,
    timeout: Duration,
}

impl PositionTracker {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            state: PositionState::Unrequested,
            timeout,
        }
    }

    #[must_use]
    pub fn state(&self) -> &PositionState {
        &self.state
    }

    /// Runs one geolocation attempt through the given provider and settles
    /// the state.
    pub async fn resolve<P: PositionProvider>(&mut self, provider: &P) -> &PositionState {
        let options = PositionOptions {
            timeout_secs: self.timeout.as_secs(),
            ..PositionOptions::default()
        };

        self.state = PositionState::Pending;

        self.state = match tokio::time::timeout(self.timeout, provider.current_position(&options))
            .await
        {
            Ok(Ok(position)) => PositionState::Resolved(position),
            Ok(Err(error)) => {
                tracing::warn!(error = %error, "geolocation attempt failed");
                PositionState::Failed(error)
            }
            Err(_) => {
                let secs = self.timeout.as_secs();
                tracing::warn!(timeout_secs = secs, "geolocation attempt timed out");
                PositionState::Failed(PositionError::Timeout { secs })
            }
        };

        &self.state
    }
}

#[cfg(test)]
mod tests {
    use perto_core::UserPosition;

    use crate::provider::FixedPositionProvider;

    use super::*;

    fn position() -> UserPosition {
        UserPosition {
            latitude: -23.55,
            longitude: -46.63,
        }
    }

    #[tokio::test]
    async fn starts_unrequested() {
        let tracker = PositionTracker::new(Duration::from_secs(10));
        assert_eq!(tracker.state(), &PositionState::Unrequested);
    }

    #[tokio::test]
    async fn resolve_settles_to_resolved_on_success() {
        let mut tracker = PositionTracker::new(Duration::from_secs(10));
        let provider = FixedPositionProvider::resolving_to(position());

        let state = tracker.resolve(&provider).await;
        assert_eq!(state, &PositionState::Resolved(position()));
        assert!(tracker.state().is_resolved());
    }

    #[tokio::test]
    async fn resolve_settles_to_failed_on_provider_error() {
        let mut tracker = PositionTracker::new(Duration::from_secs(10));
        let provider = FixedPositionProvider::failing_with(PositionError::PermissionDenied);

        let state = tracker.resolve(&provider).await;
        assert_eq!(state, &PositionState::Failed(PositionError::PermissionDenied));
    }

    #[tokio::test(start_paused = true)]
    async fn resolve_times_out_instead_of_staying_pending() {
        let mut tracker = PositionTracker::new(Duration::from_secs(10));
        let provider = FixedPositionProvider::resolving_to(position())
            .with_latency(Duration::from_secs(30));

        let state = tracker.resolve(&provider).await;
        assert_eq!(
            state,
            &PositionState::Failed(PositionError::Timeout { secs: 10 })
        );
    }

    #[tokio::test]
    async fn re_resolve_can_recover_from_failure() {
        let mut tracker = PositionTracker::new(Duration::from_secs(10));

        let failing = FixedPositionProvider::failing_with(PositionError::Unavailable);
        tracker.resolve(&failing).await;
        assert_eq!(tracker.state(), &PositionState::Failed(PositionError::Unavailable));

        let working = FixedPositionProvider::resolving_to(position());
        tracker.resolve(&working).await;
        assert!(tracker.state().is_resolved());
    }
}
