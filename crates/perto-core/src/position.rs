use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The user's resolved coordinates, obtained from the geolocation
/// collaborator at most once per session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// Why a geolocation attempt produced no position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    Unavailable,

    #[error("geolocation timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("geolocation not supported")]
    Unsupported,
}

/// Lifecycle of the session's single geolocation attempt.
///
/// `Unrequested → Pending → Resolved | Failed`. A `Failed` state stays failed
/// for the session unless the caller explicitly re-requests. Not persisted
/// across sessions.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PositionState {
    #[default]
    Unrequested,
    Pending,
    Resolved(UserPosition),
    Failed(PositionError),
}

impl PositionState {
    /// The resolved position, if there is one.
    #[must_use]
    pub fn position(&self) -> Option<UserPosition> {
        match self {
            PositionState::Resolved(position) => Some(*position),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, PositionState::Resolved(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_accessor_only_yields_resolved() {
        let resolved = PositionState::Resolved(UserPosition {
            latitude: -23.55,
            longitude: -46.63,
        });
        assert!(resolved.position().is_some());

        assert!(PositionState::Unrequested.position().is_none());
        assert!(PositionState::Pending.position().is_none());
        assert!(PositionState::Failed(PositionError::PermissionDenied)
            .position()
            .is_none());
    }

    #[test]
    fn default_state_is_unrequested() {
        assert_eq!(PositionState::default(), PositionState::Unrequested);
    }
}
