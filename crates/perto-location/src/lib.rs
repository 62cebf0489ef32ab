pub mod provider;
pub mod tracker;

pub use provider::{FixedPositionProvider, PositionOptions, PositionProvider};
pub use tracker::PositionTracker;
