pub mod classify;
pub mod grid;
pub mod host;
pub mod stats;
pub mod tracker;

// Re-exports for convenience
pub use classify::{classify, is_qualifying, Classification};
pub use grid::GridPos;
pub use host::{EntityId, EntityLookup, GameEntity, HostError, StatEntry};
pub use stats::stat_value;
pub use tracker::{BlockerMarker, RitualTracker};
