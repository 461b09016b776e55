//! Base trait for observable state in the MVI architecture.

/// Marker trait for state snapshots.
///
/// Snapshots are replaced wholesale, never mutated in place:
/// - `Clone` so a reducer can derive the next snapshot from a copy
/// - `PartialEq` so observers and tests can compare snapshots
/// - `Default` is the initial state of a freshly built channel
/// - `Send + Sync` so snapshots can be shared with observers on any thread
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
