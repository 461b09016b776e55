//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// An intent is a named request from the view layer to change state:
/// a keystroke in a field, a button press. Intents carry their input
/// by value so the reducer can move it straight into the next snapshot.
pub trait Intent: Send + 'static {
    /// Short, stable name used in log records.
    fn name(&self) -> &'static str;
}
