//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are user actions (taps, key presses) or system events
/// (session restore) processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
