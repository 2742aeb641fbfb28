//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions such as editing a field, pressing the
/// login button or tapping the counter. Reducers consume them to produce
/// new states.
pub trait Intent: Send + 'static {}
