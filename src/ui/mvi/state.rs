//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// `Default` is the state a screen starts in and returns to on reset.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
