//! Marker trait for view state.

/// Everything a view needs to render, cloneable and comparable so tests can
/// assert on whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
