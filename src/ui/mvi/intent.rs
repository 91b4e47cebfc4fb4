//! Marker trait for intents.

/// Something that happened: a key press, a service reply, a timer expiry.
pub trait Intent: Send + 'static {}
