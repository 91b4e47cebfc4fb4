//! Two-layer background: a committed base gradient plus an incoming overlay
//! that fades in after a style change.

mod intent;
mod reducer;
mod state;

pub use intent::BackdropIntent;
pub use reducer::BackdropReducer;
pub use state::BackdropState;
