//! Click counter feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Counter value
//! - `intent.rs` - User actions (Increment, Reset)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
