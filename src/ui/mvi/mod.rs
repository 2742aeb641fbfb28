//! Model-View-Intent (MVI) architecture primitives.
//!
//! Both screens keep their state behind these traits so that every
//! transition goes through a single pure function.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a screen's data
//! - **Intent**: User actions (typing, button presses, navigation)
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
