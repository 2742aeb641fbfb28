//! Login session feature module.
//!
//! Tracks the credentials being entered, the last validation error and the
//! logged-in flag.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Session record (credentials, error, login flag)
//! - `intent.rs` - User actions (edit fields, submit, clear)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `validation.rs` - Credential checks and their error messages

mod intent;
mod reducer;
mod state;
mod validation;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::SessionState;
pub use validation::{authenticate, is_valid_credentials, validate_input, LoginError};
