//! Intents for the click counter.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// Click button pressed.
    Increment,
    /// Several clicks at once (scripted input).
    Add(u64),
    /// Reset button pressed, or the session ended.
    Reset,
}

impl Intent for CounterIntent {}
