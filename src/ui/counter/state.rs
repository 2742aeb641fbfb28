use crate::ui::mvi::UiState;

/// Number of clicks on the home screen since login or the last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub click_count: u64,
}

impl UiState for CounterState {}
