//! Reducer for the click counter.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                click_count: state.click_count.saturating_add(1),
            },
            CounterIntent::Add(clicks) => CounterState {
                click_count: state.click_count.saturating_add(clicks),
            },
            CounterIntent::Reset => CounterState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(CounterState::default().click_count, 0);
    }

    #[test]
    fn increment_adds_one() {
        let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Increment);
        assert_eq!(state.click_count, 1);
    }

    #[test]
    fn thousand_increments() {
        let state = (0..1000).fold(CounterState::default(), |state, _| {
            CounterReducer::reduce(state, CounterIntent::Increment)
        });
        assert_eq!(state.click_count, 1000);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut state = CounterState { click_count: 2 };
        for _ in 0..3 {
            state = CounterReducer::reduce(state, CounterIntent::Reset);
            assert_eq!(state.click_count, 0);
        }
    }

    #[test]
    fn increment_after_reset_starts_over() {
        let state = CounterState { click_count: 50 };
        let state = CounterReducer::reduce(state, CounterIntent::Reset);
        let state = CounterReducer::reduce(state, CounterIntent::Increment);
        assert_eq!(state.click_count, 1);
    }

    #[test]
    fn add_applies_all_clicks_at_once() {
        let state = CounterState { click_count: 2 };
        let state = CounterReducer::reduce(state, CounterIntent::Add(40));
        assert_eq!(state.click_count, 42);
    }

    #[test]
    fn add_saturates_at_max() {
        let state = CounterState { click_count: 7 };
        let state = CounterReducer::reduce(state, CounterIntent::Add(u64::MAX));
        assert_eq!(state.click_count, u64::MAX);
    }

    #[test]
    fn increment_saturates_at_max() {
        let state = CounterState {
            click_count: u64::MAX,
        };
        let state = CounterReducer::reduce(state, CounterIntent::Increment);
        assert_eq!(state.click_count, u64::MAX);
    }
}
