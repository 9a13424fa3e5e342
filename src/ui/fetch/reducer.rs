//! Reducer for the fetch-state lifecycle.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::FetchState;

/// Fetch lifecycle transitions, generic over the payload type.
pub struct FetchReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for FetchReducer<T> {
    type State = FetchState<T>;
    type Intent = FetchIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Start { generation } => FetchState::Loading { generation },

            FetchIntent::Succeeded { generation, data } => {
                if state.awaits(generation) {
                    FetchState::Loaded { generation, data }
                } else {
                    state
                }
            }

            FetchIntent::Failed {
                generation,
                message,
            } => {
                if state.awaits(generation) {
                    FetchState::Failed {
                        generation,
                        message,
                    }
                } else {
                    state
                }
            }

            FetchIntent::Unmount => FetchState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Books = FetchReducer<Vec<&'static str>>;

    #[test]
    fn start_transitions_to_loading() {
        let state = Books::reduce(FetchState::Idle, FetchIntent::Start { generation: 1 });
        assert_eq!(state, FetchState::Loading { generation: 1 });
    }

    #[test]
    fn success_stores_data() {
        let state = Books::reduce(
            FetchState::Loading { generation: 1 },
            FetchIntent::Succeeded {
                generation: 1,
                data: vec!["Green Eggs and Ham"],
            },
        );
        assert_eq!(state.data(), Some(&vec!["Green Eggs and Ham"]));
    }

    #[test]
    fn failure_stores_message() {
        let state = Books::reduce(
            FetchState::Loading { generation: 4 },
            FetchIntent::Failed {
                generation: 4,
                message: "HTTP 500".into(),
            },
        );
        assert_eq!(state.error_message(), Some("HTTP 500"));
    }

    #[test]
    fn stale_success_is_dropped() {
        let state = Books::reduce(
            FetchState::Loading { generation: 2 },
            FetchIntent::Succeeded {
                generation: 1,
                data: vec!["old"],
            },
        );
        assert_eq!(state, FetchState::Loading { generation: 2 });
    }

    #[test]
    fn result_after_unmount_is_dropped() {
        let state = Books::reduce(FetchState::Loading { generation: 1 }, FetchIntent::Unmount);
        let state = Books::reduce(
            state,
            FetchIntent::Failed {
                generation: 1,
                message: "late".into(),
            },
        );
        assert!(state.is_idle());
    }

    #[test]
    fn second_result_does_not_overwrite_first() {
        let state = Books::reduce(
            FetchState::Loading { generation: 1 },
            FetchIntent::Succeeded {
                generation: 1,
                data: vec!["first"],
            },
        );
        let state = Books::reduce(
            state,
            FetchIntent::Failed {
                generation: 1,
                message: "duplicate".into(),
            },
        );
        assert_eq!(state.data(), Some(&vec!["first"]));
    }

    #[test]
    fn restart_discards_loaded_data() {
        let state = FetchState::Loaded {
            generation: 1,
            data: vec!["a"],
        };
        let state = Books::reduce(state, FetchIntent::Start { generation: 2 });
        assert_eq!(state, FetchState::Loading { generation: 2 });
    }
}
