use crate::ui::backdrop::intent::BackdropIntent;
use crate::ui::backdrop::state::BackdropState;
use crate::ui::mvi::Reducer;

pub struct BackdropReducer;

impl Reducer for BackdropReducer {
    type State = BackdropState;
    type Intent = BackdropIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BackdropIntent::Begin { target, started_at } => BackdropState {
                incoming: Some(target),
                incoming_opacity: 1.0,
                generation: state.generation.wrapping_add(1),
                started_at: Some(started_at),
                ..state
            },
            BackdropIntent::Commit { generation } if generation == state.generation => {
                match state.incoming {
                    Some(incoming) => BackdropState {
                        base: incoming,
                        incoming_opacity: 0.0,
                        started_at: None,
                        ..state
                    },
                    None => state,
                }
            }
            // Superseded by a newer transition.
            BackdropIntent::Commit { .. } => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{FORMAL_GRADIENT, HUMOROUS_GRADIENT, POETIC_GRADIENT};
    use std::time::Instant;

    fn begin(state: BackdropState, target: crate::ui::theme::Gradient) -> BackdropState {
        BackdropReducer::reduce(
            state,
            BackdropIntent::Begin {
                target,
                started_at: Instant::now(),
            },
        )
    }

    #[test]
    fn begin_shows_overlay_and_bumps_generation() {
        let state = begin(BackdropState::default(), POETIC_GRADIENT);
        assert_eq!(state.base, FORMAL_GRADIENT);
        assert_eq!(state.incoming, Some(POETIC_GRADIENT));
        assert_eq!(state.incoming_opacity, 1.0);
        assert_eq!(state.generation, 1);
        assert!(state.is_transitioning());
    }

    #[test]
    fn commit_promotes_overlay_and_hides_it() {
        let state = begin(BackdropState::default(), POETIC_GRADIENT);
        let state = BackdropReducer::reduce(state, BackdropIntent::Commit { generation: 1 });
        assert_eq!(state.base, POETIC_GRADIENT);
        assert_eq!(state.incoming_opacity, 0.0);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn stale_commit_is_ignored() {
        let state = begin(BackdropState::default(), POETIC_GRADIENT);
        let state = begin(state, HUMOROUS_GRADIENT);

        let after_stale =
            BackdropReducer::reduce(state.clone(), BackdropIntent::Commit { generation: 1 });
        assert_eq!(after_stale, state);
        assert_eq!(after_stale.base, FORMAL_GRADIENT);

        let committed = BackdropReducer::reduce(after_stale, BackdropIntent::Commit { generation: 2 });
        assert_eq!(committed.base, HUMOROUS_GRADIENT);
    }

    #[test]
    fn commit_without_overlay_is_noop() {
        let state = BackdropState::default();
        let next = BackdropReducer::reduce(state.clone(), BackdropIntent::Commit { generation: 0 });
        assert_eq!(next, state);
    }
}
