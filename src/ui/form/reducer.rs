use crate::transform::strip_emphasis;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::FormState;
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SetQuote(quote) if !state.is_loading() => FormState { quote, ..state },
            FormIntent::SetStyle(style) if !state.is_loading() => FormState { style, ..state },
            FormIntent::FocusNext => FormState {
                focus: state.focus.next(),
                ..state
            },
            FormIntent::FocusPrev => FormState {
                focus: state.focus.prev(),
                ..state
            },
            FormIntent::ScrollResult(offset) => FormState {
                result_scroll: offset,
                ..state
            },
            FormIntent::SubmitRejected(error) if !state.is_loading() => FormState {
                result: None,
                result_scroll: 0,
                error: Some(error.user_message().to_string()),
                ..state
            },
            FormIntent::SubmitStarted { id } if !state.is_loading() => FormState {
                result: None,
                error: None,
                result_scroll: 0,
                in_flight: Some(id),
                ..state
            },
            FormIntent::Finished { id, outcome } if state.in_flight == Some(id) => {
                let (result, error) = match outcome {
                    Ok(text) => (Some(strip_emphasis(&text)), None),
                    Err(err) => (None, Some(err.user_message().to_string())),
                };
                FormState {
                    result,
                    error,
                    result_scroll: 0,
                    in_flight: None,
                    ..state
                }
            }
            // Disabled while loading, or a completion for a stale submission.
            _ => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{Style, SubmissionId, TransformError};

    fn loading(id: SubmissionId) -> FormState {
        FormState {
            quote: "Stay hungry".into(),
            in_flight: Some(id),
            ..FormState::default()
        }
    }

    #[test]
    fn set_quote_is_verbatim() {
        let state = FormReducer::reduce(
            FormState::default(),
            FormIntent::SetQuote("  padded\n".into()),
        );
        assert_eq!(state.quote, "  padded\n");
    }

    #[test]
    fn edits_ignored_while_loading() {
        let id = SubmissionId::new();
        let state = FormReducer::reduce(loading(id), FormIntent::SetQuote("changed".into()));
        let state = FormReducer::reduce(state, FormIntent::SetStyle(Style::Humorous));
        assert_eq!(state, loading(id));
    }

    #[test]
    fn rejected_sets_validation_message_and_clears_result() {
        let state = FormState {
            result: Some("old".into()),
            ..FormState::default()
        };
        let state = FormReducer::reduce(state, FormIntent::SubmitRejected(TransformError::Validation));
        assert_eq!(state.error.as_deref(), Some("Please enter a quote."));
        assert!(state.result.is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn started_clears_previous_outcome() {
        let state = FormState {
            quote: "q".into(),
            result: Some("old result".into()),
            error: Some("old error".into()),
            ..FormState::default()
        };
        let id = SubmissionId::new();
        let state = FormReducer::reduce(state, FormIntent::SubmitStarted { id });
        assert!(state.is_loading());
        assert!(state.result.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn second_start_ignored_while_loading() {
        let first = SubmissionId::new();
        let state = FormReducer::reduce(
            loading(first),
            FormIntent::SubmitStarted {
                id: SubmissionId::new(),
            },
        );
        assert_eq!(state.in_flight, Some(first));
    }

    #[test]
    fn success_strips_emphasis_and_clears_loading() {
        let id = SubmissionId::new();
        let state = FormReducer::reduce(
            loading(id),
            FormIntent::Finished {
                id,
                outcome: Ok("**Be** *bold*".into()),
            },
        );
        assert_eq!(state.result.as_deref(), Some("Be bold"));
        assert!(state.error.is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn failure_sets_user_message_and_clears_loading() {
        let id = SubmissionId::new();
        let state = FormReducer::reduce(
            loading(id),
            FormIntent::Finished {
                id,
                outcome: Err(TransformError::transport("refused")),
            },
        );
        assert_eq!(state.error.as_deref(), Some("Server connection failed."));
        assert!(state.result.is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let id = SubmissionId::new();
        let state = FormReducer::reduce(
            loading(id),
            FormIntent::Finished {
                id: SubmissionId::new(),
                outcome: Ok("late".into()),
            },
        );
        assert_eq!(state, loading(id));
    }

    #[test]
    fn new_result_starts_scrolled_to_top() {
        let id = SubmissionId::new();
        let state = FormState {
            result_scroll: 7,
            ..loading(id)
        };
        let state = FormReducer::reduce(
            state,
            FormIntent::Finished {
                id,
                outcome: Ok("fresh".into()),
            },
        );
        assert_eq!(state.result_scroll, 0);

        let state = FormReducer::reduce(state, FormIntent::ScrollResult(3));
        assert_eq!(state.result_scroll, 3);
    }

    #[test]
    fn focus_moves_even_while_loading() {
        let id = SubmissionId::new();
        let state = FormReducer::reduce(loading(id), FormIntent::FocusNext);
        assert_eq!(state.focus, crate::ui::form::Field::Style);
    }
}
