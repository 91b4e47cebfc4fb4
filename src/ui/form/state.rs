use crate::transform::{Style, SubmissionId, TransformError, TransformRequest};
use crate::ui::mvi::UiState;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Quote,
    Style,
    Submit,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Quote => Field::Style,
            Field::Style => Field::Submit,
            Field::Submit => Field::Quote,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Quote => Field::Submit,
            Field::Style => Field::Quote,
            Field::Submit => Field::Style,
        }
    }
}

/// Form contents and request status.
///
/// Loading is derived from `in_flight`: the form is disabled exactly while a
/// submission id is outstanding.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub quote: String,
    pub style: Style,
    /// Cleaned text of the last successful reply.
    pub result: Option<String>,
    /// User-facing message of the last failure.
    pub error: Option<String>,
    pub focus: Field,
    pub in_flight: Option<SubmissionId>,
    /// Rows of the result scrolled out of view at the top.
    pub result_scroll: u16,
}

impl UiState for FormState {}

impl FormState {
    pub fn with_style(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Request for the current contents, or the validation error.
    pub fn request(&self) -> Result<TransformRequest, TransformError> {
        TransformRequest::new(self.quote.clone(), self.style)
    }
}
