use crate::transform::{Style, SubmissionId, TransformError};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Quote field changed; carries the whole new text.
    SetQuote(String),
    SetStyle(Style),
    FocusNext,
    FocusPrev,
    /// Scroll the result view to this row offset.
    ScrollResult(u16),
    /// Submission failed local validation. No request was issued.
    SubmitRejected(TransformError),
    /// A request was spawned for this submission.
    SubmitStarted { id: SubmissionId },
    /// The request for `id` resolved. Raw service text on success.
    Finished {
        id: SubmissionId,
        outcome: Result<String, TransformError>,
    },
}

impl Intent for FormIntent {}
