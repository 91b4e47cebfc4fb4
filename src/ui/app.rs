use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use scopeguard::ScopeGuard;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::transform::{Style, SubmissionId, TransformClient, TransformError, TransformRequest};
use crate::ui::backdrop::{BackdropIntent, BackdropReducer, BackdropState};
use crate::ui::events::{AppEvent, AppEventSender};
use crate::ui::form::{Field, FormIntent, FormReducer, FormState};
use crate::ui::input::handle_key;
use crate::ui::layout::{form_layout, layout_regions};
use crate::ui::mvi::Reducer;
use crate::ui::render::{result_overflow, result_viewport};
use crate::ui::theme::Gradient;
use crate::ui::transition::TransitionTimer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The form controller.
///
/// Owns the form and backdrop state, the single in-flight request task and
/// the pending transition timer. All mutation goes through the reducers;
/// async work reports back as [`AppEvent`]s on `events`.
pub struct App {
    should_quit: bool,
    form: FormState,
    backdrop: BackdropState,
    timer: TransitionTimer,
    client: Arc<TransformClient>,
    events: AppEventSender,
    request_task: Option<JoinHandle<()>>,
    /// Last known terminal size, for paging the result.
    viewport: Rect,
}

impl App {
    pub fn new(config: &Config, client: TransformClient, events: AppEventSender) -> Self {
        let style = config.ui.default_style;
        Self {
            should_quit: false,
            form: FormState::with_style(style),
            backdrop: BackdropState::new(style),
            timer: TransitionTimer::new(config.ui.transition_duration()),
            client: Arc::new(client),
            events,
            request_task: None,
            viewport: Rect::default(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn backdrop(&self) -> &BackdropState {
        &self.backdrop
    }

    pub fn transition_duration(&self) -> Duration {
        self.timer.duration()
    }

    pub fn is_loading(&self) -> bool {
        self.form.is_loading()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Paste(text) => self.on_paste(&text),
            AppEvent::Tick => {}
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::TransformFinished { id, outcome } => self.on_transform_finished(id, outcome),
            AppEvent::TransitionElapsed { generation } => self.on_transition_elapsed(generation),
            AppEvent::Shutdown => self.request_quit(),
        }
    }

    // ========================================================================
    // Form events
    // ========================================================================

    /// Replace the quote text. Ignored while a request is in flight.
    pub fn on_quote_change(&mut self, text: impl Into<String>) {
        self.dispatch_form(FormIntent::SetQuote(text.into()));
    }

    pub fn on_paste(&mut self, text: &str) {
        if self.form.is_loading() || self.form.focus != Field::Quote {
            return;
        }
        let mut quote = self.form.quote.clone();
        quote.push_str(text);
        self.on_quote_change(quote);
    }

    /// Select a tone and start the backdrop cross-fade towards it.
    ///
    /// Ignored while loading, and a no-op when the style is unchanged.
    pub fn on_style_change(&mut self, style: Style) {
        if self.form.is_loading() || self.form.style == style {
            return;
        }
        self.dispatch_form(FormIntent::SetStyle(style));
        self.dispatch_backdrop(BackdropIntent::Begin {
            target: Gradient::for_style(style),
            started_at: Instant::now(),
        });
        let generation = self.backdrop.generation;
        tracing::debug!(style = %style, generation, "style changed");
        self.timer.start(generation, self.events.clone());
    }

    pub fn focus_next(&mut self) {
        self.dispatch_form(FormIntent::FocusNext);
    }

    pub fn focus_prev(&mut self) {
        self.dispatch_form(FormIntent::FocusPrev);
    }

    /// Validate and send the current quote.
    ///
    /// Returns true if a request was issued.
    pub fn on_submit(&mut self) -> bool {
        if self.form.is_loading() {
            return false;
        }

        let request = match self.form.request() {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(kind = err.kind(), "submission rejected");
                self.dispatch_form(FormIntent::SubmitRejected(err));
                return false;
            }
        };

        let id = SubmissionId::new();
        self.dispatch_form(FormIntent::SubmitStarted { id });
        tracing::info!(
            submission_id = %id,
            style = %request.style,
            quote_chars = request.quote.chars().count(),
            "submitting quote"
        );
        self.spawn_request(id, request);
        true
    }

    pub fn on_transform_finished(&mut self, id: SubmissionId, outcome: Result<String, TransformError>) {
        if self.form.in_flight != Some(id) {
            tracing::debug!(submission_id = %id, "dropping stale transform result");
            return;
        }
        self.request_task = None;
        self.dispatch_form(FormIntent::Finished { id, outcome });
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Rect::new(0, 0, cols, rows);
        let overflow = self.result_overflow();
        if self.form.result_scroll > overflow {
            self.dispatch_form(FormIntent::ScrollResult(overflow));
        }
    }

    /// Page the result view by `pages` screens, negative pages scroll up.
    pub fn scroll_result_pages(&mut self, pages: i32) {
        if self.form.result.is_none() {
            return;
        }
        let page = i32::from(self.result_message().map_or(1, |message| {
            result_viewport(message).height.saturating_sub(1).max(1)
        }));
        let target = i32::from(self.form.result_scroll) + pages.saturating_mul(page);
        let offset = u16::try_from(target.max(0))
            .unwrap_or(u16::MAX)
            .min(self.result_overflow());
        if offset != self.form.result_scroll {
            self.dispatch_form(FormIntent::ScrollResult(offset));
        }
    }

    fn result_message(&self) -> Option<Rect> {
        if self.viewport.is_empty() {
            return None;
        }
        let (_, body, _) = layout_regions(self.viewport);
        Some(form_layout(body).message)
    }

    fn result_overflow(&self) -> u16 {
        match (&self.form.result, self.result_message()) {
            (Some(result), Some(message)) => result_overflow(result, message),
            _ => 0,
        }
    }

    pub fn on_transition_elapsed(&mut self, generation: u64) {
        self.dispatch_backdrop(BackdropIntent::Commit { generation });
    }

    /// Cancel the pending transition and abort any in-flight request.
    pub fn teardown(&mut self) {
        self.timer.cancel();
        if let Some(task) = self.request_task.take() {
            if !task.is_finished() {
                tracing::info!("in-flight request aborted on teardown");
            }
            task.abort();
        }
    }

    fn spawn_request(&mut self, id: SubmissionId, request: TransformRequest) {
        let client = Arc::clone(&self.client);
        // Reports a transport failure if the task is dropped without replying,
        // even before its first poll, so the form never stays stuck in loading.
        let guard = scopeguard::guard(self.events.clone(), move |events| {
            let _ = events.send(AppEvent::TransformFinished {
                id,
                outcome: Err(TransformError::transport("request task ended without a reply")),
            });
        });

        self.request_task = Some(tokio::spawn(async move {
            let started = Instant::now();
            let outcome = client.transform(&request).await;
            let latency_ms = started.elapsed().as_millis() as u64;
            match &outcome {
                Ok(_) => tracing::info!(submission_id = %id, latency_ms, "quote transformed"),
                Err(err) => tracing::warn!(
                    submission_id = %id,
                    latency_ms,
                    kind = err.kind(),
                    error = %err,
                    "quote transform failed"
                ),
            }

            let events = ScopeGuard::into_inner(guard);
            let _ = events.send(AppEvent::TransformFinished { id, outcome });
        }));
    }

    fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    fn dispatch_backdrop(&mut self, intent: BackdropIntent) {
        dispatch_mvi!(self, backdrop, BackdropReducer, intent);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.teardown();
    }
}
