//! Backdrop cross-fade timing, driven on a paused clock.

mod common;

use common::make_app;
use quotecraft::transform::Style;
use quotecraft::ui::events::AppEvent;
use quotecraft::ui::theme::{Gradient, HUMOROUS_GRADIENT, POETIC_GRADIENT};
use std::time::Duration;
use tokio::time::{sleep, timeout};

const ENDPOINT: &str = "http://127.0.0.1:9/transform_quote";

#[tokio::test(start_paused = true)]
async fn transition_commits_after_duration() {
    let (mut app, mut rx) = make_app(ENDPOINT);

    app.on_style_change(Style::Poetic);
    assert!(app.backdrop().is_transitioning());
    assert_eq!(app.backdrop().incoming, Some(POETIC_GRADIENT));

    let event = rx.recv().await.expect("timer event");
    assert!(matches!(event, AppEvent::TransitionElapsed { generation: 1 }));
    app.handle_event(event);

    assert_eq!(app.backdrop().base, POETIC_GRADIENT);
    assert!(!app.backdrop().is_transitioning());
    assert_eq!(app.backdrop().incoming_opacity, 0.0);
}

#[tokio::test(start_paused = true)]
async fn rapid_changes_commit_only_the_last_style() {
    let (mut app, mut rx) = make_app(ENDPOINT);

    app.on_style_change(Style::Poetic);
    sleep(Duration::from_millis(500)).await;
    app.on_style_change(Style::Humorous);

    // The first timer would have fired at 1000ms; it was cancelled.
    assert!(timeout(Duration::from_millis(900), rx.recv()).await.is_err());

    let event = rx.recv().await.expect("timer event");
    app.handle_event(event);
    assert_eq!(app.backdrop().base, HUMOROUS_GRADIENT);
    assert_eq!(app.backdrop().generation, 2);

    assert!(timeout(Duration::from_secs(5), rx.recv()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn stale_commit_is_ignored() {
    let (mut app, _rx) = make_app(ENDPOINT);

    app.on_style_change(Style::Poetic);
    app.on_style_change(Style::Humorous);
    app.on_transition_elapsed(1);

    assert_eq!(app.backdrop().base, Gradient::for_style(Style::Formal));
    assert_eq!(app.backdrop().incoming, Some(HUMOROUS_GRADIENT));
}

#[tokio::test(start_paused = true)]
async fn teardown_cancels_pending_transition() {
    let (mut app, mut rx) = make_app(ENDPOINT);

    app.on_style_change(Style::Poetic);
    app.teardown();

    assert!(timeout(Duration::from_secs(5), rx.recv()).await.is_err());
    assert_eq!(app.backdrop().base, Gradient::for_style(Style::Formal));
}

#[tokio::test(start_paused = true)]
async fn reselecting_current_style_does_nothing() {
    let (mut app, mut rx) = make_app(ENDPOINT);

    app.on_style_change(Style::Formal);
    assert!(!app.backdrop().is_transitioning());
    assert!(timeout(Duration::from_secs(5), rx.recv()).await.is_err());
}
