//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use quotecraft::config::{Config, ServiceConfig};
use quotecraft::transform::TransformClient;
use quotecraft::ui::app::App;
use quotecraft::ui::events::AppEvent;
use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` as config.toml in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn service_config(endpoint: &str) -> ServiceConfig {
    ServiceConfig {
        endpoint: endpoint.to_string(),
        request_timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

/// Build an app talking to `endpoint`, returning the event receiver the
/// request tasks and timers report to.
pub fn make_app(endpoint: &str) -> (App, mpsc::UnboundedReceiver<AppEvent>) {
    let mut config = Config::default();
    config.service = service_config(endpoint);
    let client = TransformClient::new(&config.service).expect("client");
    let (tx, rx) = mpsc::unbounded_channel();
    (App::new(&config, client, tx), rx)
}

/// Feed events back into the app until the in-flight request resolves.
pub async fn settle(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppEvent>) {
    while app.is_loading() {
        let event = tokio::time::timeout(Duration::from_secs(10), rx.recv())
            .await
            .expect("timed out waiting for app event")
            .expect("event channel closed");
        app.handle_event(event);
    }
}
