use anyhow::Context;

use crate::config::Config;
use crate::transform::TransformClient;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub async fn run(config: Config) -> anyhow::Result<()> {
    let client = TransformClient::new(&config.service).context("failed to build HTTP client")?;
    tracing::info!(endpoint = client.endpoint(), "starting quote form");

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let mut events = EventHandler::new(config.ui.tick_rate());
    let mut app = App::new(&config, client, events.sender());
    match terminal.size() {
        Ok(size) => app.on_resize(size.width, size.height),
        Err(err) => tracing::warn!(error = %err, "failed to read terminal size"),
    }

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(anyhow::Error::new(err).context("failed to draw frame"));
        }
        if app.should_quit() {
            break Ok(());
        }

        match events.next().await {
            Some(event) => app.handle_event(event),
            None => break Ok(()),
        }
    };

    app.teardown();
    drop(guard);
    tracing::info!("quote form closed");
    result
}
