use clap::Parser;

use quotecraft::cli::Cli;
use quotecraft::{logging, ui};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = logging::init(&config.logging) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }

    if let Err(err) = ui::run(config).await {
        tracing::error!(error = %err, "quote form exited with error");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
