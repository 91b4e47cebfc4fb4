use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::transform::Style;

#[derive(Debug, Parser)]
#[command(name = "quotecraft")]
#[command(version)]
#[command(about = "Rewrite a quote in a formal, poetic or humorous style")]
pub struct Cli {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the transformation service endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Initially selected style: formal, poetic or humorous
    #[arg(long, value_name = "STYLE")]
    pub style: Option<Style>,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.service.endpoint = endpoint.clone();
        }
        if let Some(style) = self.style {
            config.ui.default_style = style;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}
