pub mod cli;
pub mod config;
pub mod logging;
pub mod transform;
pub mod ui;
