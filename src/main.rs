mod app;
mod cross_term;
mod event_ext;

use crate::app::settings::Settings;
use crate::app::SwipenavApp;
use anyhow::Context;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use log::info;

fn init_logging(settings: &Settings) -> anyhow::Result<LoggerHandle> {
    Logger::try_with_env_or_str(&settings.log_level)
        .context("Invalid log level")?
        .log_to_file(
            FileSpec::default()
                .directory(settings.log_directory())
                .basename("swipenav"),
        )
        .start()
        .context("Failed to start logger")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = match Settings::default_path() {
        Some(path) => Settings::load_or_create(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let _logger = init_logging(&settings)?;
    info!("Starting swipenav with {:?}", settings.transitions);
    SwipenavApp::new(settings).run().await
}
