use iced::Application;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use qrdesk::{config::AppConfig, gui::QrDeskApp, SymbolConfig};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    let level = if config.diagnostics {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let _ = SubscriberBuilder::default().with_max_level(level).try_init();

    if config.diagnostics {
        qrdesk::config::log_environment(&config);
        tracing::debug!("encoder settings: {:?}", SymbolConfig::DEFAULT);
    }

    QrDeskApp::run(qrdesk::gui::settings(config))?;
    tracing::debug!("event loop finished");

    Ok(())
}
