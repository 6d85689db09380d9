mod app;
mod chart;
mod components;
mod config;
mod style;
mod view;
mod weather;

use app::WeatherApp;
use config::Config;
use iced::{window, Application, Settings, Size};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load();
    info!(
        location = %config.location,
        interval = ?config.tick_interval(),
        "Starting weather dashboard"
    );

    WeatherApp::run(Settings {
        window: window::Settings {
            size: Size::new(480.0, 860.0),
            ..window::Settings::default()
        },
        ..Settings::with_flags(config)
    })
}
