use std::path::PathBuf;

use iced::Size;
use tracing_subscriber::EnvFilter;

use platter::app::State;
use platter::config;

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Optional first argument: explicit config file
    let config = match std::env::args_os().nth(1) {
        Some(path) => config::load_from(&PathBuf::from(path)),
        None => config::load(),
    };
    let window_size = Size::new(config.window.width, config.window.height);

    tracing::info!("Starting Platter");

    iced::application(move || State::new(config.clone()), State::update, State::view)
        .title(State::title)
        .subscription(State::subscription)
        .theme(State::theme)
        .window_size(window_size)
        .run()
}
