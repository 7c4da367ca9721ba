mod app;
mod config;
mod core;
mod error;
mod input;
mod picker;
mod rendering;
mod state;
mod ui;

use log::{info, warn};
use macroquad::window::Conf;

use config::EditorConfig;

fn window_conf() -> Conf {
    Conf {
        window_title: "pixel-editor".to_owned(),
        window_width: 1040,
        window_height: 720,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting pixel-editor");

    let config = EditorConfig::load_from_file().unwrap_or_else(|e| {
        warn!("using default configuration: {e}");
        EditorConfig::default()
    });
    info!("Configuration loaded");

    app::run(config).await;
}
