//! Main application entry point.
//!
//! Usage: `holopick [picker-config.json]`

use holopick_app::{App, AppConfig};
use holopick_core::PickerConfig;

fn main() {
    env_logger::init();
    log::info!("Starting HoloPick");

    let mut config = AppConfig::default();
    if let Some(path) = std::env::args().nth(1) {
        match PickerConfig::from_json_file(&path) {
            Ok(picker) => {
                log::info!("Loaded picker config from {}", path);
                config = config.with_picker(picker);
            }
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(2);
            }
        }
    }

    if let Err(e) = pollster::block_on(App::run(config)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
