pub mod app;
pub mod shared;
pub mod usecases;

use shared::config::AnalyzerConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = AnalyzerConfig::from_location();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("malformed query string, using defaults: {}", e);
    }
    log::info!(
        "legal analyzer starting: api base {:?}, answer format {}",
        config.api,
        config.format.as_str()
    );

    app::mount(config);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
