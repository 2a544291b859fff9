mod api;
mod components;
mod config;
mod error;
mod sync;

use components::app::{App, Props};
use config::ClientConfig;

fn main() {
    console_error_panic_hook::set_once();
    let (config, rejected) = ClientConfig::from_build_env();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level)
            .build(),
    );
    for setting in rejected {
        tracing::warn!(name = setting.name, value = %setting.value, "ignoring unparsable setting");
    }
    tracing::info!(api_base = %config.api_base, "starting");
    yew::start_app_with_props::<App>(Props { config });
}
