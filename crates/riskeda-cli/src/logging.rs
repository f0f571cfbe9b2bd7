//! Logger setup.

use log::debug;

/// Initialize `env_logger`; `RUST_LOG` overrides the default `warn` level.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized");
}
