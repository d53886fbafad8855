use std::sync::Once;
use std::{env, path::PathBuf};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".subtrack";
const SUBSCRIPTIONS_FILE: &str = "subscriptions.json";
const CONFIG_FILE: &str = "config.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("subtrack=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.subtrack`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("SUBTRACK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Canonical path of the subscription store.
pub fn subscriptions_file() -> PathBuf {
    app_data_dir().join(SUBSCRIPTIONS_FILE)
}

/// Canonical path of the configuration file.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}
