use dirs::home_dir;
use std::{env, path::PathBuf, sync::Once};

const DEFAULT_DIR_NAME: &str = ".daily_tally";
const HOME_ENV: &str = "DAILY_TALLY_HOME";
const DEFAULT_FILTER: &str = "daily_tally=info";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed by the embedding application.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}

/// Returns the application data directory, defaulting to `~/.daily_tally`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
