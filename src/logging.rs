pub use log::{debug, error, info, trace, warn};

const DEFAULT_FILTER: &str = "glade=info";

pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .init();
}
