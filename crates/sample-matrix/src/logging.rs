use log::LevelFilter;

/// Environment variable that overrides the filter passed to [`init_logging`].
pub const LOG_ENV: &str = "SAMPLE_MATRIX_LOG";

/// Install the env_logger backend.
///
/// Returns `false` when a logger was already installed, which happens when a
/// host imports the module more than once.
pub fn init_logging(default_filter: &str) -> bool {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, default_filter))
        .try_init()
        .is_ok()
}
