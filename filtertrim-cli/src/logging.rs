use env_logger::{Builder, Env, Target};

/// Default log filter for a `-v` count. `RUST_LOG` still wins when set.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr logger. stdout stays empty on success.
pub fn init(verbosity: u8) {
    let mut log_builder = Builder::from_env(Env::default().default_filter_or(default_filter(verbosity)));
    log_builder
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_target(false);

    // Ignore a second init (tests may install a logger first)
    let _ = log_builder.try_init();
}
