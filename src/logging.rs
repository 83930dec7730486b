use env_logger::{Builder, Env};

/// Install the process-wide logger at INFO level.
///
/// `RUST_LOG` overrides the default filter. Safe to call more than once;
/// only the first call installs anything.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("info")).try_init();
}
