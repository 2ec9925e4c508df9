//! Logger setup for the binary and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Builds the default filter: warnings from every crate, and `info` (or
/// `debug` when `verbose`) from this one. `RUST_LOG` takes precedence.
#[must_use]
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level.as_str().to_lowercase())
}

/// Initializes the global logger.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, "warn,sky_shooter=info")]
    #[case(true, "warn,sky_shooter=debug")]
    fn filter_scopes_verbosity_to_this_crate(#[case] verbose: bool, #[case] expected: &str) {
        assert_eq!(default_filter(verbose), expected);
    }

    #[test]
    fn init_is_idempotent() {
        init(false);
        init(true);
    }
}
