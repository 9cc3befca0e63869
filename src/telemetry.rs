//! Opt-in tracing setup for native hosts and test harnesses.
//!
//! A wasm shell will usually install a console-backed subscriber of its own
//! and never call into this module.

/// Filter used when `RUST_LOG` is unset: showcase lifecycle at `info`,
/// everything else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,sre_showcase=info";

/// Installs a compact fmt subscriber with [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Installs a compact fmt subscriber. `RUST_LOG` wins over `fallback_directives`.
///
/// Returns `false` when the `telemetry` feature is off, when the directives
/// do not parse, or when the host already set a global subscriber.
#[must_use]
pub fn init_tracing(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match EnvFilter::try_new(fallback_directives) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}
