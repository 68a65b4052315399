//! Optional tracing bootstrap for hosts that want structured logs without
//! wiring their own subscriber.
//!
//! Nothing here runs implicitly: the controller only emits `tracing`
//! events, and installing a subscriber stays the host's call.

/// Installs a compact `tracing-subscriber` honoring `RUST_LOG`, falling
/// back to an `info` filter when the variable is unset.
///
/// Returns `true` when a subscriber was installed. Returns `false` when
/// the `telemetry` feature is off, or when the host already registered a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
