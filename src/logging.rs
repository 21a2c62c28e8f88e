use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize a tracing subscriber writing to stderr.
///
/// The level comes from `RUST_LOG`, falling back to `default_filter`.
/// Stdout is left for command output.
pub fn init(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, warn};

    #[test]
    fn init_installs_subscriber_once() {
        // Only the first call in the process can succeed
        let _ = init(DEFAULT_LOG_FILTER);

        assert!(init(DEFAULT_LOG_FILTER).is_err());

        debug!("debug message");
        warn!("warning message");
    }
}
