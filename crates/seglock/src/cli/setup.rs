//! Logging initialization and error formatting

use anyhow::{Context, Result};

/// Initialize the tracing subscriber
///
/// `RUST_LOG` is honored; `level` (from `logging.level`) is added as the
/// default directive. Output goes to stderr so stdout stays parseable.
///
/// # Errors
/// Returns an error if `level` is not a tracing level or a subscriber is
/// already installed
pub fn init_tracing(level: &str) -> Result<()> {
    let level: tracing::Level = level
        .parse()
        .with_context(|| format!("Invalid logging.level '{level}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

/// Format an error for user display (no stack traces)
pub fn format_error(err: &anyhow::Error) -> String {
    let msg = err.to_string();
    match err.source() {
        Some(source) => {
            let source_msg = source.to_string();
            if msg.contains(&source_msg) || source_msg.is_empty() {
                msg
            } else {
                format!("{msg}\nCause: {source_msg}")
            }
        }
        None => msg,
    }
}
