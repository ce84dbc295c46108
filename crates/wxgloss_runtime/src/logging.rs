//! Diagnostic output for the binary.
//!
//! Library crates only emit `tracing` events; this is the one place a
//! subscriber is installed.

use tracing_subscriber::EnvFilter;
use wxgloss_foundation::{Error, ErrorKind, Result};

/// Filter used when neither `--log` nor `RUST_LOG` is given.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Builds the filter: an explicit directive, else `RUST_LOG`, else
/// [`DEFAULT_DIRECTIVE`].
///
/// # Errors
///
/// Returns an [`ErrorKind::InvalidArgument`] error if `directive` does not
/// parse.
pub fn filter(directive: Option<&str>) -> Result<EnvFilter> {
    match directive {
        Some(directive) => EnvFilter::try_new(directive).map_err(|e| {
            Error::invalid_argument(format!("invalid log directive '{directive}': {e}"))
        }),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))),
    }
}

/// Installs a `fmt` subscriber writing to stderr.
///
/// # Errors
///
/// Returns an error if the directive is invalid or a global subscriber is
/// already installed.
pub fn init(directive: Option<&str>) -> Result<()> {
    let filter = filter(directive)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(format!("failed to install logger: {e}"))))
}
