use thiserror::Error;

/// Errors that can end the menu loop.
///
/// Import failures are not listed here: they are reported inline and the
/// loop continues with whatever was loaded so far.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error on the interactive streams
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
