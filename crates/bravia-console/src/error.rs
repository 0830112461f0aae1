//! Console fatal-path errors with miette diagnostics.
//!
//! Device-side failures are reported inline and never end up here;
//! the only unrecoverable condition is losing the operator's input.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConsoleError {
    #[error("Failed to read operator input")]
    #[diagnostic(
        code(bravia::stdin),
        help("The console is interactive; run it in a terminal or pipe commands to stdin.")
    )]
    Io(#[from] std::io::Error),
}
