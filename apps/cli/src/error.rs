//! # Console Error Type
//!
//! Unified error type for the interactive shell.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in the Console                          │
//! │                                                                         │
//! │  CoreError (mercat-core) ──┐                                            │
//! │  MalformedInput ───────────┼──► CliError ──► reported at the menu loop, │
//! │  ReceiptWrite ─────────────┘                 loop returns to the top    │
//! │                                                                         │
//! │  Io / Eof ────────────────────► terminate the session cleanly           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! MalformedInput is caught at the input-reading boundary: the offending
//! prompt restarts and no partial state is committed. ReceiptWrite is
//! reported after checkout, but by then the cart is already cleared -
//! checkout's business effect does not depend on the physical write.

use std::path::PathBuf;

use mercat_core::CoreError;
use thiserror::Error;

/// Errors surfaced by the interactive shell.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input did not parse as the expected type.
    ///
    /// ## When This Occurs
    /// - Non-numeric text where a number was expected (price, days, menu
    ///   option)
    #[error("Expected {expected}, got '{input}'")]
    MalformedInput {
        expected: &'static str,
        input: String,
    },

    /// The receipt artifact could not be persisted.
    ///
    /// ## When This Occurs
    /// - Receipt directory cannot be created
    /// - Disk full, permissions, or any mid-write I/O failure
    #[error("Failed to write receipt to {path}: {source}")]
    ReceiptWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input stream ended (Ctrl-D / piped script ran out).
    #[error("Input stream closed")]
    Eof,

    /// Terminal I/O failed outside receipt persistence.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A business rule was violated.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_message() {
        let err = CliError::MalformedInput {
            expected: "a decimal price",
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Expected a decimal price, got 'abc'");
    }

    #[test]
    fn test_core_error_passes_through() {
        let err: CliError = CoreError::CapacityExceeded { capacity: 10 }.into();
        assert_eq!(err.to_string(), "Cart is full: capacity of 10 scans reached");
    }

    #[test]
    fn test_receipt_write_names_the_path() {
        let err = CliError::ReceiptWrite {
            path: PathBuf::from("/tmp/receipts/receipt-1.txt"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/receipts/receipt-1.txt"));
        assert!(message.contains("disk full"));
    }
}
