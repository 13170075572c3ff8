//! Error types for the MSP codec
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using MspError
pub type Result<T> = std::result::Result<T, MspError>;

/// Unified error type for MSP codec operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MspError {
    // -------------------------------------------------------------------------
    // Registry Errors
    // -------------------------------------------------------------------------
    #[error("Unknown command code: {code}")]
    UnknownCommand { code: u8 },

    #[error("Command code {code} is already registered")]
    DuplicateCommand { code: u8 },

    // -------------------------------------------------------------------------
    // Encode Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument arity for {command}: {detail}")]
    InvalidArity {
        command: &'static str,
        detail: String,
    },

    #[error("Layout of {command} has no serialization rule")]
    UnsupportedLayout { command: &'static str },

    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    #[error("Command code mismatch: expected {expected}, received {received}")]
    CommandMismatch { expected: u8, received: u8 },

    #[error("Checksum mismatch: expected 0x{expected:02x}, calculated 0x{calculated:02x}")]
    ChecksumMismatch { expected: u8, calculated: u8 },

    #[error("Encoding error: {0}")]
    Encoding(String),
}
