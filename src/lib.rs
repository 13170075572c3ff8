//! # msp-codec
//!
//! Encoder/decoder for MultiWii Serial Protocol (MSP) v1 frames:
//! - Static command registry mapping protocol codes to payload schemas
//! - Single-byte XOR checksum
//! - Request encoder and response decoder with typed values
//! - Fixed header and direction constants for transport framing
//!
//! ## Frame Anatomy
//!
//! ```text
//! ┌───────────┬──────────┬──────────┬──────────────┬──────────┐
//! │ Header(3) │ Size (1) │ Code (1) │   Payload    │  Crc (1) │
//! └───────────┴──────────┴──────────┴──────────────┴──────────┘
//!   $M + dir    schema      command    little-endian   XOR of
//!               driven      code       fields          size..payload
//! ```
//!
//! The codec is pure and stateless: transport (serial I/O), retries, and
//! request sequencing live in the caller.
//!
//! ## Example
//!
//! ```
//! use msp_codec::{commands, encode_request};
//!
//! let frame = encode_request(&commands::STATUS, &[]).unwrap();
//! assert_eq!(&frame[..], b"$M>\x00\x65\x65");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;

pub mod checksum;
pub mod commands;
pub mod protocol;
pub mod registry;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use checksum::checksum;
pub use error::{MspError, Result};
pub use protocol::{
    decode_response, encode_request, Command, DecodedResponse, Direction, FieldType,
    PayloadLayout, UnitScale, Value, ERROR_HEADER, INCOMING_HEADER, OUTGOING_HEADER, PREAMBLE,
    PREFIX_SIZE,
};
pub use registry::{default_registry, Registry};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of msp-codec
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
