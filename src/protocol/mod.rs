//! Protocol Module
//!
//! Defines the MSP v1 wire protocol.
//!
//! ## Frame Format (little-endian)
//!
//! ```text
//! ┌───────────┬──────────┬──────────┬──────────────┬──────────┐
//! │ Header(3) │ Size (1) │ Code (1) │   Payload    │  Crc (1) │
//! └───────────┴──────────┴──────────┴──────────────┴──────────┘
//! ```
//!
//! - Header: `$M` preamble plus a direction character
//! - Size: payload byte length for fixed layouts, group count for
//!   variable-size layouts
//! - Crc: XOR of size, code, and every payload byte
//!
//! ## Direction Characters
//! - `>`: outgoing (request to the flight controller)
//! - `<`: incoming (response from the flight controller)
//! - `!`: error

mod command;
mod response;
mod codec;

pub use command::{Command, FieldType, PayloadLayout, UnitScale};
pub use response::{DecodedResponse, Value};
pub use codec::{decode_response, encode_request, PREFIX_SIZE};

/// The fixed two-byte preamble shared by every MSP v1 frame
pub const PREAMBLE: &[u8; 2] = b"$M";

/// Serialized header of a request frame (`$M>`)
pub const OUTGOING_HEADER: &[u8; 3] = b"$M>";

/// Serialized header of a response frame (`$M<`)
pub const INCOMING_HEADER: &[u8; 3] = b"$M<";

/// Serialized header of an error frame (`$M!`)
pub const ERROR_HEADER: &[u8; 3] = b"$M!";

/// Frame direction, encoded as the third header byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Request towards the flight controller (`>`)
    Outgoing,

    /// Response from the flight controller (`<`)
    Incoming,

    /// Error reply for an unsupported request (`!`)
    Error,
}

impl Direction {
    /// Direction character as it appears in the header
    pub const fn as_char(self) -> char {
        match self {
            Direction::Outgoing => '>',
            Direction::Incoming => '<',
            Direction::Error => '!',
        }
    }

    /// Serialized direction byte
    pub const fn as_byte(self) -> u8 {
        self.as_char() as u8
    }

    /// The full 3-byte header for this direction
    pub const fn header(self) -> [u8; 3] {
        [b'$', b'M', self.as_byte()]
    }
}
