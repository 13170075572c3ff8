//! XOR checksum
//!
//! MSP v1 protects each frame with a single-byte XOR digest computed over
//! the size byte, the command code, and every payload byte. The header and
//! the checksum byte itself are excluded.

/// XOR-fold every byte of `data` into a single checksum byte.
///
/// Pure and deterministic; verification recomputes the fold over the same
/// range and compares for equality.
pub fn checksum(data: &[u8]) -> u8 {
    data.iter().fold(0, |acc, byte| acc ^ byte)
}
