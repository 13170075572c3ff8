//! Protocol codec
//!
//! Encoding and decoding functions for MSP v1 frames.
//!
//! ## Request Encoding
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────────┬──────────┐
//! │ $M> (3)  │ Size (1) │ Code (1) │   Payload    │  Crc (1) │
//! └──────────┴──────────┴──────────┴──────────────┴──────────┘
//! ```
//!
//! ## Response Decoding
//!
//! The transport consumes the 3-byte header; [`decode_response`] receives
//! the remainder of the frame, starting at the size byte and ending with
//! the checksum byte.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::{Command, DecodedResponse, FieldType, PayloadLayout, Value, OUTGOING_HEADER};
use crate::checksum::checksum;
use crate::error::{MspError, Result};

/// Bytes preceding the payload on the wire: header (3) + size (1) + code (1)
pub const PREFIX_SIZE: usize = 5;

/// Minimum length of a decode input: size byte, code byte, checksum byte
const MIN_RESPONSE_LEN: usize = 3;

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode a request frame for `command` with the given argument values.
///
/// An empty argument list always produces an empty payload with a zero size
/// byte. Otherwise the argument count must match the command's layout:
/// exactly one value per field for fixed layouts, a whole number of groups
/// for repeating layouts.
pub fn encode_request(command: &Command, values: &[i64]) -> Result<Bytes> {
    let (size_byte, payload) = if values.is_empty() {
        (0u8, BytesMut::new())
    } else {
        match command.layout() {
            PayloadLayout::Empty => {
                return Err(MspError::InvalidArity {
                    command: command.name(),
                    detail: format!("takes no arguments, got {}", values.len()),
                });
            }
            PayloadLayout::Fixed(fields) => {
                if values.len() != fields.len() {
                    return Err(MspError::InvalidArity {
                        command: command.name(),
                        detail: format!("expected {} arguments, got {}", fields.len(), values.len()),
                    });
                }
                let payload = serialize_values(fields, values)?;
                (size_to_byte(command.fixed_payload_size())?, payload)
            }
            PayloadLayout::Repeating(fields) => {
                if fields.is_empty() {
                    return Err(MspError::UnsupportedLayout {
                        command: command.name(),
                    });
                }
                if values.len() % fields.len() != 0 {
                    return Err(MspError::InvalidArity {
                        command: command.name(),
                        detail: format!(
                            "{} arguments is not a multiple of the group size {}",
                            values.len(),
                            fields.len()
                        ),
                    });
                }
                let groups = values.len() / fields.len();
                let payload = serialize_values(fields, values)?;
                (size_to_byte(groups)?, payload)
            }
            PayloadLayout::Names => {
                return Err(MspError::UnsupportedLayout {
                    command: command.name(),
                });
            }
        }
    };

    let mut frame = BytesMut::with_capacity(PREFIX_SIZE + payload.len() + 1);
    frame.put_slice(OUTGOING_HEADER);
    frame.put_u8(size_byte);
    frame.put_u8(command.code());
    frame.put_slice(&payload);
    frame.put_u8(checksum(&frame[OUTGOING_HEADER.len()..]));

    tracing::trace!(
        command = command.name(),
        frame_len = frame.len(),
        "encoded request frame"
    );

    Ok(frame.freeze())
}

/// Narrow a payload byte length or group count into the size byte.
///
/// The wire format gives the size one byte; anything larger would be
/// silently misdeclared to the transport, so it is rejected instead.
fn size_to_byte(size: usize) -> Result<u8> {
    u8::try_from(size).map_err(|_| {
        MspError::Encoding(format!("declared size {} does not fit the size byte", size))
    })
}

/// Serialize `values` little-endian, cycling through `fields`
fn serialize_values(fields: &[FieldType], values: &[i64]) -> Result<BytesMut> {
    let mut payload = BytesMut::with_capacity(values.len());

    for (index, value) in values.iter().enumerate() {
        let field = fields[index % fields.len()];
        put_value(&mut payload, field, *value, index)?;
    }

    Ok(payload)
}

/// Serialize one value, rejecting values outside the field's range
fn put_value(payload: &mut BytesMut, field: FieldType, value: i64, index: usize) -> Result<()> {
    let out_of_range = |v: i64| {
        MspError::Encoding(format!(
            "value {} out of range for {:?} at argument {}",
            v, field, index
        ))
    };

    match field {
        FieldType::U8 => payload.put_u8(u8::try_from(value).map_err(|_| out_of_range(value))?),
        FieldType::I8 => payload.put_i8(i8::try_from(value).map_err(|_| out_of_range(value))?),
        FieldType::U16 => {
            payload.put_u16_le(u16::try_from(value).map_err(|_| out_of_range(value))?)
        }
        FieldType::I16 => {
            payload.put_i16_le(i16::try_from(value).map_err(|_| out_of_range(value))?)
        }
        FieldType::U32 => {
            payload.put_u32_le(u32::try_from(value).map_err(|_| out_of_range(value))?)
        }
        FieldType::I32 => {
            payload.put_i32_le(i32::try_from(value).map_err(|_| out_of_range(value))?)
        }
    }

    Ok(())
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode the payload region of a response frame for `command`.
///
/// `raw` starts at the size byte (the transport has already consumed the
/// 3-byte header) and ends with the trailing checksum byte. Decoding is
/// all-or-nothing: the command code and checksum are validated before any
/// value is produced.
pub fn decode_response(command: &Command, raw: &[u8]) -> Result<DecodedResponse> {
    if raw.len() < MIN_RESPONSE_LEN {
        return Err(MspError::Encoding(format!(
            "response region too short: expected at least {} bytes, got {}",
            MIN_RESPONSE_LEN,
            raw.len()
        )));
    }

    let declared_size = raw[0];
    let received_code = raw[1];

    if received_code != command.code() {
        tracing::debug!(
            expected = command.code(),
            received = received_code,
            "response carried a different command code"
        );
        return Err(MspError::CommandMismatch {
            expected: command.code(),
            received: received_code,
        });
    }

    let expected_crc = raw[raw.len() - 1];
    let calculated_crc = checksum(&raw[..raw.len() - 1]);
    if expected_crc != calculated_crc {
        return Err(MspError::ChecksumMismatch {
            expected: expected_crc,
            calculated: calculated_crc,
        });
    }

    let payload = &raw[2..raw.len() - 1];
    let values = decode_payload(command, payload)?;

    tracing::trace!(
        command = command.name(),
        value_count = values.len(),
        declared_size,
        "decoded response frame"
    );

    Ok(DecodedResponse {
        command: *command,
        values,
        declared_size,
    })
}

/// Deserialize a verified payload per the command's layout
fn decode_payload(command: &Command, payload: &[u8]) -> Result<Vec<Value>> {
    match command.layout() {
        PayloadLayout::Empty => {
            if !payload.is_empty() {
                return Err(MspError::InvalidArity {
                    command: command.name(),
                    detail: format!("expected an empty payload, got {} bytes", payload.len()),
                });
            }
            Ok(Vec::new())
        }
        PayloadLayout::Fixed(fields) => {
            let expected = command.fixed_payload_size();
            if payload.len() != expected {
                return Err(MspError::InvalidArity {
                    command: command.name(),
                    detail: format!(
                        "expected a {} byte payload, got {}",
                        expected,
                        payload.len()
                    ),
                });
            }

            let mut buf = payload;
            let mut values: Vec<Value> = fields
                .iter()
                .map(|field| Value::Int(get_value(&mut buf, *field)))
                .collect();
            apply_scales(command, &mut values);
            Ok(values)
        }
        PayloadLayout::Repeating(fields) => {
            let group_size = command.group_byte_size();
            if group_size == 0 {
                return Err(MspError::UnsupportedLayout {
                    command: command.name(),
                });
            }
            if payload.len() % group_size != 0 {
                return Err(MspError::InvalidArity {
                    command: command.name(),
                    detail: format!(
                        "payload of {} bytes is not a multiple of the group size {}",
                        payload.len(),
                        group_size
                    ),
                });
            }

            let mut buf = payload;
            let mut values = Vec::with_capacity(payload.len() / group_size * fields.len());
            while buf.has_remaining() {
                for field in fields {
                    values.push(Value::Int(get_value(&mut buf, *field)));
                }
            }
            Ok(values)
        }
        PayloadLayout::Names => decode_names(payload),
    }
}

/// Deserialize one little-endian field, sign-extending into i64
fn get_value(buf: &mut &[u8], field: FieldType) -> i64 {
    match field {
        FieldType::U8 => buf.get_u8() as i64,
        FieldType::I8 => buf.get_i8() as i64,
        FieldType::U16 => buf.get_u16_le() as i64,
        FieldType::I16 => buf.get_i16_le() as i64,
        FieldType::U32 => buf.get_u32_le() as i64,
        FieldType::I32 => buf.get_i32_le() as i64,
    }
}

/// Apply the command's declared unit conversions in place
fn apply_scales(command: &Command, values: &mut [Value]) {
    for scale in command.scales() {
        if let Some(Value::Int(raw)) = values.get(scale.field).cloned() {
            values[scale.field] = Value::Float(raw as f64 / scale.divisor);
        }
    }
}

/// Decode an ASCII payload into its `;`-separated names
fn decode_names(payload: &[u8]) -> Result<Vec<Value>> {
    if payload.is_empty() {
        return Ok(Vec::new());
    }

    let text = match std::str::from_utf8(payload) {
        Ok(text) if text.is_ascii() => text,
        _ => {
            return Err(MspError::Encoding(
                "names payload contains non-ASCII bytes".to_string(),
            ));
        }
    };

    Ok(text
        .split(';')
        .map(|name| Value::Str(name.to_string()))
        .collect())
}
