//! Codec Tests
//!
//! Tests for request encoding, response decoding, and the XOR checksum.

use msp_codec::{
    checksum, commands, decode_response, encode_request, Command, FieldType, MspError,
    PayloadLayout, Value,
};

/// Build the decode input for a response: size, code, payload, checksum
fn response_region(code: u8, size_byte: u8, payload: &[u8]) -> Vec<u8> {
    let mut region = Vec::with_capacity(3 + payload.len());
    region.push(size_byte);
    region.push(code);
    region.extend_from_slice(payload);
    region.push(checksum(&region));
    region
}

// =============================================================================
// Checksum Tests
// =============================================================================

#[test]
fn test_checksum_is_xor_fold() {
    let data = [0x0a, 0x65, 0x01, 0xff, 0x80];
    let mut expected = 0u8;
    for byte in data {
        expected ^= byte;
    }
    assert_eq!(checksum(&data), expected);
}

#[test]
fn test_checksum_empty_input_is_zero() {
    assert_eq!(checksum(&[]), 0);
}

#[test]
fn test_checksum_independent_of_concatenation() {
    let a = [0x12, 0x34];
    let b = [0x56, 0x78, 0x9a];
    let joined: Vec<u8> = a.iter().chain(b.iter()).copied().collect();
    assert_eq!(checksum(&joined), checksum(&a) ^ checksum(&b));
}

// =============================================================================
// Request Encoding Tests
// =============================================================================

#[test]
fn test_encode_status_request_exact_bytes() {
    // Code 101 = 0x65, no arguments: size 0, checksum = 0x00 ^ 0x65
    let frame = encode_request(&commands::STATUS, &[]).unwrap();
    assert_eq!(&frame[..], b"$M>\x00\x65\x65");
}

#[test]
fn test_encode_empty_arguments_always_empty_payload() {
    // Even for a fixed-size command, no arguments means a bare request
    let frame = encode_request(&commands::RAW_IMU, &[]).unwrap();
    assert_eq!(frame.len(), 6);
    assert_eq!(frame[3], 0);
    assert_eq!(frame[4], 102);
}

#[test]
fn test_encode_fixed_layout_little_endian() {
    let frame = encode_request(&commands::SET_HEAD, &[-90]).unwrap();
    assert_eq!(&frame[..3], b"$M>");
    assert_eq!(frame[3], 2); // fixed payload byte length
    assert_eq!(frame[4], 211);
    assert_eq!(&frame[5..7], &(-90i16).to_le_bytes());
    assert_eq!(frame[7], checksum(&frame[3..7]));
}

#[test]
fn test_encode_variable_size_byte_counts_groups() {
    // Group of one u16: three values make three groups
    let frame = encode_request(&commands::SET_RAW_RC, &[1, 2, 3]).unwrap();
    assert_eq!(frame[3], 3);
    assert_eq!(frame.len(), 3 + 2 + 6 + 1);
}

#[test]
fn test_encode_variable_partial_group_fails() {
    let pair = Command::new(
        42,
        "TEST_PAIR",
        PayloadLayout::Repeating(&[FieldType::U16, FieldType::U16]),
    );
    let err = encode_request(&pair, &[1, 2, 3]).unwrap_err();
    assert!(matches!(err, MspError::InvalidArity { .. }));
}

#[test]
fn test_encode_fixed_wrong_argument_count_fails() {
    let err = encode_request(&commands::ATTITUDE, &[1, 2]).unwrap_err();
    assert!(matches!(err, MspError::InvalidArity { .. }));
}

#[test]
fn test_encode_arguments_for_empty_layout_fails() {
    let err = encode_request(&commands::ACC_CALIBRATION, &[1]).unwrap_err();
    assert!(matches!(err, MspError::InvalidArity { .. }));
}

#[test]
fn test_encode_names_layout_unsupported() {
    let err = encode_request(&commands::BOXNAMES, &[1]).unwrap_err();
    assert_eq!(
        err,
        MspError::UnsupportedLayout {
            command: "MSP_BOXNAMES"
        }
    );
}

#[test]
fn test_encode_group_count_over_size_byte_fails() {
    // 300 single-u8 groups cannot be declared in a one-byte size field
    let channels = vec![1i64; 300];
    let err = encode_request(&commands::BOXIDS, &channels).unwrap_err();
    assert!(matches!(err, MspError::Encoding(_)));
}

#[test]
fn test_encode_group_count_at_size_byte_limit() {
    let channels = vec![1i64; 255];
    let frame = encode_request(&commands::BOXIDS, &channels).unwrap();
    assert_eq!(frame[3], 255);
}

#[test]
fn test_encode_fixed_payload_over_size_byte_fails() {
    static WIDE: [FieldType; 64] = [FieldType::U32; 64];
    let wide = Command::new(43, "TEST_WIDE", PayloadLayout::Fixed(&WIDE));
    let err = encode_request(&wide, &[0; 64]).unwrap_err();
    assert!(matches!(err, MspError::Encoding(_)));
}

#[test]
fn test_encode_value_out_of_range_fails() {
    // SELECT_SETTING carries a single u8
    let err = encode_request(&commands::SELECT_SETTING, &[300]).unwrap_err();
    assert!(matches!(err, MspError::Encoding(_)));
}

// =============================================================================
// Response Decoding Tests
// =============================================================================

#[test]
fn test_round_trip_fixed_layout() {
    let values: Vec<i64> = vec![100, -200, 300, -400, 500, -600, 700, -800, 900];
    let frame = encode_request(&commands::RAW_IMU, &values).unwrap();

    // Strip the 3-byte header; the transport owns it
    let decoded = decode_response(&commands::RAW_IMU, &frame[3..]).unwrap();

    assert_eq!(decoded.declared_size, 18);
    let ints: Vec<i64> = decoded.values.iter().map(|v| v.as_int().unwrap()).collect();
    assert_eq!(ints, values);
}

#[test]
fn test_round_trip_variable_layout() {
    let channels: Vec<i64> = vec![1500, 1500, 1000, 2000, 1200, 1800, 1000, 1000];
    let frame = encode_request(&commands::SET_RAW_RC, &channels).unwrap();
    let decoded = decode_response(&commands::SET_RAW_RC, &frame[3..]).unwrap();

    assert_eq!(decoded.declared_size, 8);
    let ints: Vec<i64> = decoded.values.iter().map(|v| v.as_int().unwrap()).collect();
    assert_eq!(ints, channels);
}

#[test]
fn test_round_trip_empty_payload() {
    let frame = encode_request(&commands::EEPROM_WRITE, &[]).unwrap();
    let decoded = decode_response(&commands::EEPROM_WRITE, &frame[3..]).unwrap();

    assert_eq!(decoded.declared_size, 0);
    assert!(decoded.values.is_empty());
}

#[test]
fn test_decode_command_mismatch_reports_both_codes() {
    let region = response_region(102, 0, &[]);
    let err = decode_response(&commands::STATUS, &region).unwrap_err();
    assert_eq!(
        err,
        MspError::CommandMismatch {
            expected: 101,
            received: 102,
        }
    );
}

#[test]
fn test_decode_flipped_checksum_fails() {
    let values: Vec<i64> = vec![0, 0, 900];
    let frame = encode_request(&commands::ATTITUDE, &values).unwrap();

    let mut region = frame[3..].to_vec();
    let last = region.len() - 1;
    region[last] ^= 0xff;

    let err = decode_response(&commands::ATTITUDE, &region).unwrap_err();
    assert!(matches!(err, MspError::ChecksumMismatch { .. }));
}

#[test]
fn test_decode_corrupted_payload_byte_fails_checksum() {
    let frame = encode_request(&commands::RAW_IMU, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();

    let mut region = frame[3..].to_vec();
    region[4] ^= 0x01;

    let err = decode_response(&commands::RAW_IMU, &region).unwrap_err();
    assert!(matches!(err, MspError::ChecksumMismatch { .. }));
}

#[test]
fn test_decode_truncated_region_fails() {
    let err = decode_response(&commands::STATUS, &[0x00, 0x65]).unwrap_err();
    assert!(matches!(err, MspError::Encoding(_)));
}

#[test]
fn test_decode_wrong_payload_length_fails() {
    // ATTITUDE expects 6 payload bytes
    let region = response_region(108, 4, &[0, 0, 0, 0]);
    let err = decode_response(&commands::ATTITUDE, &region).unwrap_err();
    assert!(matches!(err, MspError::InvalidArity { .. }));
}

#[test]
fn test_decode_applies_unit_scales() {
    // Roll 12.3 deg, pitch -4.5 deg stored in decidegrees, heading raw
    let mut payload = Vec::new();
    payload.extend_from_slice(&123i16.to_le_bytes());
    payload.extend_from_slice(&(-45i16).to_le_bytes());
    payload.extend_from_slice(&270i16.to_le_bytes());

    let region = response_region(108, 6, &payload);
    let decoded = decode_response(&commands::ATTITUDE, &region).unwrap();

    assert_eq!(decoded.values[0], Value::Float(12.3));
    assert_eq!(decoded.values[1], Value::Float(-4.5));
    assert_eq!(decoded.values[2], Value::Int(270));
}

#[test]
fn test_decode_gps_coordinate_scaling() {
    let mut payload = Vec::new();
    payload.push(1); // fix
    payload.push(9); // satellites
    payload.extend_from_slice(&523_456_789u32.to_le_bytes()); // lat, degrees * 1e7
    payload.extend_from_slice(&134_567_890u32.to_le_bytes()); // lon, degrees * 1e7
    payload.extend_from_slice(&120u16.to_le_bytes()); // altitude
    payload.extend_from_slice(&250u16.to_le_bytes()); // speed
    payload.extend_from_slice(&1800u16.to_le_bytes()); // course, decidegrees

    let region = response_region(106, 16, &payload);
    let decoded = decode_response(&commands::RAW_GPS, &region).unwrap();

    assert_eq!(decoded.values[2], Value::Float(52.345_678_9));
    assert_eq!(decoded.values[3], Value::Float(13.456_789_0));
    assert_eq!(decoded.values[6], Value::Float(180.0));
}

#[test]
fn test_decode_altitude_analog_misc_scales() {
    // ALTITUDE: centimeters to meters
    let mut payload = Vec::new();
    payload.extend_from_slice(&(-1234i32).to_le_bytes());
    payload.extend_from_slice(&55i16.to_le_bytes());
    let region = response_region(109, 6, &payload);
    let decoded = decode_response(&commands::ALTITUDE, &region).unwrap();
    assert_eq!(decoded.values[0], Value::Float(-12.34));
    assert_eq!(decoded.values[1], Value::Int(55));

    // ANALOG: battery voltage in decivolts
    let mut payload = Vec::new();
    payload.push(168);
    payload.extend_from_slice(&430u16.to_le_bytes());
    payload.extend_from_slice(&512u16.to_le_bytes());
    payload.extend_from_slice(&90u16.to_le_bytes());
    let region = response_region(110, 7, &payload);
    let decoded = decode_response(&commands::ANALOG, &region).unwrap();
    assert_eq!(decoded.values[0], Value::Float(16.8));
    assert_eq!(decoded.values[1], Value::Int(430));

    // MISC: magnetic declination in decidegrees
    let mut payload = Vec::new();
    for value in [1000u16, 1150, 1850, 1000, 1200, 0] {
        payload.extend_from_slice(&value.to_le_bytes());
    }
    payload.extend_from_slice(&0u32.to_le_bytes());
    payload.extend_from_slice(&(-123i16).to_le_bytes());
    payload.extend_from_slice(&[110, 33, 43, 36]);
    let region = response_region(114, 22, &payload);
    let decoded = decode_response(&commands::MISC, &region).unwrap();
    assert_eq!(decoded.values[7], Value::Float(-12.3));
    assert_eq!(decoded.values[8], Value::Int(110));
}

// =============================================================================
// Names Decoding Tests
// =============================================================================

#[test]
fn test_decode_names_splits_on_semicolon() {
    let payload = b"alpha;beta;gamma";
    let region = response_region(116, payload.len() as u8, payload);
    let decoded = decode_response(&commands::BOXNAMES, &region).unwrap();

    let names: Vec<&str> = decoded.values.iter().map(|v| v.as_str().unwrap()).collect();
    assert_eq!(names, ["alpha", "beta", "gamma"]);
}

#[test]
fn test_decode_names_empty_payload() {
    let region = response_region(117, 0, &[]);
    let decoded = decode_response(&commands::PIDNAMES, &region).unwrap();
    assert!(decoded.values.is_empty());
}

#[test]
fn test_decode_names_rejects_non_ascii() {
    let payload = [0x41, 0x3b, 0xc3, 0xa9]; // "A;" followed by UTF-8 'é'
    let region = response_region(116, payload.len() as u8, &payload);
    let err = decode_response(&commands::BOXNAMES, &region).unwrap_err();
    assert!(matches!(err, MspError::Encoding(_)));
}
