//! Command definitions
//!
//! A `Command` pairs a protocol code with the schema of its payload. The
//! schema is a tagged layout rather than one subtype per command: every
//! command is the same record, dispatched by code through the registry.

/// Primitive field kinds a payload layout is built from.
///
/// All fields serialize little-endian on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
}

impl FieldType {
    /// Serialized width in bytes
    pub const fn width(self) -> usize {
        match self {
            FieldType::U8 | FieldType::I8 => 1,
            FieldType::U16 | FieldType::I16 => 2,
            FieldType::U32 | FieldType::I32 => 4,
        }
    }
}

/// Payload schema of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadLayout {
    /// No payload in either direction (calibration triggers, EEPROM write)
    Empty,

    /// One fixed record of the listed fields; the size byte carries the
    /// payload byte length
    Fixed(&'static [FieldType]),

    /// N repetitions of the listed field group; the size byte carries the
    /// group count, not the byte length
    Repeating(&'static [FieldType]),

    /// ASCII text split on `;` into a list of names (BOXNAMES, PIDNAMES).
    /// Decode-only.
    Names,
}

/// Decode-time unit conversion for one field of a fixed layout.
///
/// The raw integer at position `field` is divided by `divisor` and surfaced
/// as a float, e.g. GPS coordinates stored as degrees * 1e7.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    pub field: usize,
    pub divisor: f64,
}

/// An MSP command: protocol code plus payload schema.
///
/// Commands are immutable, `Copy`, and owned by the registry; encode and
/// decode are pure functions of `(command, bytes)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Command {
    code: u8,
    name: &'static str,
    layout: PayloadLayout,
    scales: &'static [UnitScale],
}

impl Command {
    /// Create a command with the given payload layout
    pub const fn new(code: u8, name: &'static str, layout: PayloadLayout) -> Self {
        Self {
            code,
            name,
            layout,
            scales: &[],
        }
    }

    /// Attach decode-time unit conversions
    pub const fn with_scales(mut self, scales: &'static [UnitScale]) -> Self {
        self.scales = scales;
        self
    }

    /// Protocol code
    pub const fn code(&self) -> u8 {
        self.code
    }

    /// Protocol name (e.g. `MSP_RAW_IMU`)
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Payload schema
    pub const fn layout(&self) -> PayloadLayout {
        self.layout
    }

    /// Decode-time unit conversions
    pub const fn scales(&self) -> &'static [UnitScale] {
        self.scales
    }

    /// True if the payload is a repeated group (or free-form names) rather
    /// than one fixed record
    pub const fn is_variable_size(&self) -> bool {
        matches!(
            self.layout,
            PayloadLayout::Repeating(_) | PayloadLayout::Names
        )
    }

    /// Number of primitive fields per repeated group.
    ///
    /// Only meaningful for `Repeating` layouts; `Names` counts as one field
    /// and fixed layouts report their full field count.
    pub const fn field_count_per_group(&self) -> usize {
        match self.layout {
            PayloadLayout::Empty => 0,
            PayloadLayout::Fixed(fields) | PayloadLayout::Repeating(fields) => fields.len(),
            PayloadLayout::Names => 1,
        }
    }

    /// Payload byte length when the layout is not variable-size
    pub const fn fixed_payload_size(&self) -> usize {
        match self.layout {
            PayloadLayout::Fixed(fields) => {
                let mut total = 0;
                let mut i = 0;
                while i < fields.len() {
                    total += fields[i].width();
                    i += 1;
                }
                total
            }
            _ => 0,
        }
    }

    /// Byte length of one repeated group (0 for non-repeating layouts)
    pub const fn group_byte_size(&self) -> usize {
        match self.layout {
            PayloadLayout::Repeating(fields) => {
                let mut total = 0;
                let mut i = 0;
                while i < fields.len() {
                    total += fields[i].width();
                    i += 1;
                }
                total
            }
            _ => 0,
        }
    }
}
