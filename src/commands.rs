//! Standard MSP v1 command table
//!
//! Schemas for the MultiWii 2.x command set: getters in the 100 range,
//! setters in the 200 range. Unit conversions follow the MultiWii
//! conventions (GPS coordinates as degrees * 1e7, attitude angles in
//! decidegrees, altitude in centimeters).

use crate::protocol::{Command, FieldType, PayloadLayout, UnitScale};

use FieldType::{I16, I32, U16, U32, U8};

// =============================================================================
// Getters (100..)
// =============================================================================

/// Firmware version, multitype, and capability bits
pub const IDENT: Command = Command::new(
    100,
    "MSP_IDENT",
    PayloadLayout::Fixed(&[U8, U8, U8, U32]),
);

/// Cycle time, i2c error count, sensor and box activation flags
pub const STATUS: Command = Command::new(
    101,
    "MSP_STATUS",
    PayloadLayout::Fixed(&[U16, U16, U16, U32, U8]),
);

/// Raw accelerometer, gyroscope, and magnetometer samples
pub const RAW_IMU: Command = Command::new(
    102,
    "MSP_RAW_IMU",
    PayloadLayout::Fixed(&[I16, I16, I16, I16, I16, I16, I16, I16, I16]),
);

/// Servo output pulses
pub const SERVO: Command = Command::new(
    103,
    "MSP_SERVO",
    PayloadLayout::Fixed(&[U16, U16, U16, U16, U16, U16, U16, U16]),
);

/// Motor output pulses
pub const MOTOR: Command = Command::new(
    104,
    "MSP_MOTOR",
    PayloadLayout::Fixed(&[U16, U16, U16, U16, U16, U16, U16, U16]),
);

/// RC channel values, one u16 per configured channel
pub const RC: Command = Command::new(105, "MSP_RC", PayloadLayout::Repeating(&[U16]));

/// GPS fix, satellite count, position, altitude, speed, and course
pub const RAW_GPS: Command = Command::new(
    106,
    "MSP_RAW_GPS",
    PayloadLayout::Fixed(&[U8, U8, U32, U32, U16, U16, U16]),
)
.with_scales(&[
    UnitScale {
        field: 2,
        divisor: 10_000_000.0,
    },
    UnitScale {
        field: 3,
        divisor: 10_000_000.0,
    },
    UnitScale {
        field: 6,
        divisor: 10.0,
    },
]);

/// Distance and direction to home
pub const COMP_GPS: Command = Command::new(
    107,
    "MSP_COMP_GPS",
    PayloadLayout::Fixed(&[U16, U16, U8]),
);

/// Roll and pitch angles (decidegrees) and heading
pub const ATTITUDE: Command = Command::new(
    108,
    "MSP_ATTITUDE",
    PayloadLayout::Fixed(&[I16, I16, I16]),
)
.with_scales(&[
    UnitScale {
        field: 0,
        divisor: 10.0,
    },
    UnitScale {
        field: 1,
        divisor: 10.0,
    },
]);

/// Estimated altitude (centimeters) and climb rate
pub const ALTITUDE: Command = Command::new(109, "MSP_ALTITUDE", PayloadLayout::Fixed(&[I32, I16]))
    .with_scales(&[UnitScale {
        field: 0,
        divisor: 100.0,
    }]);

/// Battery voltage (decivolts), consumed power, RSSI, and amperage
pub const ANALOG: Command = Command::new(
    110,
    "MSP_ANALOG",
    PayloadLayout::Fixed(&[U8, U16, U16, U16]),
)
.with_scales(&[UnitScale {
    field: 0,
    divisor: 10.0,
}]);

/// Rates, expo, and throttle curve settings
pub const RC_TUNING: Command = Command::new(
    111,
    "MSP_RC_TUNING",
    PayloadLayout::Fixed(&[U8, U8, U8, U8, U8, U8, U8]),
);

/// P, I, and D gains per control axis
pub const PID: Command = Command::new(112, "MSP_PID", PayloadLayout::Repeating(&[U8, U8, U8]));

/// Box activation bitmasks, one u16 per configured box
pub const BOX: Command = Command::new(113, "MSP_BOX", PayloadLayout::Repeating(&[U16]));

/// Miscellaneous configuration values
pub const MISC: Command = Command::new(
    114,
    "MSP_MISC",
    PayloadLayout::Fixed(&[U16, U16, U16, U16, U16, U16, U32, I16, U8, U8, U8, U8]),
)
.with_scales(&[UnitScale {
    field: 7,
    divisor: 10.0,
}]);

/// Hardware pin assignment per motor
pub const MOTOR_PINS: Command = Command::new(
    115,
    "MSP_MOTOR_PINS",
    PayloadLayout::Fixed(&[U8, U8, U8, U8, U8, U8, U8, U8]),
);

/// Box names, `;`-separated ASCII
pub const BOXNAMES: Command = Command::new(116, "MSP_BOXNAMES", PayloadLayout::Names);

/// PID controller names, `;`-separated ASCII
pub const PIDNAMES: Command = Command::new(117, "MSP_PIDNAMES", PayloadLayout::Names);

/// One navigation waypoint
pub const WP: Command = Command::new(
    118,
    "MSP_WP",
    PayloadLayout::Fixed(&[U8, I32, I32, I32, I16, U16, U8]),
);

/// Box identifiers, one u8 per configured box
pub const BOXIDS: Command = Command::new(119, "MSP_BOXIDS", PayloadLayout::Repeating(&[U8]));

/// Servo configuration (min, max, middle, rate) per servo
pub const SERVO_CONF: Command = Command::new(
    120,
    "MSP_SERVO_CONF",
    PayloadLayout::Repeating(&[U16, U16, U16, U8]),
);

// =============================================================================
// Setters (200..)
// =============================================================================

/// Inject RC channel values, one u16 per channel
pub const SET_RAW_RC: Command =
    Command::new(200, "MSP_SET_RAW_RC", PayloadLayout::Repeating(&[U16]));

/// Inject a GPS fix
pub const SET_RAW_GPS: Command = Command::new(
    201,
    "MSP_SET_RAW_GPS",
    PayloadLayout::Fixed(&[U8, U8, U32, U32, U16, U16]),
);

/// Write P, I, and D gains per control axis
pub const SET_PID: Command =
    Command::new(202, "MSP_SET_PID", PayloadLayout::Repeating(&[U8, U8, U8]));

/// Write box activation bitmasks
pub const SET_BOX: Command = Command::new(203, "MSP_SET_BOX", PayloadLayout::Repeating(&[U16]));

/// Write rates, expo, and throttle curve settings
pub const SET_RC_TUNING: Command = Command::new(
    204,
    "MSP_SET_RC_TUNING",
    PayloadLayout::Fixed(&[U8, U8, U8, U8, U8, U8, U8]),
);

/// Trigger accelerometer calibration
pub const ACC_CALIBRATION: Command =
    Command::new(205, "MSP_ACC_CALIBRATION", PayloadLayout::Empty);

/// Trigger magnetometer calibration
pub const MAG_CALIBRATION: Command =
    Command::new(206, "MSP_MAG_CALIBRATION", PayloadLayout::Empty);

/// Write miscellaneous configuration values
pub const SET_MISC: Command = Command::new(
    207,
    "MSP_SET_MISC",
    PayloadLayout::Fixed(&[U16, U16, U16, U16, U16, U16, U32, I16, U8, U8, U8, U8]),
);

/// Reset configuration to firmware defaults
pub const RESET_CONF: Command = Command::new(208, "MSP_RESET_CONF", PayloadLayout::Empty);

/// Write one navigation waypoint
pub const SET_WP: Command = Command::new(
    209,
    "MSP_SET_WP",
    PayloadLayout::Fixed(&[U8, I32, I32, I32, I16, U16, U8]),
);

/// Select the active configuration profile
pub const SELECT_SETTING: Command =
    Command::new(210, "MSP_SELECT_SETTING", PayloadLayout::Fixed(&[U8]));

/// Set the heading hold target
pub const SET_HEAD: Command = Command::new(211, "MSP_SET_HEAD", PayloadLayout::Fixed(&[I16]));

/// Trigger receiver bind mode
pub const BIND: Command = Command::new(240, "MSP_BIND", PayloadLayout::Empty);

/// Commit settings to EEPROM
pub const EEPROM_WRITE: Command = Command::new(250, "MSP_EEPROM_WRITE", PayloadLayout::Empty);

/// Every command in the standard table
pub const ALL: &[Command] = &[
    IDENT,
    STATUS,
    RAW_IMU,
    SERVO,
    MOTOR,
    RC,
    RAW_GPS,
    COMP_GPS,
    ATTITUDE,
    ALTITUDE,
    ANALOG,
    RC_TUNING,
    PID,
    BOX,
    MISC,
    MOTOR_PINS,
    BOXNAMES,
    PIDNAMES,
    WP,
    BOXIDS,
    SERVO_CONF,
    SET_RAW_RC,
    SET_RAW_GPS,
    SET_PID,
    SET_BOX,
    SET_RC_TUNING,
    ACC_CALIBRATION,
    MAG_CALIBRATION,
    SET_MISC,
    RESET_CONF,
    SET_WP,
    SELECT_SETTING,
    SET_HEAD,
    BIND,
    EEPROM_WRITE,
];
