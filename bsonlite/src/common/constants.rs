// name constants
pub const INTERNAL_NAME_SEPARATOR: &str = "|";
pub const RESERVED_NAME_PREFIX: &str = "$bsonlite";
pub const RESERVED_NAMES: [&str; 2] = [INTERNAL_NAME_SEPARATOR, RESERVED_NAME_PREFIX];

// Compile-time assertion for reserved names count
const _RESERVED_NAMES_CHECK: () = {
    const RESERVED_NAMES_COUNT: usize = 2;
    const ACTUAL_RESERVED_NAMES: usize = RESERVED_NAMES.len();
    const _: [(); 1] = [(); (ACTUAL_RESERVED_NAMES == RESERVED_NAMES_COUNT) as usize];
};

// binary subtype constants
pub const BINARY_SUBTYPE_GENERIC: u8 = 0x00;
pub const BINARY_SUBTYPE_FUNCTION: u8 = 0x01;
pub const BINARY_SUBTYPE_UUID: u8 = 0x04;
pub const BINARY_SUBTYPE_MD5: u8 = 0x05;
pub const BINARY_SUBTYPE_USER_DEFINED: u8 = 0x80;

// objectid constants
pub const OBJECT_ID_LENGTH: usize = 12;
pub const OBJECT_ID_HEX_LENGTH: usize = 24;

// regex constants
pub const REGEX_VALID_OPTIONS: &str = "ilmsux";

pub const BSONLITE_VERSION: &str = env!("CARGO_PKG_VERSION");
