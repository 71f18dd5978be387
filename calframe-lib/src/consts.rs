/// Data Link Escape, precedes both the header and the footer marker
pub const DLE: u8 = 0x10;
/// Start of Header
pub const SOH: u8 = 0x01;
/// End of Text
pub const ETX: u8 = 0x03;

/// Identifies the frame payload as a date/time message
pub const DATE_TIME_MESSAGE_TYPE: u8 = 0x10;

/// Identifies the beginning of the frame
pub const FRAME_HEADER_BYTES: [u8; 3] = [DLE, SOH, DATE_TIME_MESSAGE_TYPE];
/// Identifies the end of the frame
pub const FRAME_FOOTER_BYTES: [u8; 2] = [DLE, ETX];

/// The size of a single calendar field in bytes
pub const FIELD_SIZE: usize = 2;
/// The number of calendar fields carried by a frame
pub const FIELD_COUNT: usize = 7;

/// The total size of an encoded frame in bytes
pub const FRAME_SIZE: usize =
    FRAME_HEADER_BYTES.len() + FIELD_COUNT * FIELD_SIZE + FRAME_FOOTER_BYTES.len();
