use std::fmt;

use crate::{
    calendar::{CalendarFields, FrameField},
    consts::*,
};

/// The date/time message frame has the following fixed-size binary format:
///
/// * [FRAME_HEADER_BYTES]: [DLE], [SOH] and the [DATE_TIME_MESSAGE_TYPE]
/// * seven calendar fields, each a little-endian u16 of [FIELD_SIZE] bytes, in this order:
///     - seconds (0-59)
///     - minutes (0-59)
///     - hour of day (0-23)
///     - day of month (1-31)
///     - day of week (0-6, 0 = Sunday)
///     - month (0-11, 0 = January)
///     - year (4 digits)
/// * [FRAME_FOOTER_BYTES]: [DLE] and [ETX]
///
/// This adds up to [FRAME_SIZE] bytes. The buffer starts zero-filled and is never modified once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame([u8; FRAME_SIZE]);

impl Frame {
    /// Builds a frame from already normalized calendar fields.
    pub fn from_fields(fields: &CalendarFields) -> Frame {
        let mut bytes: [u8; FRAME_SIZE] = [0; FRAME_SIZE];
        bytes[..FRAME_HEADER_BYTES.len()].copy_from_slice(&FRAME_HEADER_BYTES);

        for field in FrameField::ALL {
            let value = fields.field(field);
            let offset = field.offset();
            bytes[offset..offset + FIELD_SIZE].copy_from_slice(&value.to_le_bytes());
            tracing::debug!("{}: {}", field.label(), value);
        }

        bytes[FRAME_SIZE - FRAME_FOOTER_BYTES.len()..].copy_from_slice(&FRAME_FOOTER_BYTES);
        Frame(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; FRAME_SIZE] {
        &self.0
    }

    /// Formats the frame as uppercase hex, one space between bytes.
    pub fn to_hex(&self) -> String {
        self.0
            .iter()
            .map(|byte| format!("{byte:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Formats the frame as uppercase hex without separators, as seen in controller logs.
    pub fn to_hex_compact(&self) -> String {
        self.0.iter().map(|byte| format!("{byte:02X}")).collect()
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
