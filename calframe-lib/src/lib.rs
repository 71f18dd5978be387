pub mod calendar;
pub mod clock;
pub mod consts;
pub mod frame;

use calendar::CalendarFields;
use chrono::{Datelike, NaiveDateTime, Timelike};
use clock::{Clock, SystemClock};
use frame::Frame;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("Host clock is unavailable")]
    ClockUnavailable,
    #[error("Year {0} does not fit in a frame")]
    YearOutOfRange(i32),
}

/// Encodes a timestamp into a date/time [Frame].
/// See [Frame] for more information about the binary format.
pub fn encode<T: Datelike + Timelike>(timestamp: &T) -> Result<Frame, FrameError> {
    let fields = CalendarFields::from_datetime(timestamp)?;
    Ok(Frame::from_fields(&fields))
}

/// A frame together with the clock reading and the field values it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedFrame {
    pub timestamp: NaiveDateTime,
    pub fields: CalendarFields,
    pub frame: Frame,
}

/// Builds frames from the current time of an injected [Clock].
#[derive(Debug, Clone, Default)]
pub struct FrameEncoder<C: Clock> {
    clock: C,
}

impl FrameEncoder<SystemClock> {
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> FrameEncoder<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Samples the clock once and encodes that instant.
    pub fn encode_now(&self) -> Result<EncodedFrame, FrameError> {
        let timestamp = self.clock.now()?;
        let fields = CalendarFields::from_datetime(&timestamp)?;
        let frame = Frame::from_fields(&fields);
        tracing::trace!("encoded {} as {}", timestamp, frame);
        Ok(EncodedFrame {
            timestamp,
            fields,
            frame,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::clock::FixedClock;

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_encode_saturday_new_year_2000() {
        let frame = encode(&datetime(2000, 1, 1, 0, 0, 30)).unwrap();
        let bytes = frame.as_bytes();
        assert_eq!(bytes[3..5], [0x1E, 0x00]);
        assert_eq!(bytes[11..13], [0x06, 0x00]);
        assert_eq!(bytes[13..15], [0x00, 0x00]);
        assert_eq!(bytes[15..17], [0xD0, 0x07]);
    }

    #[test]
    fn test_encode_matches_controller_capture() {
        // Captured from the track controller, which appends one trailing byte of its own
        let captured: [u8; 20] = [
            0x10, 0x01, 0x10, 0x34, 0x00, 0x14, 0x00, 0x15, 0x00, 0x14, 0x00, 0x02, 0x00, 0x06,
            0x00, 0xE5, 0x07, 0x10, 0x03, 0x78,
        ];
        let frame = encode(&datetime(2021, 7, 20, 21, 20, 52)).unwrap();
        assert_eq!(frame.as_bytes()[..], captured[..19]);
    }

    #[test]
    fn test_encode_accepts_zoned_datetimes() {
        let utc = datetime(2021, 7, 27, 10, 10, 35).and_utc();
        let frame = encode(&utc).unwrap();
        assert_eq!(
            frame.to_hex_compact(),
            "10011023000A000A001B0002000600E5071003"
        );
    }

    #[test]
    fn test_encode_rejects_year_out_of_range() {
        assert_eq!(
            encode(&datetime(-44, 3, 15, 12, 0, 0)),
            Err(FrameError::YearOutOfRange(-44))
        );
    }

    #[test]
    fn test_encoder_uses_injected_clock() {
        let instant = datetime(2021, 7, 27, 10, 10, 35);
        let encoder = FrameEncoder::new(FixedClock(instant));
        let encoded = encoder.encode_now().unwrap();
        assert_eq!(encoded.timestamp, instant);
        assert_eq!(encoded.fields.day_of_week, 2);
        assert_eq!(encoded.fields.month, 6);
        assert_eq!(encoded.frame, encode(&instant).unwrap());
    }

    #[test]
    fn test_encoder_propagates_clock_failure() {
        struct BrokenClock;
        impl Clock for BrokenClock {
            fn now(&self) -> Result<NaiveDateTime, FrameError> {
                Err(FrameError::ClockUnavailable)
            }
        }
        let encoder = FrameEncoder::new(BrokenClock);
        assert_eq!(encoder.encode_now(), Err(FrameError::ClockUnavailable));
    }

    #[test]
    fn test_system_encoder_produces_framed_message() {
        let encoded = FrameEncoder::system().encode_now().unwrap();
        let bytes = encoded.frame.as_bytes();
        assert_eq!(bytes.len(), consts::FRAME_SIZE);
        assert_eq!(bytes[..3], consts::FRAME_HEADER_BYTES);
        assert_eq!(bytes[17..], consts::FRAME_FOOTER_BYTES);
    }
}
