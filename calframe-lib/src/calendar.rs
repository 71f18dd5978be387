use crate::{FrameError, consts::*};
use chrono::{Datelike, Timelike};

/// Calendar fields carried by a frame, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameField {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    DayOfWeek,
    Month,
    Year,
}

impl FrameField {
    /// All fields in the order they are written to the frame.
    pub const ALL: [FrameField; FIELD_COUNT] = [
        FrameField::Second,
        FrameField::Minute,
        FrameField::Hour,
        FrameField::DayOfMonth,
        FrameField::DayOfWeek,
        FrameField::Month,
        FrameField::Year,
    ];

    /// Returns the byte offset of the field within a frame.
    pub fn offset(&self) -> usize {
        let index = match self {
            FrameField::Second => 0,
            FrameField::Minute => 1,
            FrameField::Hour => 2,
            FrameField::DayOfMonth => 3,
            FrameField::DayOfWeek => 4,
            FrameField::Month => 5,
            FrameField::Year => 6,
        };
        FRAME_HEADER_BYTES.len() + index * FIELD_SIZE
    }

    /// Returns the label used when printing the field.
    pub fn label(&self) -> &'static str {
        match self {
            FrameField::Second => "SECOND",
            FrameField::Minute => "MINUTE",
            FrameField::Hour => "HOUR",
            FrameField::DayOfMonth => "DAY OF MONTH",
            FrameField::DayOfWeek => "DAY OF WEEK",
            FrameField::Month => "MONTH",
            FrameField::Year => "YEAR",
        }
    }
}

/// The calendar components of a timestamp, already normalized to their on-wire values.
///
/// * `day_of_week` counts days since Sunday (0-6)
/// * `month` is 0-based (0 = January)
/// * `year` is the full calendar year, e.g. 2021
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    pub second: u16,
    pub minute: u16,
    pub hour: u16,
    pub day_of_month: u16,
    pub day_of_week: u16,
    pub month: u16,
    pub year: u16,
}

impl CalendarFields {
    /// Extracts the frame fields from any chrono date/time value.
    /// Fails only if the year cannot be represented as an unsigned 16-bit value.
    pub fn from_datetime<T: Datelike + Timelike>(timestamp: &T) -> Result<Self, FrameError> {
        let year = timestamp.year();
        let year = u16::try_from(year).map_err(|_| FrameError::YearOutOfRange(year))?;

        // chrono folds leap seconds into the nanosecond part, so second() never exceeds 59
        Ok(CalendarFields {
            second: timestamp.second() as u16,
            minute: timestamp.minute() as u16,
            hour: timestamp.hour() as u16,
            day_of_month: timestamp.day() as u16,
            day_of_week: timestamp.weekday().num_days_from_sunday() as u16,
            month: timestamp.month0() as u16,
            year,
        })
    }

    /// Returns the value written for the given field.
    pub fn field(&self, field: FrameField) -> u16 {
        match field {
            FrameField::Second => self.second,
            FrameField::Minute => self.minute,
            FrameField::Hour => self.hour,
            FrameField::DayOfMonth => self.day_of_month,
            FrameField::DayOfWeek => self.day_of_week,
            FrameField::Month => self.month,
            FrameField::Year => self.year,
        }
    }
}
