use crate::FrameError;
use chrono::{DateTime, Local, NaiveDateTime};
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of local wall-clock time.
pub trait Clock {
    fn now(&self) -> Result<NaiveDateTime, FrameError>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Result<NaiveDateTime, FrameError> {
        (**self).now()
    }
}

/// Reads the host clock and converts it to the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<NaiveDateTime, FrameError> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| FrameError::ClockUnavailable)?;
        let secs =
            i64::try_from(since_epoch.as_secs()).map_err(|_| FrameError::ClockUnavailable)?;
        let utc = DateTime::from_timestamp(secs, since_epoch.subsec_nanos())
            .ok_or(FrameError::ClockUnavailable)?;
        Ok(utc.with_timezone(&Local).naive_local())
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> Result<NaiveDateTime, FrameError> {
        Ok(self.0)
    }
}
