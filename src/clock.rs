use chrono::{Local, Timelike};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("Hour out of range: {hour} (expected 0-23)")]
    HourOutOfRange { hour: u32 },

    #[error("Minute out of range: {minute} (expected 0-59)")]
    MinuteOutOfRange { minute: u32 },
}

/// A wall-clock reading, hour and minute only. Seconds and date are
/// irrelevant to phrase generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, ClockError> {
        if hour > 23 {
            return Err(ClockError::HourOutOfRange { hour });
        }
        if minute > 59 {
            return Err(ClockError::MinuteOutOfRange { minute });
        }
        Ok(Self { hour, minute })
    }

    /// Reads the current local time. Always yields in-range components.
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            hour: now.hour(),
            minute: now.minute(),
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// 12-hour projection of the hour; always in 1-12, with 0 mapping to 12.
    pub fn display_hour(&self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }
}
