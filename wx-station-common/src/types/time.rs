use core::fmt::Write;

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::types::{SystemError, SystemResult};

pub type ShortText = heapless::String<16>;

/// Local wall-clock and calendar fields for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDateTime {
    pub year: i16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// 0 = Sunday.
    pub weekday: u8,
}

impl LocalDateTime {
    pub fn weekday_name(&self) -> &'static str {
        get_weekday_name(self.weekday)
    }

    pub fn month_name(&self) -> &'static str {
        get_month_name(self.month)
    }

    /// `HH:MM`, 24-hour.
    pub fn format_time(&self) -> ShortText {
        let mut out = ShortText::new();
        let _ = write!(out, "{:02}:{:02}", self.hour, self.minute);
        out
    }

    /// `Mon 19 Oct`.
    pub fn format_date(&self) -> ShortText {
        let mut out = ShortText::new();
        let _ = write!(
            out,
            "{} {} {}",
            self.weekday_name(),
            self.day,
            self.month_name()
        );
        out
    }
}

pub fn get_weekday_name(weekday: u8) -> &'static str {
    const WEEK_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    WEEK_NAMES[weekday as usize % 7]
}

pub fn get_month_name(month: u8) -> &'static str {
    const MONTH_NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    MONTH_NAMES[(month.max(1) as usize - 1) % 12]
}

/// Converts Unix timestamps to local fields under one fixed timezone rule.
#[derive(Debug, Clone)]
pub struct LocalClock {
    tz: TimeZone,
}

impl LocalClock {
    pub fn new(posix_rule: &str) -> SystemResult<Self> {
        let tz = TimeZone::posix(posix_rule)
            .map_err(|_| SystemError::Config("invalid POSIX timezone rule"))?;
        Ok(Self { tz })
    }

    pub fn utc() -> Self {
        Self { tz: TimeZone::UTC }
    }

    pub fn to_local(&self, timestamp: i64) -> LocalDateTime {
        let instant = Timestamp::from_second(timestamp).unwrap_or(Timestamp::UNIX_EPOCH);
        let dt = self.tz.to_datetime(instant);
        LocalDateTime {
            year: dt.year(),
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
            weekday: dt.weekday().to_sunday_zero_offset() as u8,
        }
    }
}
