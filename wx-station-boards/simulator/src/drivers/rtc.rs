use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

use wx_station_common::Rtc;

/// Host wall clock.
#[derive(Debug, Default)]
pub struct SystemRtc;

impl SystemRtc {
    pub fn new() -> Self {
        Self
    }
}

impl Rtc for SystemRtc {
    type Error = SystemTimeError;

    async fn get_time(&self) -> Result<i64, Self::Error> {
        let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)?;
        Ok(elapsed.as_secs() as i64)
    }
}
