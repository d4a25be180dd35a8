use wx_station_common::*;

/// Wall clock for the station: RTC seconds plus the configured timezone.
pub struct TimeService<R: Rtc> {
    rtc: R,
    clock: LocalClock,
    last_known: i64,
}

impl<R: Rtc> TimeService<R> {
    pub fn new(rtc: R, clock: LocalClock) -> Self {
        Self {
            rtc,
            clock,
            last_known: 0,
        }
    }

    /// Current Unix time. An RTC read error repeats the last good reading.
    pub async fn now(&mut self) -> i64 {
        match self.rtc.get_time().await {
            Ok(timestamp) => {
                self.last_known = timestamp;
                timestamp
            }
            Err(e) => {
                warn!("RTC read failed: {:?}", e);
                self.last_known
            }
        }
    }

    pub fn clock(&self) -> &LocalClock {
        &self.clock
    }

    pub fn local(&self, timestamp: i64) -> LocalDateTime {
        self.clock.to_local(timestamp)
    }
}

/// Decides when the weather is due. The attempt time is recorded whether
/// or not the cycle succeeds, so a failing network is retried once per
/// interval rather than on every tick.
#[derive(Debug, Clone, Copy)]
pub struct RefreshSchedule {
    interval_secs: i64,
    last_attempt: Option<i64>,
}

impl RefreshSchedule {
    pub fn new(interval_secs: i64) -> Self {
        Self {
            interval_secs,
            last_attempt: None,
        }
    }

    pub fn is_due(&self, now: i64) -> bool {
        match self.last_attempt {
            None => true,
            Some(last) => now - last >= self.interval_secs || now < last,
        }
    }

    pub fn mark_attempt(&mut self, now: i64) {
        self.last_attempt = Some(now);
    }

    pub fn last_attempt(&self) -> Option<i64> {
        self.last_attempt
    }
}

/// Fires once per wall-clock minute.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinuteTicker {
    last_minute: Option<i64>,
}

impl MinuteTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time it sees a given minute.
    pub fn tick(&mut self, now: i64) -> bool {
        let minute = now.div_euclid(60);
        if self.last_minute == Some(minute) {
            return false;
        }
        self.last_minute = Some(minute);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    struct SteppingRtc {
        readings: core::cell::RefCell<alloc::vec::Vec<Result<i64, ()>>>,
    }

    impl Rtc for SteppingRtc {
        type Error = ();

        async fn get_time(&self) -> Result<i64, ()> {
            self.readings.borrow_mut().pop().unwrap_or(Err(()))
        }
    }

    #[test]
    fn schedule_first_tick_is_due() {
        let schedule = RefreshSchedule::new(1_800);
        assert!(schedule.is_due(0));
        assert_eq!(schedule.last_attempt(), None);
    }

    #[test]
    fn schedule_waits_full_interval_after_any_attempt() {
        let mut schedule = RefreshSchedule::new(1_800);
        schedule.mark_attempt(10_000);
        assert!(!schedule.is_due(10_001));
        assert!(!schedule.is_due(11_799));
        assert!(schedule.is_due(11_800));
    }

    #[test]
    fn schedule_refreshes_when_clock_jumps_back() {
        let mut schedule = RefreshSchedule::new(1_800);
        schedule.mark_attempt(10_000);
        assert!(schedule.is_due(9_000));
    }

    #[test]
    fn ticker_fires_on_minute_rollover() {
        let mut ticker = MinuteTicker::new();
        assert!(ticker.tick(120));
        assert!(!ticker.tick(121));
        assert!(!ticker.tick(179));
        assert!(ticker.tick(180));
        assert!(!ticker.tick(185));
    }

    #[test]
    fn rtc_error_repeats_last_reading() {
        let rtc = SteppingRtc {
            readings: core::cell::RefCell::new(alloc::vec![Err(()), Ok(1_700_000_000)]),
        };
        let mut time = TimeService::new(rtc, LocalClock::utc());
        assert_eq!(block_on(time.now()), 1_700_000_000);
        assert_eq!(block_on(time.now()), 1_700_000_000);
        assert_eq!(time.local(1_700_000_000).format_time().as_str(), "22:13");
    }
}
