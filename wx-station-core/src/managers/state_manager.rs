use alloc::vec;
use alloc::vec::Vec;

use embassy_time::{Duration, Timer};
use wx_station_common::*;
use wx_station_graphics::{MonoMetrics, PlanInput, RenderPlan, build_plan, execute_plan};

use crate::services::{
    LocationService, MinuteTicker, RefreshSchedule, TimeService, WeatherService,
};

/// Receive buffer shared by the forecast and geocode requests.
pub const RESPONSE_BUFFER_SIZE: usize = 8192;

const TICK: Duration = Duration::from_secs(1);

/// Memory of the last accepted pressure reading, compared in whole hPa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressureTrend {
    previous: Option<i32>,
    last: Trend,
}

impl PressureTrend {
    /// Records a reading from a freshly parsed snapshot and returns the
    /// trend against the one before it. A missing or zero previous reading
    /// gives no trend.
    pub fn observe(&mut self, pressure_hpa: f32) -> Trend {
        let current = libm::roundf(pressure_hpa) as i32;
        let trend = match self.previous {
            Some(previous) if previous != 0 && current > previous => Trend::Rising,
            Some(previous) if previous != 0 && current < previous => Trend::Falling,
            _ => Trend::Steady,
        };
        self.previous = Some(current);
        self.last = trend;
        trend
    }

    pub fn current(&self) -> Trend {
        self.last
    }

    pub fn previous(&self) -> Option<i32> {
        self.previous
    }
}

/// State that outlives a single refresh cycle.
#[derive(Debug, Clone, Default)]
pub struct StationState {
    snapshot: Option<ForecastSnapshot>,
    pressure: PressureTrend,
}

impl StationState {
    /// Swaps in a complete snapshot.
    pub fn accept(&mut self, snapshot: ForecastSnapshot) -> Trend {
        let trend = self.pressure.observe(snapshot.current.pressure_hpa);
        self.snapshot = Some(snapshot);
        trend
    }

    pub fn snapshot(&self) -> Option<&ForecastSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn trend(&self) -> Trend {
        self.pressure.current()
    }
}

pub struct Station<F: HttpFetch, R: Rtc, B: RenderBackend> {
    config: StationConfig,
    fetcher: F,
    time: TimeService<R>,
    backend: B,
    weather: WeatherService,
    location: LocationService,
    state: StationState,
    schedule: RefreshSchedule,
    ticker: MinuteTicker,
    buffer: Vec<u8>,
}

impl<F: HttpFetch, R: Rtc, B: RenderBackend> Station<F, R, B> {
    pub fn new(config: StationConfig, fetcher: F, rtc: R, backend: B) -> SystemResult<Self> {
        config.validate()?;
        let clock = LocalClock::new(&config.timezone)?;

        info!(
            "Station at {}, {} ({:?}), refresh every {} min",
            config.latitude, config.longitude, config.units, config.refresh_interval_minutes
        );

        Ok(Self {
            weather: WeatherService::new(&config),
            location: LocationService::new(&config.default_location, config.geocode_timeout_secs),
            schedule: RefreshSchedule::new(config.refresh_interval_secs()),
            ticker: MinuteTicker::new(),
            time: TimeService::new(rtc, clock),
            state: StationState::default(),
            buffer: vec![0; RESPONSE_BUFFER_SIZE],
            config,
            fetcher,
            backend,
        })
    }

    /// One pass of the main loop at time `now`: refresh if due, then redraw
    /// if the data changed or the minute rolled over. Returns whether the
    /// display was redrawn.
    pub async fn step(&mut self, now: i64) -> SystemResult<bool> {
        let mut redraw = self.ticker.tick(now);

        if self.schedule.is_due(now) {
            self.schedule.mark_attempt(now);
            match self.refresh().await {
                Ok(trend) => {
                    info!("Weather refreshed (pressure trend {:?})", trend);
                    redraw = true;
                }
                Err(e) => warn!("Refresh failed, keeping previous snapshot: {:?}", e),
            }
        }

        if redraw {
            self.redraw(now)?;
        }
        Ok(redraw)
    }

    /// Resolves the location, then fetches and parses a forecast. State is
    /// only touched once a complete snapshot exists.
    pub async fn refresh(&mut self) -> SystemResult<Trend> {
        let location = bounded_location(
            self.location
                .resolve(
                    &mut self.fetcher,
                    &mut self.buffer,
                    self.config.latitude,
                    self.config.longitude,
                )
                .await,
        );

        let snapshot = self
            .weather
            .fetch_snapshot(&mut self.fetcher, &mut self.buffer, &location)
            .await?;
        Ok(self.state.accept(snapshot))
    }

    pub fn plan(&self, now: i64) -> RenderPlan {
        let input = PlanInput {
            snapshot: self.state.snapshot(),
            trend: self.state.trend(),
            location: self.location.cached(),
            clock: self.time.clock(),
            units: self.config.units,
            now,
        };
        build_plan(&input, &MonoMetrics)
    }

    fn redraw(&mut self, now: i64) -> SystemResult<()> {
        let plan = self.plan(now);
        execute_plan(&plan, &mut self.backend).map_err(|e| {
            error!("Render failed: {:?}", e);
            SystemError::Render
        })
    }

    pub async fn run(&mut self) -> ! {
        info!("Station loop started");
        loop {
            let now = self.time.now().await;
            if let Err(e) = self.step(now).await {
                error!("Station step failed: {:?}", e);
            }
            Timer::after(TICK).await;
        }
    }

    pub fn state(&self) -> &StationState {
        &self.state
    }

    pub fn location(&self) -> &str {
        self.location.cached()
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
