use core::fmt::Write;

use crate::types::{LocalClock, SystemError, SystemResult};

pub const DEFAULT_LATITUDE: f32 = 51.5074;
pub const DEFAULT_LONGITUDE: f32 = -0.1278;
pub const DEFAULT_TIMEZONE: &str = "GMT0BST,M3.5.0/1,M10.5.0";
pub const DEFAULT_LOCATION: &str = "London, United Kingdom";
pub const DEFAULT_WEATHER_HOST: &str = "api.open-meteo.com";
pub const GEOCODE_HOST: &str = "api.bigdatacloud.net";

pub const DEFAULT_REFRESH_MINUTES: u16 = 30;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u16 = 15;
pub const DEFAULT_GEOCODE_TIMEOUT_SECS: u16 = 5;

const HPA_TO_INHG: f32 = 0.029_53;

pub type ConfigString = heapless::String<64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "metric" | "Metric" | "METRIC" => Some(UnitSystem::Metric),
            "imperial" | "Imperial" | "IMPERIAL" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }

    pub fn temperature_suffix(self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    pub fn speed_suffix(self) -> &'static str {
        match self {
            UnitSystem::Metric => "km/h",
            UnitSystem::Imperial => "mph",
        }
    }

    /// Pressure arrives in hPa from the API in both unit systems.
    pub fn format_pressure(self, pressure_hpa: f32) -> heapless::String<16> {
        let mut out = heapless::String::new();
        let _ = match self {
            UnitSystem::Metric => write!(out, "{} hPa", libm::roundf(pressure_hpa) as i32),
            UnitSystem::Imperial => write!(out, "{:.2} inHg", pressure_hpa * HPA_TO_INHG),
        };
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationConfig {
    pub latitude: f32,
    pub longitude: f32,
    /// POSIX TZ rule, e.g. `CET-1CEST,M3.5.0,M10.5.0/3`.
    pub timezone: ConfigString,
    pub units: UnitSystem,
    pub refresh_interval_minutes: u16,
    pub fetch_timeout_secs: u16,
    pub geocode_timeout_secs: u16,
    pub default_location: ConfigString,
    pub weather_host: ConfigString,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            latitude: env_number(option_env!("WX_LATITUDE"), DEFAULT_LATITUDE),
            longitude: env_number(option_env!("WX_LONGITUDE"), DEFAULT_LONGITUDE),
            timezone: env_string(option_env!("WX_TIMEZONE"), DEFAULT_TIMEZONE),
            units: option_env!("WX_UNITS")
                .and_then(UnitSystem::parse)
                .unwrap_or_default(),
            refresh_interval_minutes: env_number(
                option_env!("WX_REFRESH_MINUTES"),
                DEFAULT_REFRESH_MINUTES,
            ),
            fetch_timeout_secs: env_number(
                option_env!("WX_FETCH_TIMEOUT_SECS"),
                DEFAULT_FETCH_TIMEOUT_SECS,
            ),
            geocode_timeout_secs: env_number(
                option_env!("WX_GEOCODE_TIMEOUT_SECS"),
                DEFAULT_GEOCODE_TIMEOUT_SECS,
            ),
            default_location: env_string(option_env!("WX_DEFAULT_LOCATION"), DEFAULT_LOCATION),
            weather_host: env_string(option_env!("WX_WEATHER_HOST"), DEFAULT_WEATHER_HOST),
        }
    }
}

impl StationConfig {
    pub fn validate(&self) -> SystemResult<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SystemError::Config("latitude outside [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SystemError::Config("longitude outside [-180, 180]"));
        }
        if self.refresh_interval_minutes == 0 {
            return Err(SystemError::Config("refresh interval must be non-zero"));
        }
        if self.fetch_timeout_secs == 0 || self.geocode_timeout_secs == 0 {
            return Err(SystemError::Config("timeouts must be non-zero"));
        }
        if self.weather_host.is_empty() {
            return Err(SystemError::Config("weather host is empty"));
        }
        LocalClock::new(&self.timezone)?;
        Ok(())
    }

    pub fn refresh_interval_secs(&self) -> i64 {
        self.refresh_interval_minutes as i64 * 60
    }
}

fn env_number<T: core::str::FromStr>(value: Option<&str>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn env_string(value: Option<&str>, default: &str) -> ConfigString {
    value
        .and_then(|v| ConfigString::try_from(v).ok())
        .or_else(|| ConfigString::try_from(default).ok())
        .unwrap_or_default()
}
