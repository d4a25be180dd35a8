use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

use crate::types::{GEOCODE_HOST, StationConfig, UnitSystem};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,cloud_cover,pressure_msl,wind_speed_10m,wind_direction_10m,weather_code";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,sunrise,sunset";

/// Today plus the forecast days.
pub const DAILY_ENTRIES: usize = 5;

// Open-Meteo forecast response, requested with `timeformat=unixtime`.
// https://open-meteo.com/en/docs
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current: CurrentBlock,
    pub daily: DailyBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentBlock {
    #[serde(default)]
    pub time: Option<i64>,
    pub temperature_2m: f32,
    pub relative_humidity_2m: f32,
    pub cloud_cover: f32,
    pub pressure_msl: f32,
    pub wind_speed_10m: f32,
    pub wind_direction_10m: f32,
    pub weather_code: i32,
}

/// Column-oriented daily arrays; index 0 is today.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyBlock {
    pub weather_code: Vec<i32>,
    pub temperature_2m_max: Vec<f32>,
    pub temperature_2m_min: Vec<f32>,
    pub sunrise: Vec<i64>,
    pub sunset: Vec<i64>,
}

impl DailyBlock {
    /// Length of the shortest column.
    pub fn complete_days(&self) -> usize {
        [
            self.weather_code.len(),
            self.temperature_2m_max.len(),
            self.temperature_2m_min.len(),
            self.sunrise.len(),
            self.sunset.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0)
    }
}

// BigDataCloud reverse geocoding; every field may be absent or empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default, rename = "countryName")]
    pub country_name: Option<String>,
}

pub fn forecast_url(config: &StationConfig) -> String {
    let units = match config.units {
        UnitSystem::Metric => "",
        UnitSystem::Imperial => "&temperature_unit=fahrenheit&wind_speed_unit=mph",
    };
    format!(
        "http://{}/v1/forecast?latitude={:.4}&longitude={:.4}&current={}&daily={}&timeformat=unixtime&timezone=auto&forecast_days={}{}",
        config.weather_host,
        config.latitude,
        config.longitude,
        CURRENT_FIELDS,
        DAILY_FIELDS,
        DAILY_ENTRIES,
        units
    )
}

pub fn geocode_url(latitude: f32, longitude: f32) -> String {
    format!(
        "https://{}/data/reverse-geocode-client?latitude={:.4}&longitude={:.4}&localityLanguage=en",
        GEOCODE_HOST, latitude, longitude
    )
}
