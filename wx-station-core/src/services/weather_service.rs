use alloc::string::String;

use embassy_time::{Duration, with_timeout};
use wx_station_common::weather::{forecast_url, populate};
use wx_station_common::*;

/// Fetches and parses one forecast. Produces a whole snapshot or an error,
/// never anything in between.
pub struct WeatherService {
    url: String,
    timeout: Duration,
}

impl WeatherService {
    pub fn new(config: &StationConfig) -> Self {
        Self {
            url: forecast_url(config),
            timeout: Duration::from_secs(config.fetch_timeout_secs as u64),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch_snapshot<F: HttpFetch>(
        &self,
        fetcher: &mut F,
        buffer: &mut [u8],
        location: &str,
    ) -> SystemResult<ForecastSnapshot> {
        if !fetcher.is_link_up() {
            return Err(FetchError::NotConnected.into());
        }

        debug!("Fetching forecast: {}", self.url.as_str());
        let payload = with_timeout(self.timeout, fetcher.get(&self.url, buffer))
            .await
            .map_err(|_| FetchError::Timeout)??;
        debug!("Forecast payload: {} bytes", payload.len());

        let snapshot = populate(payload, location)?;
        Ok(snapshot)
    }
}
