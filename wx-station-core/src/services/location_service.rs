use core::fmt::Write;

use embassy_time::{Duration, with_timeout};
use wx_station_common::weather::{GeocodeResponse, geocode_url};
use wx_station_common::*;

/// Reverse-geocoded place name with a sticky cache. Lookups are best
/// effort: any failure leaves the cached name in place.
pub struct LocationService {
    cache: LocationName,
    timeout: Duration,
}

impl LocationService {
    pub fn new(default_location: &str, timeout_secs: u16) -> Self {
        Self {
            cache: bounded_location(default_location),
            timeout: Duration::from_secs(timeout_secs as u64),
        }
    }

    pub fn cached(&self) -> &str {
        &self.cache
    }

    pub async fn resolve<F: HttpFetch>(
        &mut self,
        fetcher: &mut F,
        buffer: &mut [u8],
        latitude: f32,
        longitude: f32,
    ) -> &str {
        match self.lookup(fetcher, buffer, latitude, longitude).await {
            Ok(name) => {
                if name != self.cache {
                    info!("Location resolved: {}", name.as_str());
                }
                self.cache = name;
            }
            Err(e) => {
                warn!("Location lookup failed, keeping '{}': {:?}", self.cache.as_str(), e);
            }
        }
        &self.cache
    }

    async fn lookup<F: HttpFetch>(
        &self,
        fetcher: &mut F,
        buffer: &mut [u8],
        latitude: f32,
        longitude: f32,
    ) -> SystemResult<LocationName> {
        if !fetcher.is_link_up() {
            return Err(FetchError::NotConnected.into());
        }

        let url = geocode_url(latitude, longitude);
        let payload = with_timeout(self.timeout, fetcher.get(&url, buffer))
            .await
            .map_err(|_| FetchError::Timeout)??;
        let response: GeocodeResponse = serde_json::from_slice(payload).map_err(ParseError::from)?;
        Ok(compose_location(&response)?)
    }
}

/// `City, Country`. City wins over locality; blank fields count as missing.
pub fn compose_location(response: &GeocodeResponse) -> Result<LocationName, ParseError> {
    let place = [response.city.as_deref(), response.locality.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .ok_or(ParseError::EmptyField("city"))?;
    let country = response
        .country_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(ParseError::EmptyField("countryName"))?;

    let mut text = alloc::string::String::new();
    let _ = write!(text, "{}, {}", place, country);
    Ok(bounded_location(&text))
}
