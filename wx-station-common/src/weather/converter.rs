use super::api::{CurrentBlock, DAILY_ENTRIES, DailyBlock, ForecastResponse};
use crate::types::weather::{
    CurrentConditions, DailyForecast, FORECAST_DAYS, ForecastSnapshot, bounded_location,
};
use crate::types::ParseError;

/// Parses a raw forecast payload into a complete snapshot. Nothing is
/// returned unless every required field is present and in range.
pub fn populate(payload: &[u8], location: &str) -> Result<ForecastSnapshot, ParseError> {
    let response: ForecastResponse = serde_json::from_slice(payload)?;
    convert_forecast_response(&response, location)
}

pub fn convert_forecast_response(
    response: &ForecastResponse,
    location: &str,
) -> Result<ForecastSnapshot, ParseError> {
    let daily = &response.daily;
    let found = daily.complete_days();
    if found < DAILY_ENTRIES {
        return Err(ParseError::MissingDays { found });
    }

    let current = convert_current(&response.current)?;

    let mut days = [DailyForecast {
        temp_max: 0.0,
        temp_min: 0.0,
        weather_code: 0,
        sunrise: 0,
    }; FORECAST_DAYS];
    for (slot, index) in days.iter_mut().zip(1..=FORECAST_DAYS) {
        *slot = convert_day(daily, index)?;
    }

    Ok(ForecastSnapshot {
        observed_at: response.current.time.unwrap_or_default(),
        current,
        daily: days,
        sunrise: daily.sunrise[0],
        sunset: daily.sunset[0],
        location_name: bounded_location(location),
    })
}

fn convert_current(block: &CurrentBlock) -> Result<CurrentConditions, ParseError> {
    if !block.wind_direction_10m.is_finite() {
        return Err(ParseError::OutOfRange("wind_direction_10m"));
    }
    let bearing = (libm::roundf(block.wind_direction_10m) as i32).rem_euclid(360) as u16;

    Ok(CurrentConditions {
        temperature: block.temperature_2m,
        humidity: percentage(block.relative_humidity_2m, "relative_humidity_2m")?,
        pressure_hpa: block.pressure_msl,
        wind_speed: block.wind_speed_10m,
        wind_direction: bearing,
        cloud_cover: percentage(block.cloud_cover, "cloud_cover")?,
        weather_code: weather_code(block.weather_code)?,
    })
}

fn convert_day(daily: &DailyBlock, index: usize) -> Result<DailyForecast, ParseError> {
    Ok(DailyForecast {
        temp_max: daily.temperature_2m_max[index],
        temp_min: daily.temperature_2m_min[index],
        weather_code: weather_code(daily.weather_code[index])?,
        sunrise: daily.sunrise[index],
    })
}

fn percentage(value: f32, field: &'static str) -> Result<u8, ParseError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ParseError::OutOfRange(field));
    }
    Ok(libm::roundf(value) as u8)
}

fn weather_code(code: i32) -> Result<u16, ParseError> {
    u16::try_from(code).map_err(|_| ParseError::OutOfRange("weather_code"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    const PAYLOAD: &str = r#"{
        "latitude": 51.5,
        "longitude": -0.12,
        "current": {
            "time": 1792413000,
            "interval": 900,
            "temperature_2m": 14.6,
            "relative_humidity_2m": 81,
            "cloud_cover": 75,
            "pressure_msl": 1012.4,
            "wind_speed_10m": 18.2,
            "wind_direction_10m": 370,
            "weather_code": 3
        },
        "daily": {
            "time": [1792364400, 1792450800, 1792537200, 1792623600, 1792710000],
            "weather_code": [3, 61, 0, 95, 71],
            "temperature_2m_max": [16.1, 15.0, 13.2, 12.8, 9.5],
            "temperature_2m_min": [9.4, 8.8, 7.1, 6.0, 2.3],
            "sunrise": [1792391580, 1792478100, 1792564620, 1792651140, 1792737660],
            "sunset": [1792429500, 1792515780, 1792602060, 1792688340, 1792774620]
        }
    }"#;

    #[test]
    fn full_payload_populates_snapshot() {
        let snapshot = populate(PAYLOAD.as_bytes(), "London, United Kingdom").unwrap();
        assert_eq!(snapshot.observed_at, 1_792_413_000);
        assert_eq!(snapshot.current.humidity, 81);
        assert_eq!(snapshot.current.cloud_cover, 75);
        assert_eq!(snapshot.current.weather_code, 3);
        assert_eq!(snapshot.current.wind_direction, 10);
        assert_eq!(snapshot.sunrise, 1_792_391_580);
        assert_eq!(snapshot.sunset, 1_792_429_500);
        // Today is not one of the forecast panels.
        assert_eq!(snapshot.daily[0].weather_code, 61);
        assert_eq!(snapshot.daily[0].sunrise, 1_792_478_100);
        assert_eq!(snapshot.daily[3].weather_code, 71);
        assert_eq!(snapshot.location_name.as_str(), "London, United Kingdom");
    }

    fn without(block: &str, field: &str) -> alloc::vec::Vec<u8> {
        let mut value: serde_json::Value = serde_json::from_str(PAYLOAD).unwrap();
        let removed = value[block]
            .as_object_mut()
            .and_then(|fields| fields.remove(field));
        assert!(removed.is_some(), "fixture has no {block}.{field}");
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn missing_required_field_fails_wholesale() {
        let required = [
            ("current", "temperature_2m"),
            ("current", "relative_humidity_2m"),
            ("current", "cloud_cover"),
            ("current", "pressure_msl"),
            ("current", "wind_speed_10m"),
            ("current", "wind_direction_10m"),
            ("current", "weather_code"),
            ("daily", "weather_code"),
            ("daily", "temperature_2m_max"),
            ("daily", "temperature_2m_min"),
            ("daily", "sunrise"),
            ("daily", "sunset"),
        ];
        for (block, field) in required {
            let result = populate(&without(block, field), "x");
            assert!(
                matches!(result, Err(ParseError::Json { .. })),
                "dropping {block}.{field} gave {result:?}"
            );
        }
    }

    #[test]
    fn optional_fields_may_be_absent() {
        assert!(populate(&without("current", "time"), "x").is_ok());
        assert!(populate(&without("daily", "time"), "x").is_ok());
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let payload = PAYLOAD.replacen("\"pressure_msl\": 1012.4", "\"pressure_msl\": \"high\"", 1);
        assert!(matches!(
            populate(payload.as_bytes(), "x"),
            Err(ParseError::Json { .. })
        ));
    }

    #[test]
    fn short_daily_array_reports_missing_days() {
        let payload = PAYLOAD.replacen("[3, 61, 0, 95, 71]", "[3, 61, 0]", 1);
        assert_eq!(
            populate(payload.as_bytes(), "x"),
            Err(ParseError::MissingDays { found: 3 })
        );
    }

    #[test]
    fn out_of_range_humidity_is_rejected() {
        let payload = PAYLOAD.replacen("\"relative_humidity_2m\": 81", "\"relative_humidity_2m\": 140", 1);
        assert_eq!(
            populate(payload.as_bytes(), "x"),
            Err(ParseError::OutOfRange("relative_humidity_2m"))
        );
    }

    #[test]
    fn negative_weather_code_is_rejected() {
        let payload = PAYLOAD.replacen("[3, 61, 0, 95, 71]", "[3, 61, -1, 95, 71]", 1);
        assert_eq!(
            populate(payload.as_bytes(), "x"),
            Err(ParseError::OutOfRange("weather_code"))
        );
    }

    #[test]
    fn long_location_is_truncated_on_char_boundary() {
        let long: String = core::iter::repeat('é').take(40).collect();
        let snapshot = populate(PAYLOAD.as_bytes(), &long).unwrap();
        assert_eq!(snapshot.location_name.len(), 64);
        assert_eq!(snapshot.location_name.chars().count(), 32);
    }
}
