pub mod api;
pub mod classifier;
pub mod converter;

pub use api::{ForecastResponse, GeocodeResponse, forecast_url, geocode_url};
pub use classifier::{classify, compass_sector, condition_word, icon_for_code};
pub use converter::{convert_forecast_response, populate};
