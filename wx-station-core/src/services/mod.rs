pub mod http_client;
pub mod location_service;
pub mod time_service;
pub mod weather_service;

pub use http_client::ReqwlessFetcher;
pub use location_service::{LocationService, compose_location};
pub use time_service::{MinuteTicker, RefreshSchedule, TimeService};
pub use weather_service::WeatherService;
