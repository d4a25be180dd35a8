#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

extern crate alloc;

pub mod managers;
pub mod services;

pub use managers::{PressureTrend, Station, StationState};
pub use services::{
    LocationService, MinuteTicker, RefreshSchedule, ReqwlessFetcher, TimeService, WeatherService,
};
