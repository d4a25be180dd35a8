pub mod config;
pub mod error;
pub mod time;
pub mod weather;

pub use config::*;
pub use error::*;
pub use time::*;
pub use weather::*;
