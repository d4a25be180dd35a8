mod state_manager;

pub use state_manager::{PressureTrend, RESPONSE_BUFFER_SIZE, Station, StationState};
