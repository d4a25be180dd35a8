mod display;
mod network;
mod rtc;

pub use display::{DisplayError, PngDisplay};
pub use network::{init_network, wait_for_network};
pub use rtc::SystemRtc;
