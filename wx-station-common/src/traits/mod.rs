pub mod network;
pub mod render;
pub mod rtc;

pub use network::*;
pub use render::*;
pub use rtc::*;
