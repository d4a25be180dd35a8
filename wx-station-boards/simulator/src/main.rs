mod drivers;

use std::time::{SystemTime, UNIX_EPOCH};

use embassy_executor::Spawner;
use wx_station_common::*;
use wx_station_core::{ReqwlessFetcher, Station};

use crate::drivers::{PngDisplay, SystemRtc, init_network, wait_for_network};

const DEFAULT_FRAME_PATH: &str = "wx-station.png";

fn boot_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0x5eed_cafe)
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = StationConfig::default();
    let seed = boot_seed();

    let stack = match init_network(spawner, seed) {
        Ok(stack) => stack,
        Err(e) => {
            error!("Network init failed (is tap99 configured?): {}", e);
            return;
        }
    };
    wait_for_network(stack).await;

    let frame_path = std::env::var("WX_FRAME_PATH").unwrap_or_else(|_| DEFAULT_FRAME_PATH.into());
    info!("Writing frames to {}", frame_path);

    let fetcher = ReqwlessFetcher::new(stack, seed.rotate_left(17));
    let mut station = match Station::new(config, fetcher, SystemRtc::new(), PngDisplay::new(frame_path)) {
        Ok(station) => station,
        Err(e) => {
            error!("Station init failed: {}", e);
            return;
        }
    };

    station.run().await
}
