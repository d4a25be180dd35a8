use embassy_executor::Spawner;
use embassy_net::{Config, Ipv4Address, Ipv4Cidr, Stack, StackResources, StaticConfigV4};
use embassy_net_tuntap::TunTapDevice;
use static_cell::StaticCell;
use wx_station_common::*;

const TAP_DEVICE: &str = "tap99";
const ADDRESS: Ipv4Address = Ipv4Address::new(192, 168, 69, 2);
const GATEWAY: Ipv4Address = Ipv4Address::new(192, 168, 69, 100);
const DNS_SERVER: Ipv4Address = Ipv4Address::new(1, 1, 1, 1);

#[embassy_executor::task]
async fn net_task(mut runner: embassy_net::Runner<'static, TunTapDevice>) -> ! {
    runner.run().await
}

/// Brings up `tap99` with a static address and spawns the stack runner.
/// The host must have created the TAP device and routed it.
pub fn init_network(spawner: Spawner, seed: u64) -> std::io::Result<Stack<'static>> {
    let device = TunTapDevice::new(TAP_DEVICE)?;

    let mut static_config = StaticConfigV4 {
        address: Ipv4Cidr::new(ADDRESS, 24),
        gateway: Some(GATEWAY),
        dns_servers: Default::default(),
    };
    let _ = static_config.dns_servers.push(DNS_SERVER);

    static RESOURCES: StaticCell<StackResources<3>> = StaticCell::new();
    let (stack, runner) = embassy_net::new(
        device,
        Config::ipv4_static(static_config),
        RESOURCES.init(StackResources::new()),
        seed,
    );

    if let Err(e) = spawner.spawn(net_task(runner)) {
        error!("Failed to spawn net task: {:?}", e);
        return Err(std::io::Error::other("net task spawn failed"));
    }

    info!("Network stack on {} at {}", TAP_DEVICE, ADDRESS);
    Ok(stack)
}

pub async fn wait_for_network(stack: Stack<'static>) {
    stack.wait_link_up().await;
    stack.wait_config_up().await;
    info!("Network is up");
}
