//! Lampyris - LED Matrix Panel Firmware
//!
//! Firmware binary for Pico W boards driving an LED matrix scan
//! controller. Pixel commands arrive as raw UDP datagrams and are
//! replayed, one datagram at a time, onto the controller's register bus.
//!
//! Named after Lampyris noctiluca, the common glow-worm.

#![no_std]
#![no_main]

use cyw43_pio::{PioSpi, DEFAULT_CLOCK_DIVIDER};
use defmt::*;
use embassy_executor::Spawner;
use embassy_net::{Config, Ipv4Cidr, StackResources, StaticConfigV4};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lampyris_core::PanelDriver;
use lampyris_drivers::panel::SerialPanelBus;

mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// cyw43 firmware blobs (fetched from the embassy repository, see README)
const CYW43_FW: &[u8] = include_bytes!("../cyw43-firmware/43439A0.bin");
const CYW43_CLM: &[u8] = include_bytes!("../cyw43-firmware/43439A0_clm.bin");

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lampyris firmware starting...");
    info!("Version {}", env!("CARGO_PKG_VERSION"));

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Panel register bus - pin assignments are board-specific:
    // SDI=GPIO2, SCLK=GPIO3, LE_EN=GPIO4, LE_DATA=GPIO5, LE_ADDR=GPIO6
    let bus = SerialPanelBus::new(
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
    );
    let driver = PanelDriver::new(bus);
    info!("Panel driver initialized, output disabled");

    // WiFi chip bring-up (Pico W: PWR=GPIO23, CS=GPIO25, DIO=GPIO24, CLK=GPIO29)
    let pwr = Output::new(p.PIN_23, Level::Low);
    let cs = Output::new(p.PIN_25, Level::High);
    let mut pio = Pio::new(p.PIO0, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        p.PIN_24,
        p.PIN_29,
        p.DMA_CH0,
    );

    static STATE: StaticCell<cyw43::State> = StaticCell::new();
    let state = STATE.init(cyw43::State::new());
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, CYW43_FW).await;
    spawner.spawn(tasks::wifi_task(runner)).unwrap();

    control.init(CYW43_CLM).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;
    info!("WiFi chip initialized");

    // Static network identity - the panel is a fixed appliance
    let net_config = Config::ipv4_static(StaticConfigV4 {
        address: Ipv4Cidr::new(config::IP_ADDRESS, config::PREFIX_LEN),
        gateway: None,
        dns_servers: heapless::Vec::new(),
    });

    static RESOURCES: StaticCell<StackResources<3>> = StaticCell::new();
    let (stack, runner) = embassy_net::new(
        net_device,
        net_config,
        RESOURCES.init(StackResources::new()),
        config::NET_SEED,
    );
    spawner.spawn(tasks::net_task(runner)).unwrap();

    // Join the configured network, retrying until it sticks
    loop {
        match control
            .join(
                config::WIFI_NETWORK,
                cyw43::JoinOptions::new(config::WIFI_PASSWORD.as_bytes()),
            )
            .await
        {
            Ok(()) => break,
            Err(err) => {
                warn!("WiFi join failed with status {}, retrying", err.status);
                Timer::after(Duration::from_secs(1)).await;
            }
        }
    }
    info!("Joined {}", config::WIFI_NETWORK);

    stack.wait_config_up().await;
    info!(
        "Network up at {}.{}.{}.{}",
        config::IP_ADDRESS.octets()[0],
        config::IP_ADDRESS.octets()[1],
        config::IP_ADDRESS.octets()[2],
        config::IP_ADDRESS.octets()[3],
    );

    info!("Waiting for packets...");
    tasks::serve(stack, driver).await
}
