//! Embassy tasks and the datagram service loop
//!
//! Two background tasks keep the radio and the network stack running;
//! everything else happens in [`serve`], the single loop that owns the
//! panel driver and replays each received datagram onto the registers.

use cyw43_pio::PioSpi;
use defmt::*;
use embassy_net::udp::{PacketMetadata, UdpSocket};
use embassy_net::Stack;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::{DMA_CH0, PIO0};

use lampyris_core::PanelDriver;
use lampyris_drivers::panel::SerialPanelBus;

use crate::config;

/// The concrete register bus wired up in `main`
pub type PanelBus = SerialPanelBus<Output<'static>>;

/// Largest datagram the pixel socket accepts (standard Ethernet MTU)
const MAX_DATAGRAM: usize = 1472;

/// Socket receive buffering: a few datagrams queue in the stack while
/// one is being drawn; anything beyond that is dropped by the stack
const RX_META_COUNT: usize = 4;
const RX_BUFFER_SIZE: usize = 4 * MAX_DATAGRAM;

/// WiFi chip runner task
#[embassy_executor::task]
pub async fn wifi_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

/// Network stack runner task
#[embassy_executor::task]
pub async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}

/// Receive pixel datagrams and drive the panel, forever
///
/// Datagrams are serviced strictly one at a time: the driver fully
/// drains each payload onto the register bus before the socket is
/// polled again. The driver guarantees the panel is left disabled
/// between datagrams.
pub async fn serve(stack: Stack<'static>, mut driver: PanelDriver<PanelBus>) -> ! {
    let mut rx_meta = [PacketMetadata::EMPTY; RX_META_COUNT];
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    // The pixel socket never transmits
    let mut tx_meta = [PacketMetadata::EMPTY; 1];
    let mut tx_buffer = [0u8; 32];

    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );
    socket.bind(config::PIXEL_PORT).unwrap();
    info!("Listening for pixel commands on UDP port {}", config::PIXEL_PORT);

    let mut datagram = [0u8; MAX_DATAGRAM];
    loop {
        match socket.recv_from(&mut datagram).await {
            Ok((len, meta)) => {
                trace!("{} pixel bytes from {}", len, meta.endpoint);
                driver.handle_datagram(config::PIXEL_PORT, &datagram[..len]);
            }
            Err(e) => {
                warn!("Datagram receive error: {:?}", e);
            }
        }
    }
}
