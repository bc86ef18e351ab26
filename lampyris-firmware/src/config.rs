//! Compile-time device configuration
//!
//! The panel is a fixed appliance on a known network, so its identity is
//! compiled in rather than negotiated. Edit and rebuild to deploy.

use embassy_net::Ipv4Address;

/// WiFi network to join
pub const WIFI_NETWORK: &str = "lampyris";

/// WiFi passphrase
pub const WIFI_PASSWORD: &str = "glowworm42";

/// The device's static IPv4 address
pub const IP_ADDRESS: Ipv4Address = Ipv4Address::new(192, 168, 10, 30);

/// Network prefix length for [`IP_ADDRESS`]
pub const PREFIX_LEN: u8 = 24;

/// UDP port the pixel socket binds
///
/// The port's low nibble selects which panel segment(s) latch the
/// incoming pixels: 0x1001 drives segment 1. Deployments pick the port
/// to match their wiring.
pub const PIXEL_PORT: u16 = 0x1001;

/// Seed for the network stack
pub const NET_SEED: u64 = 0x6c61_6d70_7972_6973;
