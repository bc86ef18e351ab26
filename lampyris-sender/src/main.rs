//! Host-side test pattern sender
//!
//! Streams one full frame of pixel commands to a Lampyris panel: a
//! diagonal RGB gradient across the 64x64 matrix, so addressing and
//! channel order are verifiable at a glance during bring-up.
//!
//! Usage: `lampyris-sender <host> [port]`
//!
//! The destination port's low nibble selects the panel segment that
//! latches the frame.

use std::env;
use std::net::UdpSocket;
use std::process::ExitCode;

use lampyris_protocol::PixelCommand;

/// Panel geometry: 64x64 cells, addressed as `(y << 6) | x`
const PANEL_SIDE: u16 = 64;

/// Rows per datagram: four rows = 256 commands = 1024 payload bytes,
/// comfortably inside a standard MTU
const ROWS_PER_DATAGRAM: u16 = 4;

const DEFAULT_PORT: u16 = 0x1001;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(host) = args.next() else {
        eprintln!("usage: lampyris-sender <host> [port]");
        return ExitCode::FAILURE;
    };
    let port: u16 = match args.next() {
        Some(raw) => match raw.parse() {
            Ok(port) => port,
            Err(_) => {
                eprintln!("invalid port: {raw}");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_PORT,
    };

    let socket = match UdpSocket::bind("0.0.0.0:0") {
        Ok(socket) => socket,
        Err(err) => {
            eprintln!("failed to open socket: {err}");
            return ExitCode::FAILURE;
        }
    };

    let datagrams = frame_datagrams();
    for datagram in &datagrams {
        if let Err(err) = socket.send_to(datagram, (host.as_str(), port)) {
            eprintln!("send to {host}:{port} failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!(
        "sent {} datagrams ({} commands) to {host}:{port}, segment mask {:#x}",
        datagrams.len(),
        PANEL_SIDE as usize * PANEL_SIDE as usize,
        port & 0xF
    );
    ExitCode::SUCCESS
}

/// Linear cell address for panel coordinates
fn cell_address(x: u16, y: u16) -> u16 {
    ((y & 0x3F) << 6) | (x & 0x3F)
}

/// Narrow an 8-bit channel to the panel's 6-bit range
fn narrow(channel: u8) -> u8 {
    channel >> 2
}

/// Gradient test pattern: red rises left to right, green top to bottom,
/// blue fades toward the bottom-right corner
fn pattern(x: u16, y: u16) -> PixelCommand {
    let fx = (x * 255 / (PANEL_SIDE - 1)) as u8;
    let fy = (y * 255 / (PANEL_SIDE - 1)) as u8;
    PixelCommand {
        address: cell_address(x, y),
        red: narrow(fx),
        green: narrow(fy),
        blue: narrow(255 - fx.max(fy)),
    }
}

/// Encode the whole frame as ready-to-send datagram payloads
fn frame_datagrams() -> Vec<Vec<u8>> {
    let mut datagrams = Vec::new();
    for row_start in (0..PANEL_SIDE).step_by(ROWS_PER_DATAGRAM as usize) {
        let mut payload = Vec::new();
        for y in row_start..row_start + ROWS_PER_DATAGRAM {
            for x in 0..PANEL_SIDE {
                payload.extend_from_slice(&pattern(x, y).encode().to_be_bytes());
            }
        }
        datagrams.push(payload);
    }
    datagrams
}
