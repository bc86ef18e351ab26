//! Panel register bus backends

pub mod latched;
pub mod mmio;

pub use latched::SerialPanelBus;
pub use mmio::MmioPanel;
