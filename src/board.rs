//! Wiring of the 4D Systems gen4-ESP32-35 module.
//!
//! Pin numbers are ESP32 GPIOs. The host HAL uses these to build the SPI bus
//! and the [`SpiTransport`](crate::lcd::SpiTransport) handed to the driver.

use crate::config::{ColorOrder, PanelConfig};

/// SPI bus pins, plus the largest single transfer the bus must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    pub sclk: u8,
    pub mosi: u8,
    pub miso: u8,
    pub max_transfer_sz: usize,
}

/// Panel IO settings on top of the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoConfig {
    /// Chip select. The module ties CS low.
    pub cs: Option<u8>,
    pub dc: u8,
    pub spi_mode: u8,
    pub pclk_hz: u32,
    /// Pixel transfers that may be in flight at once.
    pub trans_queue_depth: usize,
    pub lcd_cmd_bits: u8,
    pub lcd_param_bits: u8,
}

pub const fn bus_config(max_transfer_sz: usize) -> BusConfig {
    BusConfig {
        sclk: 14,
        mosi: 13,
        miso: 12,
        max_transfer_sz,
    }
}

pub const IO_CONFIG: IoConfig = IoConfig {
    cs: None,
    dc: 21,
    spi_mode: 0,
    pclk_hz: 40 * 1000 * 1000,
    trans_queue_depth: 7,
    lcd_cmd_bits: 8,
    lcd_param_bits: 8,
};

/// The module has no reset GPIO and its glass is BGR.
pub fn panel_config() -> PanelConfig<'static> {
    PanelConfig::new().with_color_order(ColorOrder::Bgr)
}
