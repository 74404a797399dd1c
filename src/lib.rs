//! Driver for ILI9488 LCD panels, as fitted to the 4D Systems gen4-ESP32-35.
//!
//! The driver sends the controller's init sequence, keeps copies of the
//! MADCTL and COLMOD registers so mirroring and axis swaps stay consistent
//! with whatever the init table wrote, and turns draw windows into
//! CASET/PASET/RAMWR traffic.
//!
//! ```ignore
//! let bus = SpiTransport::new(spi_device, dc);
//! let mut panel = Ili9488::new(bus, delay, board::panel_config())?;
//! panel.reset()?;
//! panel.init()?;
//! panel.mirror(true, false)?;
//! panel.draw_bitmap(0, 0, 320, 16, &rows)?;
//! ```
//!
//! With the `graphics` feature the driver is also an `embedded-graphics`
//! `DrawTarget<Color = Rgb666>`. The `defmt` feature turns on logging.

#![no_std]

#[cfg(test)]
extern crate std;

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod board;
pub mod config;
pub mod error;
pub mod ili9488;
pub mod lcd;
pub mod panel;

#[cfg(test)]
mod testing;

pub use config::{ColorOrder, PanelConfig};
pub use error::{Error, UnsupportedColorOrder};
pub use ili9488::registers::InitCommand;
pub use ili9488::{Ili9488, PanelError};
pub use lcd::{BusError, BusTransport, NoResetPin, OutputResetPin, ResetLine, SpiTransport};
pub use panel::Panel;
