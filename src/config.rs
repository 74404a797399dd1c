//! Construction-time configuration.

use crate::error::UnsupportedColorOrder;
use crate::ili9488::registers::InitCommand;
use crate::lcd::{NoResetPin, ResetLine};

/// Order of the color components on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    #[default]
    Rgb,
    Bgr,
}

/// Decodes the host's element-order code: 0 is RGB, 1 is BGR.
impl TryFrom<u8> for ColorOrder {
    type Error = UnsupportedColorOrder;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Rgb),
            1 => Ok(Self::Bgr),
            other => Err(UnsupportedColorOrder(other)),
        }
    }
}

/// Everything the driver needs to know about the panel before it is built.
pub struct PanelConfig<'a, RST = NoResetPin> {
    /// Hardware reset line. `None` selects the software reset command.
    pub reset: Option<RST>,
    /// Level that holds the controller in reset.
    pub reset_active_high: bool,
    pub color_order: ColorOrder,
    /// Only 18 is supported.
    pub bits_per_pixel: u8,
    /// Vendor initialization table, replacing the built-in one.
    pub init_cmds: Option<&'a [InitCommand<'a>]>,
}

impl<'a> PanelConfig<'a, NoResetPin> {
    /// RGB, 18 bits per pixel, software reset, built-in init table.
    pub const fn new() -> Self {
        Self {
            reset: None,
            reset_active_high: false,
            color_order: ColorOrder::Rgb,
            bits_per_pixel: 18,
            init_cmds: None,
        }
    }

    pub fn with_reset<RST: ResetLine>(self, pin: RST, active_high: bool) -> PanelConfig<'a, RST> {
        PanelConfig {
            reset: Some(pin),
            reset_active_high: active_high,
            color_order: self.color_order,
            bits_per_pixel: self.bits_per_pixel,
            init_cmds: self.init_cmds,
        }
    }
}

impl Default for PanelConfig<'_, NoResetPin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, RST> PanelConfig<'a, RST> {
    pub fn with_color_order(mut self, order: ColorOrder) -> Self {
        self.color_order = order;
        self
    }

    pub fn with_bits_per_pixel(mut self, bits: u8) -> Self {
        self.bits_per_pixel = bits;
        self
    }

    pub fn with_init_cmds(mut self, cmds: &'a [InitCommand<'a>]) -> Self {
        self.init_cmds = Some(cmds);
        self
    }
}
