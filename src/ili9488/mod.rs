//! Driver for the ILI9488 panel controller on the gen4-ESP32-35 module.
//!
//! Typical bring-up:
//!
//! ```ignore
//! let mut panel = Ili9488::new(bus, delay, PanelConfig::new())?;
//! panel.reset()?;
//! panel.init()?;
//! panel.draw_bitmap(0, 0, 320, 40, &pixels)?;
//! ```

#[cfg(feature = "graphics")]
pub mod graphics;
pub mod registers;

use embedded_hal::delay::DelayNs;

use crate::config::{ColorOrder, PanelConfig};
use crate::error::Error;
use crate::lcd::{BusTransport, ResetLine};
use crate::panel::Panel;

use registers::*;

/// Error type of an [`Ili9488`] built on bus `DI` and reset line `RST`.
pub type PanelError<DI, RST> =
    Error<<DI as BusTransport>::Error, <RST as ResetLine>::Error>;

pub struct Ili9488<'a, DI, RST, D> {
    /// Display interface.
    itf: DI,
    /// Reset pin. Without one, the software reset command is used.
    rst: Option<RST>,
    reset_active_high: bool,
    delay: D,
    x_gap: i16,
    y_gap: i16,
    fb_bits_per_pixel: u8,
    /// Last value written to MADCTL.
    madctl: u8,
    /// Last value written to COLMOD.
    colmod: u8,
    init_cmds: Option<&'a [InitCommand<'a>]>,
}

impl<'a, DI, RST, D> Ili9488<'a, DI, RST, D>
where
    DI: BusTransport,
    RST: ResetLine,
    D: DelayNs,
{
    pub const WIDTH: u16 = 320;
    pub const HEIGHT: u16 = 480;

    /// Build the driver. Nothing is sent to the panel yet; call
    /// [`reset`](Self::reset) and [`init`](Self::init) next.
    ///
    /// The reset line, if any, is configured here. It is released again if
    /// configuring it fails or the configuration turns out to be unusable.
    pub fn new(
        itf: DI,
        delay: D,
        config: PanelConfig<'a, RST>,
    ) -> Result<Self, PanelError<DI, RST>> {
        let PanelConfig {
            reset: mut rst,
            reset_active_high,
            color_order,
            bits_per_pixel,
            init_cmds,
        } = config;

        if let Some(rst) = rst.as_mut() {
            if let Err(e) = rst.configure_output() {
                rst.release();
                return Err(Error::Gpio(e));
            }
        }

        let (madctl, colmod, fb_bits_per_pixel) =
            match Self::registers_for(color_order, bits_per_pixel, init_cmds) {
                Ok(regs) => regs,
                Err(e) => {
                    if let Some(rst) = rst.as_mut() {
                        rst.release();
                    }
                    return Err(e);
                }
            };

        debug!("new ili9488 panel, madctl {:#x}", madctl);
        info!("LCD panel create success");

        Ok(Self {
            itf,
            rst,
            reset_active_high,
            delay,
            x_gap: 0,
            y_gap: 0,
            fb_bits_per_pixel,
            madctl,
            colmod,
            init_cmds,
        })
    }

    /// Initial MADCTL and COLMOD values plus framebuffer depth.
    fn registers_for(
        color_order: ColorOrder,
        bits_per_pixel: u8,
        init_cmds: Option<&[InitCommand<'_>]>,
    ) -> Result<(u8, u8, u8), PanelError<DI, RST>> {
        let madctl = match color_order {
            ColorOrder::Rgb => MADCTL_RGB,
            ColorOrder::Bgr => MADCTL_BGR,
        };

        let (colmod, fb_bits_per_pixel) = match bits_per_pixel {
            // RGB666: each component sits in the 6 high bits of its own byte
            18 => (COLOR_MODE_18BIT, 24),
            _ => return Err(Error::Unsupported),
        };

        // Shadowed registers are read back from the table during init
        let empty_override = init_cmds
            .unwrap_or_default()
            .iter()
            .any(|c| matches!(c.cmd, ILI9488_MADCTL | ILI9488_PIXFMT) && c.data.is_empty());
        if empty_override {
            return Err(Error::InvalidArgument);
        }

        Ok((madctl, colmod, fb_bits_per_pixel))
    }

    /// Release the reset line and hand back the collaborators.
    pub fn release(mut self) -> (DI, D, Option<RST>) {
        if let Some(rst) = self.rst.as_mut() {
            rst.release();
        }
        debug!("del ili9488 panel");
        (self.itf, self.delay, self.rst)
    }

    fn command(&mut self, cmd: u8, data: &[u8]) -> Result<(), PanelError<DI, RST>> {
        self.itf.send_command(cmd, data).map_err(Error::Transport)
    }

    /// Pulse the reset line, or send SWRESET when there is none.
    pub fn reset(&mut self) -> Result<(), PanelError<DI, RST>> {
        match self.rst.as_mut() {
            Some(rst) => {
                rst.set_level(self.reset_active_high);
                self.delay.delay_ms(10);
                rst.set_level(!self.reset_active_high);
                self.delay.delay_ms(10);
            }
            None => {
                self.command(ILI9488_SWRESET, &[])?;
                // at least 5ms before the next command
                self.delay.delay_ms(20);
            }
        }
        Ok(())
    }

    /// Wake the panel and run the init table (the vendor one if configured).
    ///
    /// Table entries that write MADCTL or COLMOD replace the driver's copy of
    /// those registers, so later [`mirror`](Self::mirror) and
    /// [`swap_xy`](Self::swap_xy) calls build on what the table set.
    /// Stops at the first command that fails.
    pub fn init(&mut self) -> Result<(), PanelError<DI, RST>> {
        // The panel is asleep with the display off after power-on reset
        self.command(ILI9488_SLPOUT, &[])?;
        self.delay.delay_ms(100);
        self.command(ILI9488_MADCTL, &[self.madctl])?;
        self.command(ILI9488_PIXFMT, &[self.colmod])?;

        let init_cmds = self.init_cmds.unwrap_or(&INIT_SEQ);
        for c in init_cmds {
            let shadow = match c.cmd {
                ILI9488_MADCTL => Some(&mut self.madctl),
                ILI9488_PIXFMT => Some(&mut self.colmod),
                _ => None,
            };
            if let (Some(reg), Some(&val)) = (shadow, c.data.first()) {
                *reg = val;
                warn!(
                    "The {:#x} command has been used and will be overwritten by external initialization sequence",
                    c.cmd
                );
            }

            self.command(c.cmd, c.data)?;
            self.delay.delay_ms(c.delay_ms);
        }
        debug!("send init commands success");

        Ok(())
    }

    /// Write `data` into the window `[x_start, x_end) x [y_start, y_end)`.
    ///
    /// `data` holds tightly packed pixels, three bytes each. The memory write
    /// is handed to the transport without waiting for it to complete.
    ///
    /// # Panics
    ///
    /// If the window is empty (`x_start >= x_end` or `y_start >= y_end`).
    pub fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        data: &[u8],
    ) -> Result<(), PanelError<DI, RST>> {
        assert!(
            x_start < x_end && y_start < y_end,
            "start position must be smaller than end position"
        );

        let len = usize::from(x_end - x_start)
            .checked_mul(usize::from(y_end - y_start))
            .and_then(|px| px.checked_mul(usize::from(self.fb_bits_per_pixel) / 8))
            .ok_or(Error::InvalidArgument)?;
        if data.len() != len {
            return Err(Error::InvalidArgument);
        }

        let (xs, xe) = shift(x_start, x_end, self.x_gap)?;
        let (ys, ye) = shift(y_start, y_end, self.y_gap)?;

        // define an area of frame memory where MCU can access
        self.command(ILI9488_CASET, &window(xs, xe))?;
        self.command(ILI9488_PASET, &window(ys, ye))?;
        self.itf.send_pixels(ILI9488_RAMWR, data);

        Ok(())
    }

    pub fn invert_color(&mut self, invert: bool) -> Result<(), PanelError<DI, RST>> {
        let cmd = if invert {
            ILI9488_INVON
        } else {
            ILI9488_INVOFF
        };
        self.command(cmd, &[])
    }

    /// Set or clear the column (`mirror_x`) and row (`mirror_y`) mirror bits.
    ///
    /// The new value is kept even if sending it fails.
    pub fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), PanelError<DI, RST>> {
        set_bit(&mut self.madctl, MADCTL_MX, mirror_x);
        set_bit(&mut self.madctl, MADCTL_MY, mirror_y);
        self.command(ILI9488_MADCTL, &[self.madctl])
    }

    /// Set or clear the row/column exchange bit.
    ///
    /// The new value is kept even if sending it fails.
    pub fn swap_xy(&mut self, swap: bool) -> Result<(), PanelError<DI, RST>> {
        set_bit(&mut self.madctl, MADCTL_MV, swap);
        self.command(ILI9488_MADCTL, &[self.madctl])
    }

    /// Offset added to every coordinate passed to [`draw_bitmap`](Self::draw_bitmap).
    ///
    /// Negative gaps move the origin up or left. A window shifted outside
    /// `0..=u16::MAX` is rejected at draw time.
    pub fn set_gap(&mut self, x_gap: i16, y_gap: i16) {
        self.x_gap = x_gap;
        self.y_gap = y_gap;
    }

    pub fn disp_on_off(&mut self, on: bool) -> Result<(), PanelError<DI, RST>> {
        let cmd = if on { ILI9488_DISPON } else { ILI9488_DISPOFF };
        self.command(cmd, &[])
    }

    pub fn madctl(&self) -> u8 {
        self.madctl
    }

    pub fn colmod(&self) -> u8 {
        self.colmod
    }

    pub fn gap(&self) -> (i16, i16) {
        (self.x_gap, self.y_gap)
    }

    /// Bits each pixel occupies in the buffer passed to `draw_bitmap`.
    pub fn bits_per_pixel(&self) -> u8 {
        self.fb_bits_per_pixel
    }

    /// Width and height as seen by the host, taking the axis swap into account.
    pub fn resolution(&self) -> (u16, u16) {
        if self.madctl & MADCTL_MV != 0 {
            (Self::HEIGHT, Self::WIDTH)
        } else {
            (Self::WIDTH, Self::HEIGHT)
        }
    }
}

impl<DI, RST, D> Panel for Ili9488<'_, DI, RST, D>
where
    DI: BusTransport,
    RST: ResetLine,
    D: DelayNs,
{
    type Error = PanelError<DI, RST>;

    fn reset(&mut self) -> Result<(), Self::Error> {
        Ili9488::reset(self)
    }

    fn init(&mut self) -> Result<(), Self::Error> {
        Ili9488::init(self)
    }

    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        Ili9488::draw_bitmap(self, x_start, y_start, x_end, y_end, data)
    }

    fn invert_color(&mut self, invert: bool) -> Result<(), Self::Error> {
        Ili9488::invert_color(self, invert)
    }

    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), Self::Error> {
        Ili9488::mirror(self, mirror_x, mirror_y)
    }

    fn swap_xy(&mut self, swap: bool) -> Result<(), Self::Error> {
        Ili9488::swap_xy(self, swap)
    }

    fn set_gap(&mut self, x_gap: i16, y_gap: i16) {
        Ili9488::set_gap(self, x_gap, y_gap)
    }

    fn disp_on_off(&mut self, on: bool) -> Result<(), Self::Error> {
        Ili9488::disp_on_off(self, on)
    }
}

fn set_bit(reg: &mut u8, bit: u8, on: bool) {
    if on {
        *reg |= bit;
    } else {
        *reg &= !bit;
    }
}

fn shift<BE, PE>(start: u16, end: u16, gap: i16) -> Result<(u16, u16), Error<BE, PE>> {
    let start = start.checked_add_signed(gap).ok_or(Error::InvalidArgument)?;
    let end = end.checked_add_signed(gap).ok_or(Error::InvalidArgument)?;
    Ok((start, end))
}

/// CASET/PASET parameters: big-endian first and last address.
fn window(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = (end - 1).to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}
