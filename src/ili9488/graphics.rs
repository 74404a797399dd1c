use core::ops::Range;

use embedded_graphics::pixelcolor::Rgb666;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use heapless::Vec;

use super::{Ili9488, PanelError};
use crate::lcd::{BusTransport, ResetLine};

/// One row of the longest side, three bytes per pixel.
const ROW_BYTES: usize = 480 * 3;

/// Each component goes in the high 6 bits of its byte.
fn pack(color: Rgb666) -> [u8; 3] {
    [color.r() << 2, color.g() << 2, color.b() << 2]
}

impl<DI, RST, D> DrawTarget for Ili9488<'_, DI, RST, D>
where
    DI: BusTransport,
    RST: ResetLine,
    D: DelayNs,
{
    type Color = Rgb666;
    type Error = PanelError<DI, RST>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(coord, color) in pixels.into_iter() {
            if bounds.contains(coord) {
                let x = coord.x as u16;
                let y = coord.y as u16;
                self.draw_bitmap(x, y, x + 1, y + 1, &pack(color))?;
            }
        }

        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // Clamp area to drawable part of the display target
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.is_zero_sized() {
            return Ok(());
        }

        let Range {
            start: x_start,
            end: x_end,
        } = drawable_area.columns();
        let (x_start, x_end) = (x_start as u16, x_end as u16);
        let mut y = drawable_area.top_left.y as u16;
        let row_len = usize::from(x_end - x_start) * 3;

        let mut row: Vec<u8, ROW_BYTES> = Vec::new();
        for (_, color) in area
            .points()
            .zip(colors)
            .filter(|(pos, _)| drawable_area.contains(*pos))
        {
            // row_len never exceeds ROW_BYTES, so this cannot fail
            row.extend_from_slice(&pack(color)).ok();
            if row.len() == row_len {
                self.draw_bitmap(x_start, y, x_end, y + 1, &row)?;
                row.clear();
                y += 1;
            }
        }

        Ok(())
    }
}

impl<DI, RST, D> OriginDimensions for Ili9488<'_, DI, RST, D>
where
    DI: BusTransport,
    RST: ResetLine,
    D: DelayNs,
{
    fn size(&self) -> Size {
        let (width, height) = self.resolution();
        Size::new(width.into(), height.into())
    }
}
