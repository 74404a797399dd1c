/// Operations every LCD panel driver offers, independent of the controller.
///
/// Coordinates are panel pixels; `draw_bitmap` covers `[x_start, x_end) x
/// [y_start, y_end)` and expects tightly packed pixel data in the panel's
/// framebuffer format.
pub trait Panel {
    type Error;

    /// Hardware or software reset, whichever the panel is wired for.
    fn reset(&mut self) -> Result<(), Self::Error>;

    /// Send the power-on initialization sequence.
    fn init(&mut self) -> Result<(), Self::Error>;

    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        data: &[u8],
    ) -> Result<(), Self::Error>;

    fn invert_color(&mut self, invert: bool) -> Result<(), Self::Error>;

    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), Self::Error>;

    fn swap_xy(&mut self, swap: bool) -> Result<(), Self::Error>;

    fn set_gap(&mut self, x_gap: i16, y_gap: i16);

    fn disp_on_off(&mut self, on: bool) -> Result<(), Self::Error>;
}
