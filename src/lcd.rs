//! Bus and GPIO collaborators used by the panel driver.
//!
//! The driver only talks to the panel through [`BusTransport`] (command and
//! pixel channels) and [`ResetLine`]. [`SpiTransport`] implements the bus for
//! a 4-wire SPI link with a separate D/C line, which is how the gen4-ESP32-35
//! module is wired.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::spi::SpiDevice;

/// Command/parameter channel plus bulk color channel to the panel controller.
pub trait BusTransport {
    /// Error reported by the command channel.
    type Error;

    /// Send `cmd` followed by its parameter bytes, synchronously.
    fn send_command(&mut self, cmd: u8, params: &[u8]) -> Result<(), Self::Error>;

    /// Send `cmd` followed by a block of pixel data.
    ///
    /// Completion and errors of the transfer are owned by the transport; an
    /// implementation may queue the transfer, but must keep submission order.
    fn send_pixels(&mut self, cmd: u8, data: &[u8]);
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    type Error = T::Error;

    fn send_command(&mut self, cmd: u8, params: &[u8]) -> Result<(), Self::Error> {
        T::send_command(self, cmd, params)
    }

    fn send_pixels(&mut self, cmd: u8, data: &[u8]) {
        T::send_pixels(self, cmd, data)
    }
}

/// GPIO line wired to the controller's reset input.
pub trait ResetLine {
    /// Error reported while configuring the line.
    type Error;

    /// Put the line into output mode. Called once, when the driver is built.
    fn configure_output(&mut self) -> Result<(), Self::Error>;

    /// Drive the line high (`true`) or low (`false`).
    fn set_level(&mut self, high: bool);

    /// Return the line to its reset state. Called once, when the driver is
    /// released or its construction fails.
    fn release(&mut self);
}

/// [`ResetLine`] over an `embedded-hal` output pin.
///
/// HAL pins are already outputs by type, so configuring is a no-op and
/// releasing leaves the pin where it is. Level errors are dropped.
pub struct OutputResetPin<P> {
    pin: P,
}

impl<P: OutputPin> OutputResetPin<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> ResetLine for OutputResetPin<P> {
    type Error = P::Error;

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_level(&mut self, high: bool) {
        self.pin.set_state(PinState::from(high)).ok();
    }

    fn release(&mut self) {}
}

/// Placeholder reset line type for panels without a reset GPIO.
///
/// It has no values, so a `PanelConfig<NoResetPin>` always carries `None`
/// and the driver falls back to the software reset command.
pub enum NoResetPin {}

impl ResetLine for NoResetPin {
    type Error = Infallible;

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }

    fn set_level(&mut self, _high: bool) {
        match *self {}
    }

    fn release(&mut self) {
        match *self {}
    }
}

/// Errors from [`SpiTransport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// The SPI write failed.
    Spi,
    /// The data/command select pin could not be driven.
    DataCommandPin,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi => write!(f, "SPI write failed"),
            Self::DataCommandPin => write!(f, "D/C pin error"),
        }
    }
}

/// 4-wire SPI link: chip select is handled by the `SpiDevice`, D/C selects
/// between command (low) and data (high) bytes.
pub struct SpiTransport<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiTransport<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }

    fn command(&mut self, cmd: &[u8]) -> Result<(), BusError> {
        self.dc.set_low().map_err(|_| BusError::DataCommandPin)?;
        self.spi.write(cmd).map_err(|_| BusError::Spi)
    }

    fn data(&mut self, data: &[u8]) -> Result<(), BusError> {
        self.dc.set_high().map_err(|_| BusError::DataCommandPin)?;
        self.spi.write(data).map_err(|_| BusError::Spi)
    }
}

impl<SPI, DC> BusTransport for SpiTransport<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    type Error = BusError;

    fn send_command(&mut self, cmd: u8, params: &[u8]) -> Result<(), Self::Error> {
        self.command(&[cmd])?;
        if !params.is_empty() {
            self.data(params)?;
        }
        Ok(())
    }

    fn send_pixels(&mut self, cmd: u8, data: &[u8]) {
        let res = self.command(&[cmd]).and_then(|()| self.data(data));
        if let Err(e) = res {
            warn!("pixel transfer for {:#x} dropped: {}", cmd, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Event, EventLog, MockSpi, MockPin};

    fn transport(log: &EventLog) -> SpiTransport<MockSpi, MockPin> {
        SpiTransport::new(MockSpi::new(log), MockPin::new(log))
    }

    #[test]
    fn command_without_params_stays_in_command_mode() {
        let log = EventLog::new();
        let mut bus = transport(&log);
        bus.send_command(0x11, &[]).unwrap();

        assert_eq!(
            log.take(),
            [Event::PinLevel(false), Event::SpiWrite(std::vec![0x11])]
        );
    }

    #[test]
    fn command_params_are_sent_as_data() {
        let log = EventLog::new();
        let mut bus = transport(&log);
        bus.send_command(0x36, &[0x48]).unwrap();

        assert_eq!(
            log.take(),
            [
                Event::PinLevel(false),
                Event::SpiWrite(std::vec![0x36]),
                Event::PinLevel(true),
                Event::SpiWrite(std::vec![0x48]),
            ]
        );
    }

    #[test]
    fn pixel_data_follows_memory_write() {
        let log = EventLog::new();
        let mut bus = transport(&log);
        bus.send_pixels(0x2C, &[0xFC, 0x00, 0x00]);

        assert_eq!(
            log.take(),
            [
                Event::PinLevel(false),
                Event::SpiWrite(std::vec![0x2C]),
                Event::PinLevel(true),
                Event::SpiWrite(std::vec![0xFC, 0x00, 0x00]),
            ]
        );
    }

    #[test]
    fn spi_failure_is_reported_on_commands() {
        let log = EventLog::new();
        let mut spi = MockSpi::new(&log);
        spi.fail_writes();
        let mut bus = SpiTransport::new(spi, MockPin::new(&log));

        assert_eq!(bus.send_command(0x29, &[]), Err(BusError::Spi));
    }

    #[test]
    fn spi_failure_on_pixels_is_swallowed() {
        let log = EventLog::new();
        let mut spi = MockSpi::new(&log);
        spi.fail_writes();
        let mut bus = SpiTransport::new(spi, MockPin::new(&log));

        bus.send_pixels(0x2C, &[0x00; 3]);
        // The first write fails, so the data phase never starts.
        assert_eq!(log.take(), [Event::PinLevel(false)]);
    }

    #[test]
    fn output_reset_pin_follows_level() {
        let log = EventLog::new();
        let mut rst = OutputResetPin::new(MockPin::new(&log));
        rst.configure_output().unwrap();
        rst.set_level(true);
        rst.set_level(false);
        rst.release();

        assert_eq!(log.take(), [Event::PinLevel(true), Event::PinLevel(false)]);
    }
}
