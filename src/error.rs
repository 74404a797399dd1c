use core::fmt;

/// Driver errors. `BE` comes from the bus transport, `PE` from the reset GPIO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<BE, PE> {
    /// A caller-supplied value cannot be used: an empty MADCTL/COLMOD entry
    /// in a vendor table, a pixel buffer of the wrong size, or a gap that
    /// pushes a coordinate past `u16::MAX`.
    InvalidArgument,
    /// Color order or bit depth the panel does not support.
    Unsupported,
    /// A command could not be sent.
    Transport(BE),
    /// The reset line could not be configured.
    Gpio(PE),
}

impl<BE: fmt::Debug, PE: fmt::Debug> fmt::Display for Error<BE, PE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::Unsupported => write!(f, "unsupported configuration"),
            Self::Transport(e) => write!(f, "send command failed: {e:?}"),
            Self::Gpio(e) => write!(f, "configure GPIO for RST line failed: {e:?}"),
        }
    }
}

/// Raw color-order code outside {RGB, BGR}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnsupportedColorOrder(pub u8);

impl fmt::Display for UnsupportedColorOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported rgb endian {}", self.0)
    }
}

impl<BE, PE> From<UnsupportedColorOrder> for Error<BE, PE> {
    fn from(_: UnsupportedColorOrder) -> Self {
        Self::Unsupported
    }
}
