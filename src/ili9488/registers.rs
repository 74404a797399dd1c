#![allow(dead_code)]

///< Software reset register
pub const ILI9488_SWRESET: u8 = 0x01;

///< Enter Sleep Mode
pub const ILI9488_SLPIN: u8 = 0x10;
///< Sleep Out
pub const ILI9488_SLPOUT: u8 = 0x11;
///< Normal Display Mode ON
pub const ILI9488_NORON: u8 = 0x13;

///< Display Inversion OFF
pub const ILI9488_INVOFF: u8 = 0x20;
///< Display Inversion ON
pub const ILI9488_INVON: u8 = 0x21;
///< Display OFF
pub const ILI9488_DISPOFF: u8 = 0x28;
///< Display ON
pub const ILI9488_DISPON: u8 = 0x29;

///< Column Address Set
pub const ILI9488_CASET: u8 = 0x2A;
///< Page Address Set
pub const ILI9488_PASET: u8 = 0x2B;
///< Memory Write
pub const ILI9488_RAMWR: u8 = 0x2C;

///< Memory Access Control
pub const ILI9488_MADCTL: u8 = 0x36;
///< COLMOD: Pixel Format Set
pub const ILI9488_PIXFMT: u8 = 0x3A;

///< Interface Mode Control
pub const ILI9488_IFMODE: u8 = 0xB0;
///< Frame Rate Control (In Normal Mode/Full Colors)
pub const ILI9488_FRMCTR1: u8 = 0xB1;
///< Display Inversion Control
pub const ILI9488_INVTR: u8 = 0xB4;
///< Display Function Control
pub const ILI9488_DFUNCTR: u8 = 0xB6;
///< Entry Mode Set
pub const ILI9488_ETMOD: u8 = 0xB7;

///< Power Control 1
pub const ILI9488_PWCTRL1: u8 = 0xC0;
///< Power Control 2
pub const ILI9488_PWCTRL2: u8 = 0xC1;
///< VCOM Control
pub const ILI9488_VMCTRL: u8 = 0xC5;

///< Positive Gamma Correction
pub const ILI9488_PGAMCTRL: u8 = 0xE0;
///< Negative Gamma Correction
pub const ILI9488_NGAMCTRL: u8 = 0xE1;
///< Set Image Function
pub const ILI9488_SETIMAGE: u8 = 0xE9;
///< Adjust Control 3
pub const ILI9488_ADJCTL3: u8 = 0xF7;

///< COLMOD value for 16 bits per pixel
pub const COLOR_MODE_16BIT: u8 = 0x55;
///< COLMOD value for 18 bits per pixel
pub const COLOR_MODE_18BIT: u8 = 0x66;

///< IFMODE: SDO is used
pub const INTERFACE_MODE_USE_SDO: u8 = 0x00;
///< IFMODE: SDO is ignored
pub const INTERFACE_MODE_IGNORE_SDO: u8 = 0x80;

///< Bottom to top
pub const MADCTL_MY: u8 = 0x80;
///< Right to left
pub const MADCTL_MX: u8 = 0x40;
///< Reverse Mode
pub const MADCTL_MV: u8 = 0x20;
///< LCD refresh Bottom to top
pub const MADCTL_ML: u8 = 0x10;
///< Red-Green-Blue pixel order
pub const MADCTL_RGB: u8 = 0x00;
///< Blue-Green-Red pixel order
pub const MADCTL_BGR: u8 = 0x08;
///< LCD refresh right to left
pub const MADCTL_MH: u8 = 0x04;

/// One entry of an initialization table: a command, its parameters, and the
/// settle time to wait after sending it.
///
/// The parameter count must be what the command expects. The driver passes
/// the bytes through unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitCommand<'a> {
    pub cmd: u8,
    pub data: &'a [u8],
    pub delay_ms: u32,
}

impl<'a> InitCommand<'a> {
    pub const fn new(cmd: u8, data: &'a [u8], delay_ms: u32) -> Self {
        Self {
            cmd,
            data,
            delay_ms,
        }
    }
}

/// Power-on table for the gen4-ESP32-35 glass, sent when no vendor table is
/// configured.
pub const INIT_SEQ: [InitCommand<'static>; 16] = [
    InitCommand::new(
        ILI9488_PGAMCTRL,
        &[
            0x00, 0x13, 0x18, 0x04, 0x0F, 0x06, 0x3A, 0x56, 0x4D, 0x03, 0x0A, 0x06, 0x30, 0x3E,
            0x0F,
        ],
        0,
    ),
    InitCommand::new(
        ILI9488_NGAMCTRL,
        &[
            0x00, 0x13, 0x18, 0x01, 0x11, 0x06, 0x38, 0x34, 0x4D, 0x06, 0x0D, 0x0B, 0x31, 0x37,
            0x0F,
        ],
        0,
    ),
    InitCommand::new(ILI9488_PWCTRL1, &[0x18, 0x16], 0),
    InitCommand::new(ILI9488_PWCTRL2, &[0x45], 0),
    InitCommand::new(ILI9488_VMCTRL, &[0x00, 0x63, 0x01], 0),
    InitCommand::new(ILI9488_MADCTL, &[MADCTL_MX | MADCTL_BGR], 0),
    InitCommand::new(ILI9488_PIXFMT, &[COLOR_MODE_18BIT], 0),
    InitCommand::new(ILI9488_IFMODE, &[INTERFACE_MODE_USE_SDO], 0),
    InitCommand::new(ILI9488_FRMCTR1, &[0xB0], 0),
    InitCommand::new(ILI9488_INVTR, &[0x02], 0),
    InitCommand::new(ILI9488_DFUNCTR, &[0x02, 0x02], 0),
    InitCommand::new(ILI9488_SETIMAGE, &[0x00], 0),
    InitCommand::new(ILI9488_ADJCTL3, &[0xA9, 0x51, 0x2C, 0x82], 120),
    InitCommand::new(ILI9488_SLPOUT, &[], 120),
    InitCommand::new(ILI9488_DISPON, &[], 120),
    InitCommand::new(ILI9488_INVON, &[], 120),
];
