//! Fixed controller initialization table
//!
//! Sent verbatim, in order, after the software reset settle delay. Each entry
//! is one command write followed by one data burst.
//!
//! The panel's inversion command is not part of the table; it depends on
//! [`Config::invert`](crate::Config::invert) and is sent right after it.

use crate::command::{
    COLMOD, FRCTRL2, GCTRL, LCMCTRL, MADCTL, NVGAMCTRL, PORCTRL, PVGAMCTRL, PWCTRL1, VCOMS,
    VDVS, VDVVRHEN, VRHS,
};

/// One `(command, parameters)` step of the init table
pub type InitStep = (u8, &'static [u8]);

/// Initialization table for the ST7789 in landscape RGB565 mode
///
/// MADCTL 0x70 exchanges rows and columns, so the addressable grid is
/// 320 columns by 240 rows.
pub const INIT_SEQUENCE: [InitStep; 13] = [
    (MADCTL, &[0x70]),
    (PORCTRL, &[0x0C, 0x0C, 0x00, 0x33, 0x33]),
    (COLMOD, &[0x05]),
    (GCTRL, &[0x14]),
    (VCOMS, &[0x37]),
    (LCMCTRL, &[0x2C]),
    (VDVVRHEN, &[0x01]),
    (VRHS, &[0x12]),
    (VDVS, &[0x20]),
    (PWCTRL1, &[0xA4, 0xA1]),
    (FRCTRL2, &[0x0F]),
    (
        PVGAMCTRL,
        &[
            0xD0, 0x04, 0x0D, 0x11, 0x13, 0x2B, 0x3F, 0x54, 0x4C, 0x18, 0x0D, 0x0B, 0x1F, 0x23,
        ],
    ),
    (
        NVGAMCTRL,
        &[
            0xD0, 0x04, 0x0C, 0x11, 0x13, 0x2C, 0x3F, 0x44, 0x51, 0x2F, 0x1F, 0x1F, 0x20, 0x23,
        ],
    ),
];
