//! Fixed colour palette for node groups.
//!
//! Group indices beyond the palette wrap around, so the tenth branch shares a colour with the
//! first. That collision is accepted rather than papered over with generated colours.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// An sRGB colour, rendered as `rgb(r, g, b)` for the browser.
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Red, green, blue, yellow, magenta, cyan, orange, lime, sky.
pub const PALETTE: [Rgb; 9] = [
    Rgb(255, 102, 102),
    Rgb(102, 255, 102),
    Rgb(102, 102, 255),
    Rgb(255, 255, 102),
    Rgb(255, 102, 255),
    Rgb(102, 255, 255),
    Rgb(255, 178, 102),
    Rgb(178, 255, 102),
    Rgb(102, 178, 255),
];

#[must_use]
/// Colour for a group index, wrapping modulo the palette length.
pub fn color_for_group(group: usize) -> Rgb {
    PALETTE[group % PALETTE.len()]
}
