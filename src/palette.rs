//! The 16-color mIRC palette.
//!
//! Color codes in raw text are small integers; a [`Palette`] maps each
//! [`ColorIndex`] to a concrete [`Rgb`] value. Swapping the palette and
//! rebuilding the transcript recolors every line already shown.

use std::fmt;
use std::str::FromStr;

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res},
    sequence::{preceded, tuple},
    IResult,
};

use crate::error::PaletteError;

/// Number of entries in the palette.
pub const PALETTE_SIZE: usize = 16;

/// A validated palette index in `0..=15`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// Create an index, rejecting values outside the palette.
    pub fn new(index: u8) -> Result<Self, PaletteError> {
        if usize::from(index) < PALETTE_SIZE {
            Ok(Self(index))
        } else {
            Err(PaletteError::IndexOutOfRange(index))
        }
    }

    /// Map a raw color-code number onto the palette.
    ///
    /// mIRC allows `0..=99` after a color code; anything past the 16 base
    /// colors (including `99`, "default") renders as no explicit color.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::new(code).ok()
    }

    /// The raw index value.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ColorIndex {
    type Error = PaletteError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColorIndex> for u8 {
    fn from(index: ColorIndex) -> Self {
        index.0
    }
}

/// An sRGB color, displayed and parsed as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |h: &str| {
        u8::from_str_radix(h, 16)
    })(input)
}

fn hex_color(input: &str) -> IResult<&str, Rgb> {
    let (rest, (r, g, b)) =
        all_consuming(preceded(char('#'), tuple((hex_byte, hex_byte, hex_byte))))(input)?;
    Ok((rest, Rgb::new(r, g, b)))
}

impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_color(s.trim())
            .map(|(_, rgb)| rgb)
            .map_err(|_| PaletteError::InvalidHex(s.to_string()))
    }
}

impl TryFrom<String> for Rgb {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_string()
    }
}

/// Sixteen colors indexed by [`ColorIndex`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    colors: [Rgb; PALETTE_SIZE],
}

impl Palette {
    pub const fn new(colors: [Rgb; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Build a palette from `#rrggbb` strings.
    pub fn from_hex(colors: &[&str; PALETTE_SIZE]) -> Result<Self, PaletteError> {
        let mut out = [Rgb::new(0, 0, 0); PALETTE_SIZE];
        for (slot, hex) in out.iter_mut().zip(colors) {
            *slot = hex.parse()?;
        }
        Ok(Self::new(out))
    }

    #[inline]
    pub fn get(&self, index: ColorIndex) -> Rgb {
        self.colors[usize::from(index.get())]
    }

    pub fn set(&mut self, index: ColorIndex, color: Rgb) {
        self.colors[usize::from(index.get())] = color;
    }

    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    /// The conventional color name for an index (`"red"`, `"navy"`, ...).
    pub fn name(index: ColorIndex) -> &'static str {
        COLOR_NAMES[usize::from(index.get())]
    }
}

const COLOR_NAMES: [&str; PALETTE_SIZE] = [
    "white",
    "black",
    "navy",
    "green",
    "red",
    "maroon",
    "purple",
    "orange",
    "yellow",
    "light green",
    "teal",
    "cyan",
    "royal blue",
    "pink",
    "grey",
    "light grey",
];

impl Default for Palette {
    /// The classic mIRC color table.
    fn default() -> Self {
        Self::new([
            Rgb::new(0xff, 0xff, 0xff),
            Rgb::new(0x00, 0x00, 0x00),
            Rgb::new(0x00, 0x00, 0x7f),
            Rgb::new(0x00, 0x93, 0x00),
            Rgb::new(0xff, 0x00, 0x00),
            Rgb::new(0x7f, 0x00, 0x00),
            Rgb::new(0x9c, 0x00, 0x9c),
            Rgb::new(0xfc, 0x7f, 0x00),
            Rgb::new(0xff, 0xff, 0x00),
            Rgb::new(0x00, 0xfc, 0x00),
            Rgb::new(0x00, 0x93, 0x93),
            Rgb::new(0x00, 0xff, 0xff),
            Rgb::new(0x00, 0x00, 0xfc),
            Rgb::new(0xff, 0x00, 0xff),
            Rgb::new(0x7f, 0x7f, 0x7f),
            Rgb::new(0xd2, 0xd2, 0xd2),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_index_bounds() {
        assert_eq!(ColorIndex::new(0).map(ColorIndex::get), Ok(0));
        assert_eq!(ColorIndex::new(15).map(ColorIndex::get), Ok(15));
        assert_eq!(ColorIndex::new(16), Err(PaletteError::IndexOutOfRange(16)));
        assert_eq!(ColorIndex::from_code(99), None);
        assert!(ColorIndex::try_from(3u8).is_ok());
    }

    #[test]
    fn test_rgb_parse_and_display() {
        let red: Rgb = "#ff0000".parse().unwrap();
        assert_eq!(red, Rgb::new(255, 0, 0));
        assert_eq!(red.to_string(), "#ff0000");
        assert_eq!("#00007F".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 0x7f));
        assert_eq!(" #010203 ".parse::<Rgb>().unwrap(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_rgb_parse_rejects_malformed() {
        for bad in ["", "#", "ff0000", "#ff00", "#ff00000", "#gg0000", "#ff 000"] {
            assert_eq!(
                bad.parse::<Rgb>(),
                Err(PaletteError::InvalidHex(bad.to_string())),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        let red = ColorIndex::new(4).unwrap();
        assert_eq!(palette.get(red), Rgb::new(0xff, 0, 0));
        assert_eq!(Palette::name(red), "red");
        assert_eq!(Palette::name(ColorIndex::new(1).unwrap()), "black");
    }

    #[test]
    fn test_palette_from_hex_and_set() {
        let hex = ["#000000"; PALETTE_SIZE];
        let mut palette = Palette::from_hex(&hex).unwrap();
        let idx = ColorIndex::new(7).unwrap();
        palette.set(idx, Rgb::new(1, 2, 3));
        assert_eq!(palette.get(idx), Rgb::new(1, 2, 3));
        assert_eq!(palette.colors()[0], Rgb::new(0, 0, 0));

        let mut bad = ["#000000"; PALETTE_SIZE];
        bad[3] = "black";
        assert!(Palette::from_hex(&bad).is_err());
    }
}
