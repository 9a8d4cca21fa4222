use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a colour string is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Digit count other than 3, 6 or 8.
    #[error("colour '{0}' must have 3, 6 or 8 hex digits")]
    InvalidLength(String),

    /// Something other than a hex digit after the optional `#`.
    #[error("colour '{0}' contains a non-hex character")]
    InvalidDigit(String),

    /// Name that is not part of the widget palette.
    #[error("unknown palette colour '{0}'")]
    UnknownName(String),
}

/// An sRGB colour with 8-bit channels and straight alpha.
///
/// Persisted as a hex string: `#RRGGBB` when opaque, `#AARRGGBB` otherwise.
/// Parsing also accepts the three digit `RGB` shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0x00, 0x00, 0x00);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(0xFF, 0xFF, 0xFF);
    /// Fully transparent black.
    pub const CLEAR: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Builds an opaque colour.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Returns the colour with its alpha scaled by `opacity` (clamped to 0..=1).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let a = (f32::from(self.a) * opacity).round() as u8;
        Self { a, ..self }
    }

    /// Alpha as a fraction in 0..=1.
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// Canonical hex spelling used on disk.
    pub fn to_hex(self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }

    /// Parses either a palette name or a hex string.
    ///
    /// # Errors
    /// Returns `ColorParseError` if the input is neither.
    pub fn parse_named_or_hex(input: &str) -> Result<Self, ColorParseError> {
        match input.parse::<WidgetColor>() {
            Ok(named) => Ok(named.rgba()),
            Err(_) => input.parse(),
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidLength(s.to_string()))?;

        let channel = |shift: u32| ((value >> shift) & 0xFF) as u8;
        let nibble = |shift: u32| (((value >> shift) & 0xF) * 17) as u8;

        match digits.len() {
            3 => Ok(Self::opaque(nibble(8), nibble(4), nibble(0))),
            6 => Ok(Self::opaque(channel(16), channel(8), channel(0))),
            8 => Ok(Self {
                a: channel(24),
                r: channel(16),
                g: channel(8),
                b: channel(0),
            }),
            _ => Err(ColorParseError::InvalidLength(s.to_string())),
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Fixed platform colours the renderer refers to by name.
pub struct SystemColors;

impl SystemColors {
    /// System purple.
    pub const PURPLE: Rgba = Rgba::opaque(0xAF, 0x52, 0xDE);
    /// System blue.
    pub const BLUE: Rgba = Rgba::opaque(0x00, 0x7A, 0xFF);
    /// System cyan.
    pub const CYAN: Rgba = Rgba::opaque(0x32, 0xAD, 0xE6);
    /// System yellow.
    pub const YELLOW: Rgba = Rgba::opaque(0xFF, 0xCC, 0x00);
    /// System orange.
    pub const ORANGE: Rgba = Rgba::opaque(0xFF, 0x95, 0x00);
    /// System red.
    pub const RED: Rgba = Rgba::opaque(0xFF, 0x3B, 0x30);
}

/// Named colours offered by the editor's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WidgetColor {
    /// Black.
    Black,
    /// Blue.
    Blue,
    /// Purple.
    Purple,
    /// Orange.
    Orange,
    /// Green.
    Green,
    /// Pink.
    Pink,
    /// Indigo.
    Indigo,
    /// Mint.
    Mint,
    /// Teal.
    Teal,
    /// Brown.
    Brown,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Gray.
    Gray,
    /// Cyan.
    Cyan,
}

impl WidgetColor {
    /// The whole palette, in editor order.
    pub const ALL: [Self; 14] = [
        Self::Black,
        Self::Blue,
        Self::Purple,
        Self::Orange,
        Self::Green,
        Self::Pink,
        Self::Indigo,
        Self::Mint,
        Self::Teal,
        Self::Brown,
        Self::Red,
        Self::Yellow,
        Self::Gray,
        Self::Cyan,
    ];

    /// The sRGB value of this palette entry.
    pub fn rgba(self) -> Rgba {
        match self {
            Self::Black => Rgba::BLACK,
            Self::Blue => SystemColors::BLUE,
            Self::Purple => SystemColors::PURPLE,
            Self::Orange => SystemColors::ORANGE,
            Self::Green => Rgba::opaque(0x34, 0xC7, 0x59),
            Self::Pink => Rgba::opaque(0xFF, 0x2D, 0x55),
            Self::Indigo => Rgba::opaque(0x58, 0x56, 0xD6),
            Self::Mint => Rgba::opaque(0x00, 0xC7, 0xBE),
            Self::Teal => Rgba::opaque(0x30, 0xB0, 0xC7),
            Self::Brown => Rgba::opaque(0xA2, 0x84, 0x5E),
            Self::Red => SystemColors::RED,
            Self::Yellow => SystemColors::YELLOW,
            Self::Gray => Rgba::opaque(0x8E, 0x8E, 0x93),
            Self::Cyan => SystemColors::CYAN,
        }
    }

    /// Lowercase palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::Indigo => "indigo",
            Self::Mint => "mint",
            Self::Teal => "teal",
            Self::Brown => "brown",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
            Self::Cyan => "cyan",
        }
    }
}

impl FromStr for WidgetColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|color| color.name() == wanted)
            .ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }
}
