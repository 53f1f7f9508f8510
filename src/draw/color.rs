//! Hex color picker values and their rgba form.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    #[error("color '{0}' must have exactly 6 hex digits")]
    WrongLength(String),

    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

/// A `#RRGGBB` color as produced by a color-picker input.
///
/// The original text is kept verbatim (letter case included) so the value
/// round-trips unchanged into the canvas background; the decoded channels are
/// cached alongside it.
///
/// # Examples
///
/// ```
/// use freedraw::draw::HexColor;
/// let red: HexColor = "#FF0000".parse().unwrap();
/// assert_eq!(red.rgb(), [255, 0, 0]);
/// assert_eq!(red.as_str(), "#FF0000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexColor {
    text: String,
    rgb: [u8; 3],
}

impl HexColor {
    /// Parses a `#RRGGBB` string (either letter case).
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let Some(digits) = value.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(value.to_string()));
        };
        if digits.len() != 6 {
            return Err(ColorParseError::WrongLength(value.to_string()));
        }
        // from_str_radix tolerates a leading '+', so check digits up front.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(value.to_string()));
        }

        let mut rgb = [0u8; 3];
        for (index, channel) in rgb.iter_mut().enumerate() {
            let pair = &digits[index * 2..index * 2 + 2];
            *channel = u8::from_str_radix(pair, 16)
                .map_err(|_| ColorParseError::InvalidDigit(value.to_string()))?;
        }

        Ok(Self {
            text: value.to_string(),
            rgb,
        })
    }

    /// Pure black, the default pen color.
    pub fn black() -> Self {
        Self {
            text: "#000000".to_string(),
            rgb: [0, 0, 0],
        }
    }

    /// Pure white, the default canvas color.
    pub fn white() -> Self {
        Self {
            text: "#ffffff".to_string(),
            rgb: [255, 255, 255],
        }
    }

    /// The text exactly as it was supplied.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Decimal `[red, green, blue]` channels.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// Applies an opacity percentage, see [`to_rgba`].
    pub fn with_opacity(&self, opacity: u8) -> Rgba {
        to_rgba(self, opacity)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An 8-bit RGB color with a fractional alpha channel.
///
/// Displays in CSS notation, e.g. `rgba(255, 0, 0, 0.5)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha from 0.0 (transparent) to 1.0 (opaque)
    pub a: f64,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Converts a hex color plus an opacity percentage into [`Rgba`].
///
/// The alpha channel is `opacity / 100`; percentages above 100 are treated as
/// 100.
///
/// ```
/// use freedraw::draw::{HexColor, to_rgba};
/// let red = HexColor::parse("#ff0000").unwrap();
/// assert_eq!(to_rgba(&red, 50).to_string(), "rgba(255, 0, 0, 0.5)");
/// ```
pub fn to_rgba(hex: &HexColor, opacity: u8) -> Rgba {
    let [r, g, b] = hex.rgb;
    Rgba {
        r,
        g,
        b,
        a: f64::from(opacity.min(100)) / 100.0,
    }
}
