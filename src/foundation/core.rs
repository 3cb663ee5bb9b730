use crate::foundation::error::{CircleError, CircleResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Whole-pixel container dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Construct a canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` when either axis is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Geometric center, `(w/2, h/2)` without integer truncation.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Shorter side, in pixels.
    pub fn min_dimension(self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    /// Size as floating point.
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Byte length of an RGBA8 buffer of this size.
    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// Straight-alpha RGBA8 color as authored in configuration.
///
/// Serialized as `#RRGGBB` / `#AARRGGBB`; also accepts a `[r, g, b, a]` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ColorRepr", into = "String")]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha (straight).
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// The platform "darker gray" used for slice dividers.
    pub const DARKER_GRAY: Self = Self::rgb(0xAA, 0xAA, 0xAA);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit straight alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` (leading `#` optional).
    pub fn from_hex(s: &str) -> CircleResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let parse = |i: usize| -> CircleResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| CircleError::validation(format!("invalid color '{s}': {e}")))
        };
        if !hex.is_ascii() {
            return Err(CircleError::validation(format!("invalid color '{s}'")));
        }
        match hex.len() {
            6 => Ok(Self::rgb(parse(0)?, parse(2)?, parse(4)?)),
            8 => Ok(Self::rgba(parse(2)?, parse(4)?, parse(6)?, parse(0)?)),
            _ => Err(CircleError::validation(format!(
                "invalid color '{s}': expected #RRGGBB or #AARRGGBB"
            ))),
        }
    }

    /// Format as `#RRGGBB`, or `#AARRGGBB` when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }

    /// Premultiplied RGBA8 bytes, rounded the same way the compositor rounds.
    pub fn premultiplied(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }

    pub(crate) fn to_cpu(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Array([u8; 4]),
}

impl TryFrom<ColorRepr> for Rgba8 {
    type Error = CircleError;

    fn try_from(value: ColorRepr) -> Result<Self, Self::Error> {
        match value {
            ColorRepr::Hex(s) => Rgba8::from_hex(&s),
            ColorRepr::Array([r, g, b, a]) => Ok(Rgba8::rgba(r, g, b, a)),
        }
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
