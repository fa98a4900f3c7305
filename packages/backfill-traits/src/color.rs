use std::fmt;

use color::{AlphaColor, Srgb, parse_color};

use crate::ValueParseError;

/// A resolved CSS color.
///
/// The shape backend takes colors as an opaque `#rrggbb` value plus a separate opacity, so
/// this keeps the sRGB components and hands them out in that split form.
#[derive(Clone, Copy)]
pub struct Color(AlphaColor<Srgb>);

impl Color {
    pub const TRANSPARENT: Color = Color(AlphaColor::new([0.0, 0.0, 0.0, 0.0]));
    pub const BLACK: Color = Color(AlphaColor::new([0.0, 0.0, 0.0, 1.0]));

    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(AlphaColor::from_rgba8(r, g, b, a))
    }

    pub const fn from_alpha_color(color: AlphaColor<Srgb>) -> Self {
        Self(color)
    }

    /// Parse any CSS color the `color` crate understands: named colors, hex, `rgb()`,
    /// `rgba()`, `hsl()`, `transparent`, ...
    pub fn parse(input: &str) -> Result<Self, ValueParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValueParseError::Empty);
        }
        let dynamic = parse_color(input)
            .map_err(|err| ValueParseError::InvalidColor(format!("{err:?}")))?;
        Ok(Self(dynamic.to_alpha_color::<Srgb>()))
    }

    /// Like [`Color::parse`], resolving the `currentColor` keyword to `current`.
    pub fn parse_with_current(input: &str, current: Color) -> Result<Self, ValueParseError> {
        if input.trim().eq_ignore_ascii_case("currentcolor") {
            return Ok(current);
        }
        Self::parse(input)
    }

    pub fn to_alpha_color(&self) -> AlphaColor<Srgb> {
        self.0
    }

    /// The color with its alpha dropped, as `#rrggbb`.
    pub fn opaque_hex(&self) -> String {
        let rgba = self.0.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }

    /// The alpha channel in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.0.components[3].clamp(0.0, 1.0)
    }

    pub fn is_transparent(&self) -> bool {
        self.alpha() <= 0.0
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        let [r, g, b, _] = self.0.components;
        Self(AlphaColor::new([r, g, b, alpha]))
    }

    /// Move each channel `amount` of the way towards white. Alpha is kept.
    pub fn lighten(&self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let [r, g, b, a] = self.0.components;
        let up = |c: f32| c + (1.0 - c) * amount;
        Self(AlphaColor::new([up(r), up(g), up(b), a]))
    }

    /// Move each channel `amount` of the way towards black. Alpha is kept.
    pub fn darken(&self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let [r, g, b, a] = self.0.components;
        let down = |c: f32| c * (1.0 - amount);
        Self(AlphaColor::new([down(r), down(g), down(b), a]))
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.0.components == other.0.components
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({} a={})", self.opaque_hex(), self.alpha())
    }
}
