use cssparser::{Parser, ParserInput, Token};

use crate::ValueParseError;

/// Pixels per inch, as fixed by CSS.
const PX_PER_IN: f64 = 96.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Em,
    Ex,
    Pt,
    Pc,
    In,
    Cm,
    Mm,
    Percent,
}

impl LengthUnit {
    fn from_css(unit: &str) -> Option<Self> {
        let unit = unit.to_ascii_lowercase();
        Some(match unit.as_str() {
            "px" => LengthUnit::Px,
            "em" => LengthUnit::Em,
            "ex" => LengthUnit::Ex,
            "pt" => LengthUnit::Pt,
            "pc" => LengthUnit::Pc,
            "in" => LengthUnit::In,
            "cm" => LengthUnit::Cm,
            "mm" => LengthUnit::Mm,
            _ => return None,
        })
    }
}

/// A CSS length or percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Length {
    pub const ZERO: Length = Length::px(0.0);

    pub const fn px(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    /// A percentage, where `100.0` is 100%.
    pub const fn percent(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Percent,
        }
    }

    pub fn is_percentage(&self) -> bool {
        self.unit == LengthUnit::Percent
    }

    /// Parse a single length token, e.g. `12px`, `1.5em`, `50%` or a unitless `0`.
    pub fn parse(input: &str) -> Result<Self, ValueParseError> {
        let mut input = ParserInput::new(input);
        let mut parser = Parser::new(&mut input);
        let length = Self::from_token(parser.next()?)?;
        if !parser.is_exhausted() {
            return Err(ValueParseError::TrailingInput);
        }
        Ok(length)
    }

    pub(crate) fn from_token(token: &Token) -> Result<Self, ValueParseError> {
        match token {
            Token::Dimension { value, unit, .. } => LengthUnit::from_css(unit)
                .map(|unit| Length {
                    value: *value as f64,
                    unit,
                })
                .ok_or_else(|| ValueParseError::UnknownUnit(unit.to_string())),
            Token::Percentage { unit_value, .. } => Ok(Length::percent(*unit_value as f64 * 100.0)),
            Token::Number { value, .. } if *value == 0.0 => Ok(Length::ZERO),
            other => Err(ValueParseError::UnexpectedToken(format!("{other:?}"))),
        }
    }

    /// Resolve to pixels. Percentages resolve against `percent_basis`, font-relative units
    /// against `font_size` (in pixels).
    pub fn to_px(&self, percent_basis: f64, font_size: f64) -> f64 {
        let value = self.value;
        match self.unit {
            LengthUnit::Px => value,
            LengthUnit::Em => value * font_size,
            LengthUnit::Ex => value * font_size / 2.0,
            LengthUnit::Pt => value * PX_PER_IN / 72.0,
            LengthUnit::Pc => value * PX_PER_IN / 6.0,
            LengthUnit::In => value * PX_PER_IN,
            LengthUnit::Cm => value * PX_PER_IN / 2.54,
            LengthUnit::Mm => value * PX_PER_IN / 25.4,
            LengthUnit::Percent => percent_basis * value / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length_units() {
        assert_eq!(Length::parse("12px").unwrap(), Length::px(12.0));
        assert_eq!(Length::parse(" 50% ").unwrap(), Length::percent(50.0));
        assert_eq!(Length::parse("0").unwrap(), Length::ZERO);
        assert_eq!(
            Length::parse("2EM").unwrap(),
            Length {
                value: 2.0,
                unit: LengthUnit::Em
            }
        );
    }

    #[test]
    fn test_parse_length_invalid() {
        assert_eq!(Length::parse(""), Err(ValueParseError::Empty));
        assert_eq!(
            Length::parse("3furlongs"),
            Err(ValueParseError::UnknownUnit("furlongs".to_string()))
        );
        assert_eq!(Length::parse("4px 5px"), Err(ValueParseError::TrailingInput));
        assert!(matches!(
            Length::parse("12"),
            Err(ValueParseError::UnexpectedToken(_))
        ));
        assert!(matches!(
            Length::parse("auto"),
            Err(ValueParseError::UnexpectedToken(_))
        ));
    }

    #[test]
    fn test_length_to_px() {
        let font_size = 16.0;
        assert_eq!(Length::px(7.0).to_px(200.0, font_size), 7.0);
        assert_eq!(Length::percent(25.0).to_px(200.0, font_size), 50.0);
        assert_eq!(Length::parse("2em").unwrap().to_px(0.0, font_size), 32.0);
        assert_eq!(Length::parse("2ex").unwrap().to_px(0.0, font_size), 16.0);
        assert_eq!(Length::parse("1in").unwrap().to_px(0.0, font_size), 96.0);
        assert_eq!(Length::parse("12pt").unwrap().to_px(0.0, font_size), 16.0);
        assert_eq!(Length::parse("1pc").unwrap().to_px(0.0, font_size), 16.0);
        assert!((Length::parse("2.54cm").unwrap().to_px(0.0, font_size) - 96.0).abs() < 1e-4);
        assert!((Length::parse("25.4mm").unwrap().to_px(0.0, font_size) - 96.0).abs() < 1e-4);
    }

    #[test]
    fn test_percentage_of_zero_basis() {
        assert_eq!(Length::percent(50.0).to_px(0.0, 16.0), 0.0);
    }
}
