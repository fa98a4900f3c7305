use std::f64::consts::PI;

use cssparser::{Parser, ParserInput, Token};

use crate::ValueParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Deg,
    Rad,
    Grad,
    Turn,
}

/// A CSS angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    pub value: f64,
    pub unit: AngleUnit,
}

impl Angle {
    pub const fn deg(value: f64) -> Self {
        Self {
            value,
            unit: AngleUnit::Deg,
        }
    }

    /// Parse a single angle token, e.g. `45deg`, `0.5turn` or a unitless `0`.
    pub fn parse(input: &str) -> Result<Self, ValueParseError> {
        let mut input = ParserInput::new(input);
        let mut parser = Parser::new(&mut input);
        let angle = Self::from_token(parser.next()?)?;
        if !parser.is_exhausted() {
            return Err(ValueParseError::TrailingInput);
        }
        Ok(angle)
    }

    pub(crate) fn from_token(token: &Token) -> Result<Self, ValueParseError> {
        match token {
            Token::Dimension { value, unit, .. } => {
                let value = *value as f64;
                let unit = match unit.to_ascii_lowercase().as_str() {
                    "deg" => AngleUnit::Deg,
                    "rad" => AngleUnit::Rad,
                    "grad" => AngleUnit::Grad,
                    "turn" => AngleUnit::Turn,
                    _ => return Err(ValueParseError::UnknownUnit(unit.to_string())),
                };
                Ok(Angle { value, unit })
            }
            Token::Number { value, .. } if *value == 0.0 => Ok(Angle::deg(0.0)),
            other => Err(ValueParseError::UnexpectedToken(format!("{other:?}"))),
        }
    }

    /// The angle in degrees. Not normalized.
    pub fn degrees(&self) -> f64 {
        match self.unit {
            AngleUnit::Deg => self.value,
            AngleUnit::Rad => self.value * 180.0 / PI,
            AngleUnit::Grad => self.value * 360.0 / 400.0,
            AngleUnit::Turn => self.value * 360.0,
        }
    }
}
