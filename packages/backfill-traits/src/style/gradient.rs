use crate::{Angle, Color, HorizontalKeyword, Length, Position, VerticalKeyword};

/// Where a linear gradient's line runs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GradientDirection {
    /// No direction given: top to bottom.
    #[default]
    Default,
    /// A CSS angle: `0deg` points to the top, positive angles turn clockwise.
    Angle(Angle),
    /// The line starts at this point and ends at its reflection through the box center.
    StartPosition(Position),
    /// Legacy prefixed syntax: the line starts at the point and runs at the angle.
    PositionAngle(Position, Angle),
    /// `to right`, `to top left`, ... `Center` keywords count as absent.
    ToSideOrCorner(Option<HorizontalKeyword>, Option<VerticalKeyword>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub color: Color,
    /// Distance from the start of the gradient line; percentages resolve against its length.
    pub offset: Option<Length>,
}

impl ColorStop {
    pub fn new(color: Color, offset: Option<Length>) -> Self {
        Self { color, offset }
    }
}

/// A parsed `linear-gradient()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientSpec {
    pub direction: GradientDirection,
    pub stops: Vec<ColorStop>,
}

impl GradientSpec {
    pub fn new(direction: GradientDirection, stops: Vec<ColorStop>) -> Self {
        Self { direction, stops }
    }

    /// A gradient needs at least two stops to paint anything.
    pub fn is_active(&self) -> bool {
        self.stops.len() >= 2
    }
}
