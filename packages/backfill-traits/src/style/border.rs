use std::str::FromStr;

use kurbo::Insets;

use crate::{Color, ValueParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// Sides in painting order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn is_vertical(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }

    /// The corners at the start and end of this side, walking the box clockwise.
    pub fn corners(self) -> (Corner, Corner) {
        match self {
            Edge::Top => (Corner::TopLeft, Corner::TopRight),
            Edge::Right => (Corner::TopRight, Corner::BottomRight),
            Edge::Bottom => (Corner::BottomRight, Corner::BottomLeft),
            Edge::Left => (Corner::BottomLeft, Corner::TopLeft),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    pub fn is_right(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight)
    }

    pub fn is_bottom(self) -> bool {
        matches!(self, Corner::BottomRight | Corner::BottomLeft)
    }

    /// The vertical (left/right) and horizontal (top/bottom) sides meeting at this corner.
    pub fn edges(self) -> (Edge, Edge) {
        match self {
            Corner::TopLeft => (Edge::Left, Edge::Top),
            Corner::TopRight => (Edge::Right, Edge::Top),
            Corner::BottomRight => (Edge::Right, Edge::Bottom),
            Corner::BottomLeft => (Edge::Left, Edge::Bottom),
        }
    }
}

/// The border-style property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    #[default]
    None,
    Hidden,
    Solid,
    Dashed,
    Dotted,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
}

impl BorderStyle {
    /// Styles whose color differs between sides or between the two halves of a side.
    pub fn is_shaded(self) -> bool {
        matches!(
            self,
            BorderStyle::Groove | BorderStyle::Ridge | BorderStyle::Inset | BorderStyle::Outset
        )
    }
}

impl FromStr for BorderStyle {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "none" => BorderStyle::None,
            "hidden" => BorderStyle::Hidden,
            "solid" => BorderStyle::Solid,
            "dashed" => BorderStyle::Dashed,
            "dotted" => BorderStyle::Dotted,
            "double" => BorderStyle::Double,
            "groove" => BorderStyle::Groove,
            "ridge" => BorderStyle::Ridge,
            "inset" => BorderStyle::Inset,
            "outset" => BorderStyle::Outset,
            "" => return Err(ValueParseError::Empty),
            other => return Err(ValueParseError::UnexpectedToken(other.to_string())),
        })
    }
}

/// One side of the border, with its width already resolved to pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BorderSide {
    pub width: f64,
    pub style: BorderStyle,
    pub color: Color,
}

impl BorderSide {
    pub fn new(width: f64, style: BorderStyle, color: Color) -> Self {
        Self {
            width,
            style,
            color,
        }
    }

    /// Whether this side paints anything at all.
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
            && !matches!(self.style, BorderStyle::None | BorderStyle::Hidden)
            && !self.color.is_transparent()
    }

    /// The width this side occupies in layout terms: zero for `none`/`hidden`.
    pub fn used_width(&self) -> f64 {
        match self.style {
            BorderStyle::None | BorderStyle::Hidden => 0.0,
            _ => self.width.max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BorderSides {
    pub top: BorderSide,
    pub right: BorderSide,
    pub bottom: BorderSide,
    pub left: BorderSide,
}

impl BorderSides {
    pub fn uniform(side: BorderSide) -> Self {
        Self {
            top: side,
            right: side,
            bottom: side,
            left: side,
        }
    }

    pub fn get(&self, edge: Edge) -> &BorderSide {
        match edge {
            Edge::Top => &self.top,
            Edge::Right => &self.right,
            Edge::Bottom => &self.bottom,
            Edge::Left => &self.left,
        }
    }

    /// Used widths of all four sides as insets.
    pub fn widths(&self) -> Insets {
        Insets {
            x0: self.left.used_width(),
            y0: self.top.used_width(),
            x1: self.right.used_width(),
            y1: self.bottom.used_width(),
        }
    }

    pub fn any_visible(&self) -> bool {
        Edge::ALL.iter().any(|edge| self.get(*edge).is_visible())
    }

    /// All four sides are identical.
    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.top == self.bottom && self.top == self.left
    }
}
