use cssparser::{Parser, ParserInput, Token};
use kurbo::Point;

use crate::{Length, ValueParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalKeyword {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalKeyword {
    Top,
    Center,
    Bottom,
}

/// One axis of a [`Position`]: either a keyword with an optional offset from that edge, or a
/// length measured from the left/top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionComponent<K> {
    Keyword(K, Option<Length>),
    Length(Length),
}

/// A background-position style point, as used for the start of a legacy gradient line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub horizontal: PositionComponent<HorizontalKeyword>,
    pub vertical: PositionComponent<VerticalKeyword>,
}

impl Default for Position {
    fn default() -> Self {
        Self::CENTER
    }
}

#[derive(Debug, Clone, Copy)]
enum Item {
    Keyword(Keyword),
    Length(Length),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Keyword {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

impl Keyword {
    fn is_horizontal(self) -> bool {
        matches!(self, Keyword::Left | Keyword::Right)
    }

    fn is_vertical(self) -> bool {
        matches!(self, Keyword::Top | Keyword::Bottom)
    }

    fn horizontal(self) -> Option<HorizontalKeyword> {
        match self {
            Keyword::Left => Some(HorizontalKeyword::Left),
            Keyword::Right => Some(HorizontalKeyword::Right),
            Keyword::Center => Some(HorizontalKeyword::Center),
            Keyword::Top | Keyword::Bottom => None,
        }
    }

    fn vertical(self) -> Option<VerticalKeyword> {
        match self {
            Keyword::Top => Some(VerticalKeyword::Top),
            Keyword::Bottom => Some(VerticalKeyword::Bottom),
            Keyword::Center => Some(VerticalKeyword::Center),
            Keyword::Left | Keyword::Right => None,
        }
    }
}

fn invalid(items: &[Item]) -> ValueParseError {
    ValueParseError::UnexpectedToken(format!("{items:?}"))
}

impl Position {
    pub const CENTER: Position = Position {
        horizontal: PositionComponent::Keyword(HorizontalKeyword::Center, None),
        vertical: PositionComponent::Keyword(VerticalKeyword::Center, None),
    };

    pub const TOP_LEFT: Position = Position {
        horizontal: PositionComponent::Keyword(HorizontalKeyword::Left, None),
        vertical: PositionComponent::Keyword(VerticalKeyword::Top, None),
    };

    /// Parse one to four position tokens: `left`, `top right`, `25% 10px`,
    /// `right 10px bottom 20%`, ...
    pub fn parse(input: &str) -> Result<Self, ValueParseError> {
        let mut input = ParserInput::new(input);
        let mut parser = Parser::new(&mut input);
        let mut items = Vec::with_capacity(4);
        while !parser.is_exhausted() {
            let item = match parser.next()? {
                Token::Ident(ident) => match ident.to_ascii_lowercase().as_str() {
                    "left" => Item::Keyword(Keyword::Left),
                    "right" => Item::Keyword(Keyword::Right),
                    "top" => Item::Keyword(Keyword::Top),
                    "bottom" => Item::Keyword(Keyword::Bottom),
                    "center" => Item::Keyword(Keyword::Center),
                    other => return Err(ValueParseError::UnexpectedToken(other.to_string())),
                },
                token => Item::Length(Length::from_token(token)?),
            };
            items.push(item);
        }

        match items.as_slice() {
            [] => Err(ValueParseError::Empty),
            [single] => Self::from_single(*single),
            [first, second] => Self::from_pair(*first, *second),
            [_, _, _] | [_, _, _, _] => Self::from_edge_offsets(&items),
            _ => Err(ValueParseError::TrailingInput),
        }
    }

    fn from_single(item: Item) -> Result<Self, ValueParseError> {
        let center_v = PositionComponent::Keyword(VerticalKeyword::Center, None);
        let center_h = PositionComponent::Keyword(HorizontalKeyword::Center, None);
        Ok(match item {
            Item::Length(length) => Position {
                horizontal: PositionComponent::Length(length),
                vertical: center_v,
            },
            Item::Keyword(kw) if kw.is_vertical() => Position {
                horizontal: center_h,
                vertical: PositionComponent::Keyword(
                    kw.vertical().unwrap_or(VerticalKeyword::Center),
                    None,
                ),
            },
            Item::Keyword(kw) => Position {
                horizontal: PositionComponent::Keyword(
                    kw.horizontal().unwrap_or(HorizontalKeyword::Center),
                    None,
                ),
                vertical: center_v,
            },
        })
    }

    fn from_pair(first: Item, second: Item) -> Result<Self, ValueParseError> {
        // `top left` is allowed to name the vertical keyword first
        let (x, y) = match (first, second) {
            (Item::Keyword(a), Item::Keyword(b)) if a.is_vertical() || b.is_horizontal() => {
                (second, first)
            }
            _ => (first, second),
        };

        let horizontal = match x {
            Item::Length(length) => PositionComponent::Length(length),
            Item::Keyword(kw) => PositionComponent::Keyword(
                kw.horizontal().ok_or_else(|| invalid(&[first, second]))?,
                None,
            ),
        };
        let vertical = match y {
            Item::Length(length) => PositionComponent::Length(length),
            Item::Keyword(kw) => PositionComponent::Keyword(
                kw.vertical().ok_or_else(|| invalid(&[first, second]))?,
                None,
            ),
        };
        Ok(Position {
            horizontal,
            vertical,
        })
    }

    fn from_edge_offsets(items: &[Item]) -> Result<Self, ValueParseError> {
        // Group into (keyword, optional offset) pairs
        let mut groups: Vec<(Keyword, Option<Length>)> = Vec::with_capacity(2);
        for item in items {
            match *item {
                Item::Keyword(kw) => groups.push((kw, None)),
                Item::Length(length) => match groups.last_mut() {
                    Some((kw, offset @ None)) if *kw != Keyword::Center => *offset = Some(length),
                    _ => return Err(invalid(items)),
                },
            }
        }
        let [(a, a_offset), (b, b_offset)] = groups.as_slice() else {
            return Err(invalid(items));
        };
        let (h, h_offset, v, v_offset) = if a.is_vertical() || b.is_horizontal() {
            (*b, *b_offset, *a, *a_offset)
        } else {
            (*a, *a_offset, *b, *b_offset)
        };
        Ok(Position {
            horizontal: PositionComponent::Keyword(
                h.horizontal().ok_or_else(|| invalid(items))?,
                h_offset,
            ),
            vertical: PositionComponent::Keyword(
                v.vertical().ok_or_else(|| invalid(items))?,
                v_offset,
            ),
        })
    }

    /// Resolve to a point inside a `width` x `height` box. Percentages resolve against the
    /// box size on their own axis.
    pub fn coords(&self, width: f64, height: f64, font_size: f64) -> Point {
        let x = match self.horizontal {
            PositionComponent::Length(length) => length.to_px(width, font_size),
            PositionComponent::Keyword(kw, offset) => {
                let offset = offset.map_or(0.0, |o| o.to_px(width, font_size));
                match kw {
                    HorizontalKeyword::Left => offset,
                    HorizontalKeyword::Center => width / 2.0,
                    HorizontalKeyword::Right => width - offset,
                }
            }
        };
        let y = match self.vertical {
            PositionComponent::Length(length) => length.to_px(height, font_size),
            PositionComponent::Keyword(kw, offset) => {
                let offset = offset.map_or(0.0, |o| o.to_px(height, font_size));
                match kw {
                    VerticalKeyword::Top => offset,
                    VerticalKeyword::Center => height / 2.0,
                    VerticalKeyword::Bottom => height - offset,
                }
            }
        };
        Point::new(x, y)
    }
}
