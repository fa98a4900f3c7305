use crate::{Color, Length};

/// One `box-shadow` layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    pub offset_x: Length,
    pub offset_y: Length,
    pub blur: Length,
    pub spread: Length,
    pub color: Color,
    pub inset: bool,
}

impl BoxShadow {
    pub fn new(offset_x: Length, offset_y: Length, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur: Length::ZERO,
            spread: Length::ZERO,
            color,
            inset: false,
        }
    }

    pub fn with_blur(mut self, blur: Length) -> Self {
        self.blur = blur;
        self
    }

    pub fn with_spread(mut self, spread: Length) -> Self {
        self.spread = spread;
        self
    }

    pub fn with_inset(mut self, inset: bool) -> Self {
        self.inset = inset;
        self
    }
}
