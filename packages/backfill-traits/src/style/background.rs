use super::GradientSpec;
use crate::Color;

/// The parts of `background` the painters can reproduce.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Background {
    pub color: Option<Color>,
    /// `linear-gradient()` layers in declaration order (first is top-most).
    pub gradients: Vec<GradientSpec>,
}

impl Background {
    pub fn is_active(&self) -> bool {
        self.color.is_some_and(|color| !color.is_transparent())
            || self.gradients.iter().any(GradientSpec::is_active)
    }
}
