use kurbo::Vec2;

use super::Corner;
use crate::Length;

/// One corner of `border-radius` as specified: horizontal and vertical radius.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerRadius {
    pub x: Length,
    pub y: Length,
}

impl CornerRadius {
    pub const fn circular(radius: Length) -> Self {
        Self {
            x: radius,
            y: radius,
        }
    }
}

/// The `border-radius` property before resolution against the element's size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BorderRadii {
    pub top_left: CornerRadius,
    pub top_right: CornerRadius,
    pub bottom_right: CornerRadius,
    pub bottom_left: CornerRadius,
}

impl BorderRadii {
    pub const fn uniform(radius: Length) -> Self {
        let corner = CornerRadius::circular(radius);
        Self {
            top_left: corner,
            top_right: corner,
            bottom_right: corner,
            bottom_left: corner,
        }
    }

    /// Resolve against a `width` x `height` box and reduce overlapping corners.
    ///
    /// Horizontal radii resolve percentages against the width and vertical radii against the
    /// height. Negative values resolve to zero.
    pub fn resolve(&self, width: f64, height: f64, font_size: f64) -> CornerRadii {
        let px = |corner: &CornerRadius| Vec2 {
            x: corner.x.to_px(width, font_size).max(0.0),
            y: corner.y.to_px(height, font_size).max(0.0),
        };
        CornerRadii {
            top_left: px(&self.top_left),
            top_right: px(&self.top_right),
            bottom_right: px(&self.bottom_right),
            bottom_left: px(&self.bottom_left),
        }
        .clamped(width, height)
    }
}

/// Per-corner radii in pixels: `x` is the horizontal radius and `y` the vertical one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl CornerRadii {
    pub const ZERO: CornerRadii = CornerRadii::uniform(0.0);

    pub const fn uniform(radius: f64) -> Self {
        let corner = Vec2::new(radius, radius);
        Self {
            top_left: corner,
            top_right: corner,
            bottom_right: corner,
            bottom_left: corner,
        }
    }

    pub fn get(&self, corner: Corner) -> Vec2 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    pub fn is_zero(&self) -> bool {
        Corner::ALL.iter().all(|corner| {
            let radius = self.get(*corner);
            radius.x <= 0.0 || radius.y <= 0.0
        })
    }

    fn map(&self, f: impl Fn(Vec2) -> Vec2) -> Self {
        Self {
            top_left: f(self.top_left),
            top_right: f(self.top_right),
            bottom_right: f(self.bottom_right),
            bottom_left: f(self.bottom_left),
        }
    }

    /// The factor every radius must be scaled by so that no two adjacent corners overlap
    /// along a `width` x `height` box's edges. Never more than 1.
    pub fn overlap_factor(&self, width: f64, height: f64) -> f64 {
        let ratio = |length: f64, sum: f64| {
            if sum > 0.0 {
                length.max(0.0) / sum
            } else {
                f64::INFINITY
            }
        };
        ratio(width, self.top_left.x + self.top_right.x)
            .min(ratio(height, self.top_right.y + self.bottom_right.y))
            .min(ratio(width, self.bottom_left.x + self.bottom_right.x))
            .min(ratio(height, self.top_left.y + self.bottom_left.y))
            .min(1.0)
    }

    /// Scale all radii by one common factor so adjacent corners never overlap.
    pub fn clamped(&self, width: f64, height: f64) -> Self {
        let factor = self.overlap_factor(width, height);
        if factor < 1.0 {
            self.map(|radius| radius * factor)
        } else {
            *self
        }
    }

    /// Grow every non-zero radius by `amount` on both axes (negative shrinks, down to zero).
    /// Square corners stay square.
    pub fn grown(&self, amount: f64) -> Self {
        self.map(|radius| {
            if radius.x > 0.0 && radius.y > 0.0 {
                Vec2::new((radius.x + amount).max(0.0), (radius.y + amount).max(0.0))
            } else {
                radius
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_percentages_per_axis() {
        let radii = BorderRadii::uniform(Length::percent(10.0)).resolve(200.0, 100.0, 16.0);
        assert_eq!(radii.top_left, Vec2::new(20.0, 10.0));
        assert_eq!(radii.bottom_right, Vec2::new(20.0, 10.0));
    }

    #[test]
    fn test_overlapping_radii_scale_uniformly() {
        // 60 + 60 along a 100px top edge: f = 100 / 120
        let radii = CornerRadii {
            top_left: Vec2::new(60.0, 10.0),
            top_right: Vec2::new(60.0, 10.0),
            bottom_right: Vec2::new(5.0, 5.0),
            bottom_left: Vec2::new(5.0, 5.0),
        };
        let clamped = radii.clamped(100.0, 100.0);
        let f = 100.0 / 120.0;
        assert_eq!(clamped.top_left, Vec2::new(60.0 * f, 10.0 * f));
        assert_eq!(clamped.bottom_left, Vec2::new(5.0 * f, 5.0 * f));
        assert!((clamped.top_left.x + clamped.top_right.x - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_uses_tightest_edge() {
        let radii = CornerRadii::uniform(40.0);
        // Height 50 is the tight dimension: 40 + 40 > 50
        let clamped = radii.clamped(200.0, 50.0);
        assert_eq!(clamped, CornerRadii::uniform(25.0));
    }

    #[test]
    fn test_non_overlapping_radii_untouched() {
        let radii = CornerRadii::uniform(10.0);
        assert_eq!(radii.clamped(100.0, 100.0), radii);
        assert_eq!(radii.overlap_factor(100.0, 100.0), 1.0);
    }

    #[test]
    fn test_zero_size_box_collapses_radii() {
        let radii = CornerRadii::uniform(10.0).clamped(0.0, 0.0);
        assert!(radii.is_zero());
        let zero = CornerRadii::ZERO.clamped(0.0, 0.0);
        assert_eq!(zero, CornerRadii::ZERO);
    }

    #[test]
    fn test_negative_radius_resolves_to_zero() {
        let radii = BorderRadii::uniform(Length::px(-4.0)).resolve(100.0, 100.0, 16.0);
        assert!(radii.is_zero());
    }

    #[test]
    fn test_grown_keeps_square_corners() {
        let radii = CornerRadii {
            top_left: Vec2::new(4.0, 4.0),
            ..CornerRadii::ZERO
        };
        let grown = radii.grown(3.0);
        assert_eq!(grown.top_left, Vec2::new(7.0, 7.0));
        assert_eq!(grown.top_right, Vec2::ZERO);
        assert_eq!(radii.grown(-10.0).top_left, Vec2::ZERO);
    }
}
