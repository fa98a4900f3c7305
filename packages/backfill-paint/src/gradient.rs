//! Linear gradient metrics.
//!
//! CSS defines a gradient along a line with explicit start and end points. The shape backend
//! only knows gradients that run corner to corner across the shape's box at an angle that gets
//! stretched along with the box. This module finds the CSS line and re-expresses it in the
//! backend's terms.
//!
//! Angles in this module are line angles: degrees counterclockwise from the +x axis as seen on
//! screen (y grows downwards), normalized into `[0, 360)`.

use backfill_traits::style::{ColorStop, GradientDirection, GradientSpec};
use backfill_traits::{HorizontalKeyword, VerticalKeyword, normalize_degrees};
use kurbo::{Point, Size, Vec2};
use smallvec::SmallVec;

use crate::fill::{BackendStop, LinearGradientFill};

/// Convert a CSS gradient angle (0deg points up, clockwise) into a line angle.
pub fn css_to_line_angle(css_degrees: f64) -> f64 {
    normalize_degrees(90.0 - css_degrees)
}

/// The CSS gradient line of one gradient on one box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientMetrics {
    pub width: f64,
    pub height: f64,
    /// Line angle in `[0, 360)`.
    pub angle: f64,
    pub start: Point,
    pub end: Point,
    /// The box corner the line points away from.
    pub start_corner: Point,
    /// The corner diagonally opposite `start_corner`.
    pub end_corner: Point,
    /// `end - start`.
    pub delta: Vec2,
    pub line_length: f64,
}

impl GradientMetrics {
    pub fn compute(size: Size, direction: &GradientDirection, font_size: f64) -> Self {
        let (w, h) = (size.width, size.height);
        let (start, angle) = match direction {
            GradientDirection::Default => (None, Some(270.0)),
            GradientDirection::Angle(angle) => (None, Some(css_to_line_angle(angle.degrees()))),
            GradientDirection::ToSideOrCorner(horizontal, vertical) => {
                (None, Some(side_or_corner_angle(*horizontal, *vertical, w, h)))
            }
            GradientDirection::PositionAngle(position, angle) => (
                Some(position.coords(w, h, font_size)),
                Some(css_to_line_angle(angle.degrees())),
            ),
            GradientDirection::StartPosition(position) => {
                (Some(position.coords(w, h, font_size)), None)
            }
        };

        let (angle, start, end) = match (angle, start) {
            (Some(angle), start) => {
                let (start_corner, end_corner) = corners_for_angle(angle, w, h);
                let start = start.unwrap_or(start_corner);
                (angle, start, perpendicular_intersect(start, angle, end_corner))
            }
            // A start point alone: the line ends at its reflection through the center
            (None, Some(start)) => {
                let end = Point::new(w - start.x, h - start.y);
                (angle_of(end - start), start, end)
            }
            (None, None) => (270.0, Point::ZERO, Point::new(0.0, h)),
        };

        let (start_corner, end_corner) = corners_for_angle(angle, w, h);
        Self {
            width: w,
            height: h,
            angle,
            start,
            end,
            start_corner,
            end_corner,
            delta: end - start,
            line_length: start.distance(end),
        }
    }

    /// The backend's gradient angle, corrected for the distortion the backend applies when it
    /// stretches a gradient over a non-square box.
    ///
    /// Axis-aligned lines are returned exactly.
    pub fn backend_angle(&self) -> f64 {
        if self.angle % 90.0 != 0.0 && self.height > 0.0 {
            normalize_degrees(
                self.delta
                    .y
                    .atan2(self.delta.x * self.width / self.height)
                    .to_degrees(),
            )
        } else {
            normalize_degrees(-self.angle)
        }
    }

    /// Length of the line the backend spreads its stops over: the box projected onto the
    /// gradient direction, from the start corner to the end corner.
    pub fn backend_line_length(&self) -> f64 {
        let foot = perpendicular_intersect(self.start_corner, self.angle, self.end_corner);
        self.start_corner.distance(foot)
    }

    /// How far along the backend line the CSS line starts, in percent.
    pub fn backend_start_offset(&self) -> f64 {
        let backend_length = self.backend_line_length();
        if backend_length <= 0.0 {
            return 0.0;
        }
        let foot = perpendicular_intersect(self.start, self.angle, self.start_corner);
        let distance = self.start.distance(foot);
        // Negative when the start lies outside the box, before the start corner
        let sign = if (self.start - self.start_corner).dot(direction(self.angle)) < 0.0 {
            -1.0
        } else {
            1.0
        };
        sign * distance / backend_length * 100.0
    }

    /// Convert stop positions along the CSS line (pixels) into backend percentages.
    pub fn backend_stop_percentages(&self, positions: &[f64]) -> SmallVec<[f64; 4]> {
        let backend_length = self.backend_line_length();
        let offset = self.backend_start_offset();
        positions
            .iter()
            .map(|px| {
                if backend_length > 0.0 {
                    offset + px / backend_length * 100.0
                } else {
                    offset
                }
            })
            .collect()
    }
}

/// Unit vector of a line angle in screen coordinates.
fn direction(angle: f64) -> Vec2 {
    let radians = angle.to_radians();
    Vec2::new(radians.cos(), -radians.sin())
}

/// The corner a line at `angle` points away from, and the one diagonally opposite.
fn corners_for_angle(angle: f64, w: f64, h: f64) -> (Point, Point) {
    let x = if (90.0..270.0).contains(&angle) { w } else { 0.0 };
    let y = if angle < 180.0 { h } else { 0.0 };
    (Point::new(x, y), Point::new(w - x, h - y))
}

/// Line angle of a vector, exact for axis-aligned vectors.
fn angle_of(delta: Vec2) -> f64 {
    if delta.x == 0.0 {
        if delta.y < 0.0 { 90.0 } else { 270.0 }
    } else if delta.y == 0.0 {
        if delta.x < 0.0 { 180.0 } else { 0.0 }
    } else {
        normalize_degrees(-delta.y.atan2(delta.x).to_degrees())
    }
}

/// Line angle for `to <side>` and `to <corner>`. Corners aim so the 50% line joins the two
/// other corners.
fn side_or_corner_angle(
    horizontal: Option<HorizontalKeyword>,
    vertical: Option<VerticalKeyword>,
    w: f64,
    h: f64,
) -> f64 {
    let sx = match horizontal {
        Some(HorizontalKeyword::Left) => -1,
        Some(HorizontalKeyword::Right) => 1,
        Some(HorizontalKeyword::Center) | None => 0,
    };
    let sy = match vertical {
        Some(VerticalKeyword::Top) => -1,
        Some(VerticalKeyword::Bottom) => 1,
        Some(VerticalKeyword::Center) | None => 0,
    };
    match (sx, sy) {
        (0, -1) => 90.0,
        (0, _) => 270.0,
        (-1, 0) => 180.0,
        (_, 0) => 0.0,
        (sx, sy) => normalize_degrees((-sy as f64 * w).atan2(sx as f64 * h).to_degrees()),
    }
}

/// Where the line through `p1` at `angle` meets the perpendicular through `p2`.
pub fn perpendicular_intersect(p1: Point, angle: f64, p2: Point) -> Point {
    if angle == 0.0 || angle == 180.0 {
        Point::new(p2.x, p1.y)
    } else if angle == 90.0 || angle == 270.0 {
        Point::new(p1.x, p2.y)
    } else {
        // Both lines as y = a * x - c, in screen coordinates
        let a1 = (-angle).to_radians().tan();
        let c1 = a1 * p1.x - p1.y;
        let a2 = -1.0 / a1;
        let c2 = a2 * p2.x - p2.y;
        let d = a2 - a1;
        Point::new((c2 - c1) / d, (a1 * c2 - a2 * c1) / d)
    }
}

/// Pixel position of every stop along a line of `line_length`.
///
/// Missing first/last offsets default to the ends of the line, missing interior offsets are
/// spread evenly between their neighbours, and positions never decrease.
pub fn stop_positions(
    stops: &[ColorStop],
    line_length: f64,
    font_size: f64,
) -> SmallVec<[f64; 4]> {
    let mut resolved: SmallVec<[Option<f64>; 4]> = stops
        .iter()
        .map(|stop| stop.offset.map(|offset| offset.to_px(line_length, font_size)))
        .collect();

    let Some(last) = resolved.len().checked_sub(1) else {
        return SmallVec::new();
    };
    if resolved[0].is_none() {
        resolved[0] = Some(0.0);
    }
    if resolved[last].is_none() {
        resolved[last] = Some(line_length);
    }

    let mut positions: SmallVec<[f64; 4]> = SmallVec::with_capacity(resolved.len());
    let mut i = 0;
    while i < resolved.len() {
        match resolved[i] {
            Some(px) => {
                positions.push(px);
                i += 1;
            }
            None => {
                // The last entry is always resolved, so the run ends before it
                let j = (i..resolved.len())
                    .find(|&j| resolved[j].is_some())
                    .unwrap_or(last);
                let before = positions.last().copied().unwrap_or(0.0);
                let after = resolved[j].unwrap_or(line_length);
                let steps = (j - i + 1) as f64;
                for k in i..j {
                    positions.push(before + (after - before) * (k - i + 1) as f64 / steps);
                }
                i = j;
            }
        }
    }

    let mut max = f64::NEG_INFINITY;
    for px in positions.iter_mut() {
        max = max.max(*px);
        *px = max;
    }
    positions
}

/// The backend fill for one `linear-gradient()` over a `size` box, or `None` when the gradient
/// cannot paint anything.
pub fn linear_gradient_fill(
    size: Size,
    spec: &GradientSpec,
    font_size: f64,
) -> Option<LinearGradientFill> {
    if !spec.is_active() {
        #[cfg(feature = "tracing")]
        tracing::debug!(stops = spec.stops.len(), "linear gradient needs at least two stops");
        return None;
    }
    if size.width <= 0.0 || size.height <= 0.0 {
        return None;
    }

    let metrics = GradientMetrics::compute(size, &spec.direction, font_size);
    if metrics.backend_line_length() <= 0.0 {
        return None;
    }

    let positions = stop_positions(&spec.stops, metrics.line_length, font_size);
    let percentages = metrics.backend_stop_percentages(&positions);
    let stops: SmallVec<[BackendStop; 4]> = spec
        .stops
        .iter()
        .zip(positions.iter().zip(percentages.iter()))
        .map(|(stop, (px, percent))| BackendStop {
            percent: *percent,
            fraction: if metrics.line_length > 0.0 {
                px / metrics.line_length
            } else {
                0.0
            },
            color: stop.color,
        })
        .collect();

    let first = spec.stops.first()?.color;
    let last = spec.stops.last()?.color;

    let interior = &spec.stops[1..spec.stops.len() - 1];
    if interior.iter().any(|stop| stop.color.alpha() < 1.0) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            stops = interior.len(),
            "interior gradient stop opacity is not representable and was dropped"
        );
    }

    Some(LinearGradientFill {
        angle: metrics.backend_angle(),
        color: first,
        color2: last,
        opacity: first.alpha(),
        opacity2: last.alpha(),
        stops,
        start: metrics.start,
        end: metrics.end,
    })
}
