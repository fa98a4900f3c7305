//! Border shapes.
//!
//! A border whose four sides are identical and painted in one flat color becomes a single
//! shape: the outer contour with the inner contour cut out of it. Anything else is split into
//! one region per side, bounded by the side's outer and inner edges and by the 45 degree points
//! of the adjoining corner arcs, so each side can carry its own color and style.

use backfill_traits::Color;
use backfill_traits::style::{BorderSide, BorderSides, BorderStyle, Corner, CornerRadii, Edge};
use kurbo::{Insets, Point, Size, Vec2};
use smallvec::SmallVec;

use crate::box_path::{box_path, clamp_shrink};
use crate::dash::{append_cutouts, dash_cutouts, dash_length};
use crate::fill::Fill;
use crate::path::Path;
use crate::shape::PathResult;
use crate::{BORDER_SCALE, SHADE_AMOUNT};

/// Double borders thinner than this are painted solid.
const MIN_DOUBLE_WIDTH: f64 = 3.0;

/// All shapes needed to paint `sides` around a `size` box, in paint order.
pub fn border_shapes(
    size: Size,
    sides: &BorderSides,
    radii: Option<&CornerRadii>,
) -> Vec<PathResult> {
    if !sides.any_visible() || size.width <= 0.0 || size.height <= 0.0 {
        #[cfg(feature = "tracing")]
        tracing::debug!("border has no visible side");
        return Vec::new();
    }

    if let Some(shape) = uniform_border_shape(size, sides, radii) {
        return vec![shape];
    }

    let frame = BorderFrame::new(size, sides.widths(), radii);
    Edge::ALL
        .iter()
        .flat_map(|edge| frame.side_shapes(sides.get(*edge), *edge))
        .collect()
}

/// The single-shape rendering of a border whose sides are all the same flat style.
fn uniform_border_shape(
    size: Size,
    sides: &BorderSides,
    radii: Option<&CornerRadii>,
) -> Option<PathResult> {
    let side = sides.top;
    if !sides.is_uniform()
        || side.style.is_shaded()
        || dash_length(side.style, side.width).is_some()
    {
        return None;
    }

    let width = side.width;
    let mut path = box_path(size, Insets::ZERO, radii, BORDER_SCALE);
    if side.style == BorderStyle::Double && width >= MIN_DOUBLE_WIDTH {
        for depth in [width / 3.0, width * 2.0 / 3.0] {
            path.append(&box_path(size, Insets::uniform(depth), radii, BORDER_SCALE));
        }
    }
    path.append(&box_path(size, Insets::uniform(width), radii, BORDER_SCALE));

    Some(PathResult::new(path, Fill::Solid(side.color), BORDER_SCALE))
}

/// Geometry shared by the four side regions of one border.
#[derive(Debug, Clone, Copy)]
struct BorderFrame {
    size: Size,
    widths: Insets,
    radii: CornerRadii,
    scale: f64,
}

impl BorderFrame {
    fn new(size: Size, widths: Insets, radii: Option<&CornerRadii>) -> Self {
        Self {
            size,
            widths: clamp_shrink(size, widths),
            radii: radii
                .map(|radii| radii.clamped(size.width, size.height))
                .unwrap_or(CornerRadii::ZERO),
            scale: BORDER_SCALE as f64,
        }
    }

    /// Center and radii of the contour `depth` (0 = outer edge, 1 = inner edge) of the way into
    /// the border around `corner`. Square corners collapse to a point.
    fn corner_ellipse(&self, corner: Corner, depth: f64) -> (Point, Vec2) {
        let radius = self.radii.get(corner);
        let inset_x = depth * if corner.is_right() { self.widths.x1 } else { self.widths.x0 };
        let inset_y = depth * if corner.is_bottom() { self.widths.y1 } else { self.widths.y0 };

        let (reach, radii) = if radius.x > 0.0 && radius.y > 0.0 {
            (
                Vec2::new(radius.x.max(inset_x), radius.y.max(inset_y)),
                Vec2::new((radius.x - inset_x).max(0.0), (radius.y - inset_y).max(0.0)),
            )
        } else {
            (Vec2::new(inset_x, inset_y), Vec2::ZERO)
        };

        let x = if corner.is_right() { self.size.width - reach.x } else { reach.x };
        let y = if corner.is_bottom() { self.size.height - reach.y } else { reach.y };
        (
            Point::new(x * self.scale, y * self.scale),
            radii * self.scale,
        )
    }

    /// Append the part of `edge`'s region between `outer` and `inner` depth as one closed
    /// clockwise sub-path.
    fn append_band(&self, path: &mut Path, edge: Edge, outer: f64, inner: f64) {
        let (before, after) = edge.corners();
        // Each corner's quarter is split at its 45 degree point
        let before_start = (225.0 + 90.0 * edge_index(edge)) % 360.0;
        let after_start = (270.0 + 90.0 * edge_index(edge)) % 360.0;

        let (center, radii) = self.corner_ellipse(before, outer);
        path.arc(center, radii, before_start, 45.0, false);
        let (center, radii) = self.corner_ellipse(after, outer);
        path.arc(center, radii, after_start, 45.0, true);
        let (center, radii) = self.corner_ellipse(after, inner);
        path.arc(center, radii, after_start + 45.0, -45.0, true);
        let (center, radii) = self.corner_ellipse(before, inner);
        path.arc(center, radii, before_start + 45.0, -45.0, true);
        path.close();
    }

    fn band(&self, edge: Edge, outer: f64, inner: f64) -> Path {
        let mut path = Path::new();
        self.append_band(&mut path, edge, outer, inner);
        path
    }

    /// The shapes painting one side, outer half first where the side is split.
    fn side_shapes(&self, side: &BorderSide, edge: Edge) -> SmallVec<[PathResult; 2]> {
        let mut shapes = SmallVec::new();
        if !side.is_visible() {
            return shapes;
        }
        let solid =
            |path: Path, color: Color| PathResult::new(path, Fill::Solid(color), BORDER_SCALE);

        match side.style {
            BorderStyle::None | BorderStyle::Hidden => {}
            BorderStyle::Double if side.width >= MIN_DOUBLE_WIDTH => {
                let mut path = self.band(edge, 0.0, 1.0 / 3.0);
                self.append_band(&mut path, edge, 2.0 / 3.0, 1.0);
                shapes.push(solid(path, side.color));
            }
            BorderStyle::Groove | BorderStyle::Ridge => {
                shapes.push(solid(
                    self.band(edge, 0.0, 0.5),
                    shade(side.color, side.style, edge, true),
                ));
                shapes.push(solid(
                    self.band(edge, 0.5, 1.0),
                    shade(side.color, side.style, edge, false),
                ));
            }
            BorderStyle::Inset | BorderStyle::Outset => {
                shapes.push(solid(
                    self.band(edge, 0.0, 1.0),
                    shade(side.color, side.style, edge, true),
                ));
            }
            BorderStyle::Dashed | BorderStyle::Dotted => {
                let mut path = self.band(edge, 0.0, 1.0);
                append_cutouts(&mut path, &self.dash_cutouts(side, edge), self.scale);
                shapes.push(solid(path, side.color));
            }
            BorderStyle::Solid | BorderStyle::Double => {
                shapes.push(solid(self.band(edge, 0.0, 1.0), side.color));
            }
        }
        shapes
    }

    /// Gap cutouts along the straight part of `edge`, in pixels.
    fn dash_cutouts(&self, side: &BorderSide, edge: Edge) -> Vec<kurbo::Rect> {
        let Size { width: w, height: h } = self.size;
        let Insets {
            x0: left,
            y0: top,
            x1: right,
            y1: bottom,
        } = self.widths;
        let r = &self.radii;
        let (start, end, shift) = match edge {
            Edge::Top => (
                r.top_left.x.max(left),
                w - r.top_right.x.max(right),
                0.0,
            ),
            Edge::Right => (
                r.top_right.y.max(top),
                h - r.bottom_right.y.max(bottom),
                w - right,
            ),
            Edge::Bottom => (
                r.bottom_left.x.max(left),
                w - r.bottom_right.x.max(right),
                h - bottom,
            ),
            Edge::Left => (
                r.top_left.y.max(top),
                h - r.bottom_left.y.max(bottom),
                0.0,
            ),
        };
        let width = match edge {
            Edge::Top => top,
            Edge::Right => right,
            Edge::Bottom => bottom,
            Edge::Left => left,
        };
        dash_cutouts(start, end, width, shift, edge.is_vertical(), side.style)
    }
}

fn edge_index(edge: Edge) -> f64 {
    match edge {
        Edge::Top => 0.0,
        Edge::Right => 1.0,
        Edge::Bottom => 2.0,
        Edge::Left => 3.0,
    }
}

/// The color of one half of a 3-D side. The light comes from the top left.
fn shade(color: Color, style: BorderStyle, edge: Edge, outer_half: bool) -> Color {
    let lit = matches!(edge, Edge::Top | Edge::Left);
    let lighten = match style {
        BorderStyle::Outset => lit,
        BorderStyle::Inset => !lit,
        BorderStyle::Ridge => lit == outer_half,
        BorderStyle::Groove => lit != outer_half,
        _ => return color,
    };
    if lighten {
        color.lighten(SHADE_AMOUNT)
    } else {
        color.darken(SHADE_AMOUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;

    const SIZE: Size = Size::new(100.0, 50.0);

    fn red() -> Color {
        Color::from_rgba8(255, 0, 0, 255)
    }

    fn side(width: f64, style: BorderStyle) -> BorderSide {
        BorderSide::new(width, style, red())
    }

    fn solid_color(shape: &PathResult) -> Color {
        match shape.fill {
            Some(Fill::Solid(color)) => color,
            ref other => panic!("expected a solid fill, got {other:?}"),
        }
    }

    #[test]
    fn test_uniform_solid_is_one_shape() {
        let sides = BorderSides::uniform(side(2.0, BorderStyle::Solid));
        let shapes = border_shapes(SIZE, &sides, None);
        assert_eq!(shapes.len(), 1);
        assert_eq!(
            shapes[0].path.to_string(),
            "m0,0 qy0,0 l200,0 qx200,0 l200,100 qy200,100 l0,100 qx0,100 x \
             m4,4 qy4,4 l196,4 qx196,4 l196,96 qy196,96 l4,96 qx4,96 x e"
        );
        assert_eq!(solid_color(&shapes[0]), red());
        assert_eq!(shapes[0].fill_rule, peniko::Fill::EvenOdd);
    }

    #[test]
    fn test_uniform_double_nests_contours() {
        let sides = BorderSides::uniform(side(6.0, BorderStyle::Double));
        let shapes = border_shapes(SIZE, &sides, None);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].path.subpath_count(), 4);

        let thin = BorderSides::uniform(side(2.0, BorderStyle::Double));
        let shapes = border_shapes(SIZE, &thin, None);
        assert_eq!(shapes[0].path.subpath_count(), 2, "thin double falls back to solid");
    }

    #[test]
    fn test_uniform_shaded_or_dashed_splits() {
        for style in [BorderStyle::Outset, BorderStyle::Inset, BorderStyle::Dotted] {
            let sides = BorderSides::uniform(side(4.0, style));
            assert_eq!(border_shapes(SIZE, &sides, None).len(), 4, "{style:?}");
        }
    }

    #[test]
    fn test_differing_sides_split_per_edge() {
        let mut sides = BorderSides::uniform(side(2.0, BorderStyle::Solid));
        sides.left.width = 4.0;
        sides.bottom = BorderSide::default();
        let shapes = border_shapes(SIZE, &sides, None);
        // Bottom is invisible and contributes nothing
        assert_eq!(shapes.len(), 3);
        for shape in &shapes {
            assert_eq!(shape.path.subpath_count(), 1);
        }
    }

    #[test]
    fn test_top_region_geometry() {
        let mut sides = BorderSides::uniform(side(2.0, BorderStyle::Solid));
        sides.right.color = Color::BLACK;
        let shapes = border_shapes(SIZE, &sides, None);
        // Square corners: the region is a trapezoid from the outer corners to the inner ones
        assert_eq!(
            shapes[0].path.to_string(),
            "al0,0,0,0,-14745600,-2949120 ae200,0,0,0,-17694720,-2949120 \
             ae196,4,0,0,-20643840,2949120 ae4,4,0,0,-17694720,2949120 x e"
        );
        assert_eq!(solid_color(&shapes[1]), Color::BLACK);
    }

    #[test]
    fn test_rounded_region_uses_inner_radius() {
        let mut sides = BorderSides::uniform(side(2.0, BorderStyle::Solid));
        sides.top.color = Color::BLACK;
        let radii = CornerRadii::uniform(10.0);
        let shapes = border_shapes(SIZE, &sides, Some(&radii));
        let arcs: Vec<(Point, Vec2)> = shapes[0]
            .path
            .commands()
            .iter()
            .filter_map(|cmd| match *cmd {
                PathCommand::Arc { center, radii, .. } => Some((center, radii)),
                _ => None,
            })
            .collect();
        assert_eq!(arcs[0], (Point::new(20.0, 20.0), Vec2::new(20.0, 20.0)));
        assert_eq!(arcs[3], (Point::new(20.0, 20.0), Vec2::new(16.0, 16.0)));
    }

    fn arc_centers(shape: &PathResult) -> Vec<Point> {
        shape
            .path
            .commands()
            .iter()
            .filter_map(|cmd| match *cmd {
                PathCommand::Arc { center, .. } => Some(center),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_overflowing_widths_meet_at_center() {
        let mut sides = BorderSides::uniform(side(2.0, BorderStyle::Solid));
        sides.left.width = 60.0;
        sides.right.width = 60.0;
        let shapes = border_shapes(SIZE, &sides, None);
        assert_eq!(shapes.len(), 4);

        // Arcs run outer before, outer after, inner after, inner before
        let top = arc_centers(&shapes[0]);
        assert!(top[2].x >= top[3].x, "top inner edge must not run backwards");
        assert_eq!(top[2].x, 100.0, "inner corners clamp to the center line");
        assert_eq!(top[3].x, 100.0);

        let right = arc_centers(&shapes[1]);
        let left = arc_centers(&shapes[3]);
        for inner in right[2..].iter().chain(&left[2..]) {
            assert_eq!(inner.x, 100.0, "left and right regions meet at the center");
        }

        let mut sides = BorderSides::uniform(side(2.0, BorderStyle::Solid));
        sides.top.width = 40.0;
        sides.bottom.width = 40.0;
        let shapes = border_shapes(SIZE, &sides, None);
        let left = arc_centers(&shapes[3]);
        // Left runs from its bottom corner to its top corner
        assert!(left[2].y <= left[3].y, "left inner edge must not run backwards");
        assert_eq!(left[2].y, 50.0);
        assert_eq!(left[3].y, 50.0);
    }

    #[test]
    fn test_double_side_has_two_bands() {
        let mut sides = BorderSides::uniform(side(6.0, BorderStyle::Double));
        sides.bottom.color = Color::BLACK;
        let shapes = border_shapes(SIZE, &sides, None);
        assert_eq!(shapes.len(), 4);
        assert_eq!(shapes[0].path.subpath_count(), 2);
    }

    #[test]
    fn test_ridge_shades_halves() {
        let sides = BorderSides::uniform(side(4.0, BorderStyle::Ridge));
        let shapes = border_shapes(SIZE, &sides, None);
        assert_eq!(shapes.len(), 8);
        let light = red().lighten(SHADE_AMOUNT);
        let dark = red().darken(SHADE_AMOUNT);
        // Top: outer half first
        assert_eq!(solid_color(&shapes[0]), light);
        assert_eq!(solid_color(&shapes[1]), dark);
        // Right: the opposite
        assert_eq!(solid_color(&shapes[2]), dark);
        assert_eq!(solid_color(&shapes[3]), light);
    }

    #[test]
    fn test_groove_is_inverse_of_ridge() {
        for edge in Edge::ALL {
            for outer in [true, false] {
                assert_ne!(
                    shade(red(), BorderStyle::Groove, edge, outer),
                    shade(red(), BorderStyle::Ridge, edge, outer)
                );
            }
        }
        assert_eq!(
            shade(red(), BorderStyle::Outset, Edge::Left, true),
            red().lighten(SHADE_AMOUNT)
        );
        assert_eq!(
            shade(red(), BorderStyle::Inset, Edge::Left, true),
            red().darken(SHADE_AMOUNT)
        );
    }

    #[test]
    fn test_dashed_side_carries_cutouts() {
        let sides = BorderSides::uniform(side(4.0, BorderStyle::Dashed));
        let shapes = border_shapes(Size::new(50.0, 50.0), &sides, None);
        assert_eq!(shapes.len(), 4);
        // The straight run is 4..46: dash 12, first gap at 4 + (42 - 12) / 2 % 12 = 7
        let top = &shapes[0].path;
        assert_eq!(top.subpath_count(), 1 + 2);
        assert!(top.to_string().contains("m14,0 l14,8 l38,8 l38,0 x"));
    }

    #[test]
    fn test_transparent_and_empty_borders() {
        let clear = BorderSide::new(2.0, BorderStyle::Solid, Color::TRANSPARENT);
        let sides = BorderSides::uniform(clear);
        assert!(border_shapes(SIZE, &sides, None).is_empty());
        let sides = BorderSides::uniform(side(2.0, BorderStyle::Solid));
        assert!(border_shapes(Size::ZERO, &sides, None).is_empty());
    }
}
