//! Outset box shadows.
//!
//! A shadow is the element's contour grown by `spread + blur` and moved by the offsets. Without
//! blur it is filled flat. With blur it gets a focus gradient that is transparent at the shape's
//! edge and reaches the shadow color `2 * blur` further in, which is where the blurred edge of
//! the CSS shadow becomes opaque.

use backfill_traits::style::{BoxShadow, CornerRadii};
use kurbo::{Insets, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::BORDER_SCALE;
use crate::box_path::box_path;
use crate::fill::{Fill, FocusGradientFill};
use crate::shape::PathResult;

/// Shapes for every outset shadow in `shadows`, bottom-most first.
///
/// `shadows` is in declaration order, where the first shadow is on top.
pub fn box_shadow_shapes(
    size: Size,
    shadows: &[BoxShadow],
    radii: Option<&CornerRadii>,
    font_size: f64,
) -> Vec<PathResult> {
    shadows
        .iter()
        .rev()
        .flat_map(|shadow| {
            if shadow.inset {
                #[cfg(feature = "tracing")]
                tracing::debug!("inset box-shadow has no shape equivalent");
                return SmallVec::new();
            }
            outset_shadow_shapes(size, shadow, radii, font_size)
        })
        .collect()
}

fn outset_shadow_shapes(
    size: Size,
    shadow: &BoxShadow,
    radii: Option<&CornerRadii>,
    font_size: f64,
) -> SmallVec<[PathResult; 4]> {
    let mut shapes = SmallVec::new();
    if shadow.color.is_transparent() || size.width <= 0.0 || size.height <= 0.0 {
        return shapes;
    }

    // Shadow lengths have no percentage basis
    let offset = Vec2::new(
        shadow.offset_x.to_px(0.0, font_size),
        shadow.offset_y.to_px(0.0, font_size),
    );
    let blur = shadow.blur.to_px(0.0, font_size).max(0.0);
    let spread = shadow.spread.to_px(0.0, font_size);
    let grow = spread + blur;

    // The grown box gets its own contour so its radii are clamped against its own size
    let shadow_size = Size::new(size.width + grow * 2.0, size.height + grow * 2.0);
    if shadow_size.width <= 0.0 || shadow_size.height <= 0.0 {
        return shapes;
    }
    let radii = radii
        .map(|radii| radii.clamped(size.width, size.height).grown(grow))
        .filter(|radii| !radii.is_zero());

    let scale = BORDER_SCALE as f64;
    let origin = (offset - Vec2::new(grow, grow)) * scale;
    let path = box_path(shadow_size, Insets::ZERO, radii.as_ref(), BORDER_SCALE).translated(origin);

    if blur <= 0.0 {
        shapes.push(PathResult::new(path, Fill::Solid(shadow.color), BORDER_SCALE));
        return shapes;
    }

    let focus = Vec2::new(
        blur * 2.0 / shadow_size.width,
        blur * 2.0 / shadow_size.height,
    );
    let focus_fill = |focus_position: Vec2, focus_size: Vec2| {
        Fill::Focus(FocusGradientFill {
            color: shadow.color,
            focus_position,
            focus_size,
            opacity: 0.0,
            opacity2: shadow.color.alpha(),
        })
    };

    if blur - spread <= size.width / 2.0 && blur - spread <= size.height / 2.0 {
        let fill = focus_fill(focus, Vec2::new(1.0 - focus.x * 2.0, 1.0 - focus.y * 2.0));
        shapes.push(PathResult::new(path, fill, BORDER_SCALE));
        return shapes;
    }

    // The blur is wider than the box: a single focus rectangle would need a negative size.
    // Paint each quadrant separately with the focus reaching past the center towards the far
    // corner, clipped to the quadrant.
    let bounds = Rect::from_origin_size(origin.to_point(), shadow_size * scale);
    let center = bounds.center();
    let span = Vec2::new(1.0 - focus.x, 1.0 - focus.y);
    let quadrants = [
        (
            Rect::new(bounds.x0, bounds.y0, center.x, center.y),
            Vec2::new(focus.x, focus.y),
        ),
        (
            Rect::new(center.x, bounds.y0, bounds.x1, center.y),
            Vec2::new(0.0, focus.y),
        ),
        (
            Rect::new(center.x, center.y, bounds.x1, bounds.y1),
            Vec2::ZERO,
        ),
        (
            Rect::new(bounds.x0, center.y, center.x, bounds.y1),
            Vec2::new(focus.x, 0.0),
        ),
    ];
    for (clip, focus_position) in quadrants {
        shapes.push(
            PathResult::new(path.clone(), focus_fill(focus_position, span), BORDER_SCALE)
                .with_clip(clip),
        );
    }
    shapes
}
