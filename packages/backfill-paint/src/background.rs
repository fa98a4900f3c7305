use backfill_traits::style::{Background, CornerRadii};
use kurbo::{Insets, Size};

use crate::BORDER_SCALE;
use crate::box_path::box_path;
use crate::fill::Fill;
use crate::gradient::linear_gradient_fill;
use crate::shape::PathResult;

/// Shapes for the background color and its gradient layers, bottom-most first.
///
/// Every layer fills the element's outer contour. Gradient layers paint in reverse declaration
/// order so the first declared one ends up on top.
pub fn background_shapes(
    size: Size,
    background: &Background,
    radii: Option<&CornerRadii>,
    font_size: f64,
) -> Vec<PathResult> {
    let mut shapes = Vec::new();
    if !background.is_active() || size.width <= 0.0 || size.height <= 0.0 {
        return shapes;
    }

    let contour = box_path(size, Insets::ZERO, radii, BORDER_SCALE);

    if let Some(color) = background.color.filter(|color| !color.is_transparent()) {
        shapes.push(PathResult::new(
            contour.clone(),
            Fill::Solid(color),
            BORDER_SCALE,
        ));
    }

    for gradient in background.gradients.iter().rev() {
        let Some(fill) = linear_gradient_fill(size, gradient, font_size) else {
            continue;
        };
        shapes.push(PathResult::new(
            contour.clone(),
            Fill::LinearGradient(fill),
            BORDER_SCALE,
        ));
    }

    shapes
}
