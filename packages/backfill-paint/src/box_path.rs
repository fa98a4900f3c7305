//! The rounded-rectangle contour every painter builds on.
//!
//! The contour is described by 16 coordinates, two vertices per corner, visited clockwise
//! starting at the lower vertex of the top-left corner:
//!
//! ```text
//!   [2,3] ----------- [4,5]
//!  /                       \
//! [0,1]                   [6,7]
//!  |                         |
//! [14,15]                 [8,9]
//!  \                       /
//!   [12,13] -------- [10,11]
//! ```
//!
//! Coordinates are multiplied by an integer scale and snapped outward on the left/top side of
//! each arc (floor) and on the right/bottom side (ceil), so adjoining shapes built from the same
//! inputs never leave a seam.

use backfill_traits::style::CornerRadii;
use kurbo::{Insets, Size};

use crate::path::Path;

/// How far a contour inset by `shrink` reaches into a corner with radius `radius` along one
/// axis. Square corners are reached exactly at the inset.
fn reach(radius: f64, shrink: f64) -> f64 {
    if radius > 0.0 {
        radius.max(shrink)
    } else {
        shrink
    }
}

/// Keep opposing insets from crossing over each other.
pub(crate) fn clamp_shrink(size: Size, mut shrink: Insets) -> Insets {
    if shrink.x0 + shrink.x1 > size.width {
        let half = size.width / 2.0;
        shrink.x0 = shrink.x0.min(half);
        shrink.x1 = shrink.x1.min(half);
    }
    if shrink.y0 + shrink.y1 > size.height {
        let half = size.height / 2.0;
        shrink.y0 = shrink.y0.min(half);
        shrink.y1 = shrink.y1.min(half);
    }
    shrink
}

/// The 16 contour coordinates of a `size` box inset by `shrink` with corners rounded by
/// `radii`, in units of `1 / scale` pixels.
pub fn box_path_coords(
    size: Size,
    shrink: Insets,
    radii: Option<&CornerRadii>,
    scale: u32,
) -> [f64; 16] {
    let mult = scale.max(1) as f64;
    let w = size.width * mult;
    let h = size.height * mult;
    let shrink = clamp_shrink(size, shrink);
    let (l, t, r, b) = (
        shrink.x0 * mult,
        shrink.y0 * mult,
        shrink.x1 * mult,
        shrink.y1 * mult,
    );

    let radii = radii
        .map(|radii| radii.clamped(size.width, size.height))
        .filter(|radii| !radii.is_zero());

    let Some(radii) = radii else {
        let (x0, y0, x1, y1) = (l.floor(), t.floor(), (w - r).ceil(), (h - b).ceil());
        return [x0, y0, x0, y0, x1, y0, x1, y0, x1, y1, x1, y1, x0, y1, x0, y1];
    };

    let tl = radii.top_left * mult;
    let tr = radii.top_right * mult;
    let br = radii.bottom_right * mult;
    let bl = radii.bottom_left * mult;

    let mut coords = [
        l.floor(),
        reach(tl.y, t).floor(),
        reach(tl.x, l).floor(),
        t.floor(),
        (w - reach(tr.x, r)).ceil(),
        t.floor(),
        (w - r).ceil(),
        reach(tr.y, t).floor(),
        (w - r).ceil(),
        (h - reach(br.y, b)).ceil(),
        (w - reach(br.x, r)).ceil(),
        (h - b).ceil(),
        reach(bl.x, l).floor(),
        (h - b).ceil(),
        l.floor(),
        (h - reach(bl.y, b)).ceil(),
    ];

    // An inset deeper than a neighbouring radius can push the two vertices of one edge past
    // each other. Collapse the edge instead.
    coords[4] = coords[4].max(coords[2]);
    coords[9] = coords[9].max(coords[7]);
    coords[10] = coords[10].max(coords[12]);
    coords[15] = coords[15].max(coords[1]);
    coords
}

/// Emit the contour for `coords` as a closed sub-path.
pub fn path_from_coords(coords: &[f64; 16]) -> Path {
    let mut path = Path::new();
    path.move_to((coords[0], coords[1]));
    path.quadrant_y((coords[2], coords[3]));
    path.line_to((coords[4], coords[5]));
    path.quadrant_x((coords[6], coords[7]));
    path.line_to((coords[8], coords[9]));
    path.quadrant_y((coords[10], coords[11]));
    path.line_to((coords[12], coords[13]));
    path.quadrant_x((coords[14], coords[15]));
    path.close();
    path
}

/// The closed rounded-rectangle contour of a `size` box inset by `shrink`.
pub fn box_path(size: Size, shrink: Insets, radii: Option<&CornerRadii>, scale: u32) -> Path {
    path_from_coords(&box_path_coords(size, shrink, radii, scale))
}
