//! Paint CSS3 decorations as plain vector shapes.
//!
//! Given an element's [`ElementStyle`](backfill_traits::style::ElementStyle) and bounds, this
//! crate produces the shapes (path plus fill) a host without native support for rounded
//! corners, complex border styles, box shadows, linear gradients or border images needs to
//! render them. Shapes are in element-local coordinates; the host positions them.

mod background;
mod border;
mod border_image;
mod box_path;
mod box_shadow;
mod dash;
mod fill;
mod gradient;
mod path;
mod render;
mod shape;

pub use background::background_shapes;
pub use border::border_shapes;
pub use border_image::{BorderImagePiece, border_image_pieces, border_image_shapes};
pub use box_path::{box_path, box_path_coords, path_from_coords};
pub use box_shadow::box_shadow_shapes;
pub use dash::{append_cutouts, dash_cutouts, dash_length};
pub use fill::{BackendStop, Fill, FocusGradientFill, LinearGradientFill};
pub use gradient::{
    GradientMetrics, css_to_line_angle, linear_gradient_fill, perpendicular_intersect,
    stop_positions,
};
pub use path::{Path, PathCommand};
pub use render::ElementPainter;
pub use shape::{PathResult, ShapeScene};

/// Backend units per pixel for border, background and shadow shapes.
///
/// Half-pixel border widths are common; doubling keeps them on whole backend units.
pub const BORDER_SCALE: u32 = 2;

/// How far `groove`, `ridge`, `inset` and `outset` borders move their color towards white or
/// black.
pub const SHADE_AMOUNT: f32 = 0.5;
