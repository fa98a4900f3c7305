//! The per-element style model: already-parsed CSS values grouped the way the painters
//! consume them.

mod background;
mod border;
mod border_image;
mod gradient;
mod radii;
mod shadow;

pub use background::Background;
pub use border::{BorderSide, BorderSides, BorderStyle, Corner, Edge};
pub use border_image::{BorderImage, BorderImageSlice, SliceValue};
pub use gradient::{ColorStop, GradientDirection, GradientSpec};
pub use radii::{BorderRadii, CornerRadii, CornerRadius};
pub use shadow::BoxShadow;

/// Everything the painters need to know about one element's decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStyle {
    /// Computed font size in pixels, used to resolve `em`/`ex` lengths.
    pub font_size: f64,
    pub border: BorderSides,
    /// `None` when no `border-radius` is set.
    pub radii: Option<BorderRadii>,
    pub background: Background,
    /// In declaration order (first is top-most).
    pub box_shadows: Vec<BoxShadow>,
    pub border_image: Option<BorderImage>,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            border: BorderSides::default(),
            radii: None,
            background: Background::default(),
            box_shadows: Vec::new(),
            border_image: None,
        }
    }
}
