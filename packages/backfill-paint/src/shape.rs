use kurbo::{Affine, BezPath, Rect};
use peniko::Brush;

use crate::fill::Fill;
use crate::path::Path;

/// One shape for the host to render: a path in backend units plus how to fill it.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub path: Path,
    pub fill: Option<Fill>,
    pub fill_rule: peniko::Fill,
    /// Backend units per element pixel.
    pub scale: u32,
    /// Only the part of the shape inside this rectangle (backend units) is visible.
    pub clip: Option<Rect>,
}

impl PathResult {
    pub fn new(path: Path, fill: Fill, scale: u32) -> Self {
        Self {
            path,
            fill: Some(fill),
            fill_rule: peniko::Fill::EvenOdd,
            scale,
            clip: None,
        }
    }

    pub fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Maps backend units to element pixels.
    pub fn transform(&self) -> Affine {
        Affine::scale(1.0 / self.scale.max(1) as f64)
    }

    /// The path in element pixels.
    pub fn to_bez_path(&self) -> BezPath {
        self.transform() * self.path.to_bez_path()
    }

    /// The clip rectangle in element pixels.
    pub fn clip_rect(&self) -> Option<Rect> {
        let factor = 1.0 / self.scale.max(1) as f64;
        self.clip.map(|clip| clip.scale_from_origin(factor))
    }

    pub fn brush(&self) -> Option<Brush> {
        self.fill.as_ref().and_then(Fill::to_brush)
    }
}

/// Receives the shapes produced for one element, bottom-most first.
pub trait ShapeScene {
    fn reset(&mut self);
    fn push_shape(&mut self, shape: PathResult);
}

impl ShapeScene for Vec<PathResult> {
    fn reset(&mut self) {
        self.clear();
    }

    fn push_shape(&mut self, shape: PathResult) {
        self.push(shape);
    }
}
