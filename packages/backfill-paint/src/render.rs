use backfill_traits::style::{CornerRadii, ElementStyle};
use backfill_traits::{BoundsInfo, BoundsSource};
use kurbo::Size;

use crate::background::background_shapes;
use crate::border::border_shapes;
use crate::border_image::border_image_shapes;
use crate::box_shadow::box_shadow_shapes;
use crate::shape::{PathResult, ShapeScene};

/// Paints the decorations of one element.
///
/// Every entry point takes the element's bounds lock for its own duration, so a draw sees one
/// consistent size even when layout is queried again in between. [`ElementPainter::paint_scene`]
/// holds the lock across all of them.
pub struct ElementPainter<'a, S: BoundsSource> {
    bounds: &'a BoundsInfo<S>,
    style: &'a ElementStyle,
}

impl<'a, S: BoundsSource> ElementPainter<'a, S> {
    pub fn new(bounds: &'a BoundsInfo<S>, style: &'a ElementStyle) -> Self {
        Self { bounds, style }
    }

    /// All shapes of the element, bottom-most first.
    pub fn paint(&self) -> Vec<PathResult> {
        let mut scene = Vec::new();
        self.paint_scene(&mut scene);
        scene
    }

    /// Draw the element into `scene`: box shadows, background, border, then border image.
    pub fn paint_scene(&self, scene: &mut impl ShapeScene) {
        scene.reset();
        let _lock = self.bounds.lock();

        for shape in self
            .box_shadows()
            .into_iter()
            .chain(self.background())
            .chain(self.border())
            .chain(self.border_image())
        {
            scene.push_shape(shape);
        }
    }

    pub fn box_shadows(&self) -> Vec<PathResult> {
        let _lock = self.bounds.lock();
        let cx = self.element_cx();
        box_shadow_shapes(
            cx.size,
            &self.style.box_shadows,
            cx.radii.as_ref(),
            self.style.font_size,
        )
    }

    pub fn background(&self) -> Vec<PathResult> {
        let _lock = self.bounds.lock();
        let cx = self.element_cx();
        background_shapes(
            cx.size,
            &self.style.background,
            cx.radii.as_ref(),
            self.style.font_size,
        )
    }

    /// The regular border. Empty while a border image replaces it.
    pub fn border(&self) -> Vec<PathResult> {
        if self.border_image_active() {
            return Vec::new();
        }
        let _lock = self.bounds.lock();
        let cx = self.element_cx();
        border_shapes(cx.size, &self.style.border, cx.radii.as_ref())
    }

    pub fn border_image(&self) -> Vec<PathResult> {
        let Some(image) = &self.style.border_image else {
            return Vec::new();
        };
        let _lock = self.bounds.lock();
        let cx = self.element_cx();
        border_image_shapes(cx.size, self.style.border.widths(), image)
    }

    fn border_image_active(&self) -> bool {
        self.style
            .border_image
            .as_ref()
            .is_some_and(|image| image.image_size.width > 0.0 && image.image_size.height > 0.0)
    }

    fn element_cx(&self) -> ElementCx {
        let size = self.bounds.bounds().size();
        let radii = self
            .style
            .radii
            .as_ref()
            .map(|radii| self.bounds.corner_radii(radii, self.style.font_size))
            .filter(|radii| !radii.is_zero());
        ElementCx { size, radii }
    }
}

/// What the painters need to know about the element for one draw.
struct ElementCx {
    size: Size,
    radii: Option<CornerRadii>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use backfill_traits::style::{
        Background, BorderImage, BorderImageSlice, BorderRadii, BorderSide, BorderSides,
        BorderStyle, BoxShadow, SliceValue,
    };
    use backfill_traits::{Bounds, Color, Length};

    use crate::fill::Fill;

    /// A layout that grows every time it is queried.
    struct Growing {
        width: Cell<f64>,
    }

    impl BoundsSource for Growing {
        fn query_bounds(&self) -> Bounds {
            let width = self.width.get();
            self.width.set(width + 10.0);
            Bounds::new(0.0, 0.0, width, 20.0)
        }
    }

    fn style() -> ElementStyle {
        ElementStyle {
            border: BorderSides::uniform(BorderSide::new(
                2.0,
                BorderStyle::Solid,
                Color::from_rgba8(255, 0, 0, 255),
            )),
            background: Background {
                color: Some(Color::from_rgba8(0, 0, 255, 255)),
                gradients: Vec::new(),
            },
            box_shadows: vec![BoxShadow::new(Length::px(2.0), Length::px(2.0), Color::BLACK)],
            ..ElementStyle::default()
        }
    }

    #[test]
    fn test_paint_order() {
        let bounds = BoundsInfo::new(Bounds::new(0.0, 0.0, 50.0, 20.0));
        let style = style();
        let shapes = ElementPainter::new(&bounds, &style).paint();
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[0].fill, Some(Fill::Solid(Color::BLACK)), "shadow first");
        assert_eq!(
            shapes[1].fill,
            Some(Fill::Solid(Color::from_rgba8(0, 0, 255, 255))),
            "background second"
        );
        assert_eq!(
            shapes[2].fill,
            Some(Fill::Solid(Color::from_rgba8(255, 0, 0, 255))),
            "border last"
        );
        assert!(!bounds.is_locked());
    }

    #[test]
    fn test_one_snapshot_per_paint() {
        let bounds = BoundsInfo::new(Growing {
            width: Cell::new(50.0),
        });
        let style = style();
        let shapes = ElementPainter::new(&bounds, &style).paint();
        // Every shape was built against the same 50px width
        let right_edges: Vec<String> = shapes
            .iter()
            .skip(1)
            .map(|shape| shape.path.to_string())
            .collect();
        assert!(right_edges.iter().all(|path| path.contains("l100,0")));
        assert_eq!(bounds.source().width.get(), 60.0, "layout queried once");
    }

    #[test]
    fn test_radii_resolved_against_bounds() {
        let bounds = BoundsInfo::new(Bounds::new(0.0, 0.0, 40.0, 20.0));
        let style = ElementStyle {
            radii: Some(BorderRadii::uniform(Length::percent(50.0))),
            ..style()
        };
        let painter = ElementPainter::new(&bounds, &style);
        let background = painter.background();
        // 50% of 40x20 is 20x10: an ellipse filling the whole box
        assert!(background[0].path.to_string().starts_with("m0,20 qy40,0"));
    }

    #[test]
    fn test_border_image_replaces_border() {
        let bounds = BoundsInfo::new(Bounds::new(0.0, 0.0, 50.0, 20.0));
        let style = ElementStyle {
            border_image: Some(BorderImage {
                source: "frame.png".to_string(),
                image_size: Size::new(30.0, 30.0),
                slice: BorderImageSlice::uniform(SliceValue::Number(10.0)),
            }),
            ..style()
        };
        let painter = ElementPainter::new(&bounds, &style);
        assert!(painter.border().is_empty());
        let shapes = painter.paint();
        assert_eq!(shapes.len(), 2 + 8);
        assert!(matches!(shapes[2].fill, Some(Fill::Image { .. })));
    }

    #[test]
    fn test_empty_style_paints_nothing() {
        let bounds = BoundsInfo::new(Bounds::new(0.0, 0.0, 50.0, 20.0));
        let style = ElementStyle::default();
        let mut scene = vec![];
        ElementPainter::new(&bounds, &style).paint_scene(&mut scene);
        assert!(scene.is_empty());
    }
}
