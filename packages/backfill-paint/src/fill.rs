//! Fill descriptors attached to the shapes the painters produce.

use backfill_traits::Color;
use color::DynamicColor;
use kurbo::{Insets, Point, Vec2};
use peniko::{Brush, Gradient};
use smallvec::SmallVec;

/// One color stop on the backend's corner-to-corner gradient line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackendStop {
    /// Position along the backend line, in percent. May fall outside `0..=100` when the CSS
    /// line starts or ends inside the box.
    pub percent: f64,
    /// Position along the CSS gradient line as a fraction of its length.
    pub fraction: f64,
    pub color: Color,
}

/// A linear gradient ready for a backend that only knows box-relative gradients.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradientFill {
    /// Backend angle in degrees, already corrected for the box's aspect ratio.
    pub angle: f64,
    pub color: Color,
    pub color2: Color,
    /// Alpha of the first stop. Interior stop alphas cannot be expressed.
    pub opacity: f32,
    /// Alpha of the last stop.
    pub opacity2: f32,
    pub stops: SmallVec<[BackendStop; 4]>,
    /// Start of the CSS gradient line in element pixels.
    pub start: Point,
    /// End of the CSS gradient line in element pixels.
    pub end: Point,
}

impl LinearGradientFill {
    /// The gradient along its CSS line, for hosts with a real gradient primitive.
    pub fn to_peniko_gradient(&self) -> Gradient {
        let stops: SmallVec<[peniko::ColorStop; 4]> = self
            .stops
            .iter()
            .map(|stop| peniko::ColorStop {
                offset: stop.fraction.clamp(0.0, 1.0) as f32,
                color: DynamicColor::from_alpha_color(stop.color.to_alpha_color()),
            })
            .collect();
        Gradient::new_linear(self.start, self.end).with_stops(stops.as_slice())
    }

    /// The `colors` attribute: `"<percent>% <hex>"` pairs, comma separated.
    pub fn colors_attribute(&self) -> String {
        self.stops
            .iter()
            .map(|stop| format!("{}% {}", format_number(stop.percent), stop.color.opaque_hex()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// A gradient that ramps from transparent at the shape's edge to a solid inner rectangle,
/// used to approximate blur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusGradientFill {
    pub color: Color,
    /// Top-left of the focus rectangle as fractions of the shape's box.
    pub focus_position: Vec2,
    /// Size of the focus rectangle as fractions of the shape's box.
    pub focus_size: Vec2,
    /// Alpha at the shape's edge.
    pub opacity: f32,
    /// Alpha inside the focus rectangle.
    pub opacity2: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    LinearGradient(LinearGradientFill),
    Focus(FocusGradientFill),
    /// An image stretched over the shape's box after cutting away `crop` (fractions of the
    /// image size) on each side.
    Image { source: String, crop: Insets },
}

impl Fill {
    /// Attributes for the backend's fill element, in a stable order.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            Fill::Solid(color) => vec![
                ("type", "solid".to_string()),
                ("color", color.opaque_hex()),
                ("opacity", format_number(color.alpha() as f64)),
            ],
            Fill::LinearGradient(gradient) => vec![
                ("type", "gradient".to_string()),
                ("method", "sigma".to_string()),
                ("angle", format_number(gradient.angle)),
                ("color", gradient.color.opaque_hex()),
                ("color2", gradient.color2.opaque_hex()),
                ("colors", gradient.colors_attribute()),
                ("opacity", format_number(gradient.opacity as f64)),
                ("opacity2", format_number(gradient.opacity2 as f64)),
            ],
            Fill::Focus(focus) => vec![
                ("type", "gradienttitle".to_string()),
                ("color", focus.color.opaque_hex()),
                ("color2", focus.color.opaque_hex()),
                ("focus", "100%".to_string()),
                (
                    "focusposition",
                    format!(
                        "{},{}",
                        format_number(focus.focus_position.x),
                        format_number(focus.focus_position.y)
                    ),
                ),
                (
                    "focussize",
                    format!(
                        "{},{}",
                        format_number(focus.focus_size.x),
                        format_number(focus.focus_size.y)
                    ),
                ),
                ("opacity", format_number(focus.opacity as f64)),
                ("opacity2", format_number(focus.opacity2 as f64)),
            ],
            Fill::Image { source, crop } => vec![
                ("type", "frame".to_string()),
                ("src", source.clone()),
                ("cropleft", format_number(crop.x0)),
                ("croptop", format_number(crop.y0)),
                ("cropright", format_number(crop.x1)),
                ("cropbottom", format_number(crop.y1)),
            ],
        }
    }

    /// A `peniko` brush for this fill. Focus gradients and images have no brush equivalent.
    pub fn to_brush(&self) -> Option<Brush> {
        match self {
            Fill::Solid(color) => Some(Brush::Solid(color.to_alpha_color())),
            Fill::LinearGradient(gradient) => Some(Brush::Gradient(gradient.to_peniko_gradient())),
            Fill::Focus(_) | Fill::Image { .. } => None,
        }
    }
}

/// Format with at most four decimals and no trailing zeros.
fn format_number(value: f64) -> String {
    let rounded = (value * 10000.0).round() / 10000.0;
    // Avoid printing "-0"
    format!("{}", rounded + 0.0)
}
