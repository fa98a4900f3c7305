//! Drawing instructions for the shape backend.
//!
//! Coordinates are in backend units: element pixels multiplied by the owning shape's scale.
//! Arc angles are in degrees measured clockwise from the +x axis (y points down), the same
//! orientation `kurbo::Arc` uses.

use std::f64::consts::PI;
use std::fmt;

use kurbo::{BezPath, PathEl, Point, Shape, Vec2};

/// Angle unit of the backend's arc commands: 1/65536 of a degree.
const BACKEND_ANGLE_UNITS: f64 = 65536.0;

/// Tolerance used when flattening arcs into bezier segments, in backend units.
const ARC_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// A quarter ellipse to the point whose first tangent runs along the x axis (`qx`).
    QuadrantX(Point),
    /// A quarter ellipse to the point whose first tangent runs along the y axis (`qy`).
    QuadrantY(Point),
    /// An elliptical arc. With `connect` a straight line joins the current point to the
    /// start of the arc (`ae`), otherwise the arc starts a new sub-path (`al`).
    Arc {
        center: Point,
        radii: Vec2,
        start_angle: f64,
        sweep_angle: f64,
        connect: bool,
    },
    Close,
}

impl PathCommand {
    fn translated(self, offset: Vec2) -> Self {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p + offset),
            PathCommand::LineTo(p) => PathCommand::LineTo(p + offset),
            PathCommand::QuadrantX(p) => PathCommand::QuadrantX(p + offset),
            PathCommand::QuadrantY(p) => PathCommand::QuadrantY(p + offset),
            PathCommand::Arc {
                center,
                radii,
                start_angle,
                sweep_angle,
                connect,
            } => PathCommand::Arc {
                center: center + offset,
                radii,
                start_angle,
                sweep_angle,
                connect,
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// An ordered list of [`PathCommand`]s, possibly holding several closed sub-paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of closed sub-paths.
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::Close))
            .count()
    }

    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::MoveTo(p.into()));
    }

    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::LineTo(p.into()));
    }

    pub fn quadrant_x(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::QuadrantX(p.into()));
    }

    pub fn quadrant_y(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::QuadrantY(p.into()));
    }

    pub fn arc(
        &mut self,
        center: Point,
        radii: Vec2,
        start_angle: f64,
        sweep_angle: f64,
        connect: bool,
    ) {
        self.commands.push(PathCommand::Arc {
            center,
            radii,
            start_angle,
            sweep_angle,
            connect,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Append every sub-path of `other`.
    pub fn append(&mut self, other: &Path) {
        self.commands.extend_from_slice(&other.commands);
    }

    pub fn translated(&self, offset: Vec2) -> Path {
        Path {
            commands: self
                .commands
                .iter()
                .map(|cmd| cmd.translated(offset))
                .collect(),
        }
    }

    /// Convert to a kurbo path in the same units.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut current_point = Point::ZERO;
        let mut subpath_start = Point::ZERO;
        let mut has_started = false;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(target) => {
                    path.move_to(target);
                    current_point = target;
                    subpath_start = target;
                    has_started = true;
                }
                PathCommand::LineTo(target) => {
                    ensure_path_started(&mut path, &mut has_started, current_point);
                    path.line_to(target);
                    current_point = target;
                }
                PathCommand::QuadrantX(target) | PathCommand::QuadrantY(target) => {
                    let x_first = matches!(cmd, PathCommand::QuadrantX(_));
                    ensure_path_started(&mut path, &mut has_started, current_point);
                    match quadrant_arc(current_point, target, x_first) {
                        Some(arc) => push_arc_segments(&mut path, &arc),
                        None => path.line_to(target),
                    }
                    current_point = target;
                }
                PathCommand::Arc {
                    center,
                    radii,
                    start_angle,
                    sweep_angle,
                    connect,
                } => {
                    let arc = kurbo::Arc::new(
                        center,
                        radii,
                        start_angle.to_radians(),
                        sweep_angle.to_radians(),
                        0.0,
                    );
                    let start = arc_point(&arc, arc.start_angle);
                    if connect && has_started {
                        path.line_to(start);
                    } else {
                        path.move_to(start);
                        subpath_start = start;
                        has_started = true;
                    }
                    push_arc_segments(&mut path, &arc);
                    current_point = arc_point(&arc, arc.start_angle + arc.sweep_angle);
                }
                PathCommand::Close => {
                    ensure_path_started(&mut path, &mut has_started, current_point);
                    path.close_path();
                    current_point = subpath_start;
                    has_started = false;
                }
            }
        }

        path
    }
}

/// The quarter ellipse a `qx`/`qy` command draws from `from` to `to`, or `None` when it
/// degenerates to a straight line.
fn quadrant_arc(from: Point, to: Point, x_first: bool) -> Option<kurbo::Arc> {
    let radii = Vec2::new((to.x - from.x).abs(), (to.y - from.y).abs());
    if radii.x == 0.0 || radii.y == 0.0 {
        return None;
    }
    let center = if x_first {
        Point::new(from.x, to.y)
    } else {
        Point::new(to.x, from.y)
    };
    let angle_of = |p: Point| ((p.y - center.y) / radii.y).atan2((p.x - center.x) / radii.x);
    let start = angle_of(from);
    let mut sweep = angle_of(to) - start;
    if sweep > PI {
        sweep -= 2.0 * PI;
    } else if sweep <= -PI {
        sweep += 2.0 * PI;
    }
    Some(kurbo::Arc::new(center, radii, start, sweep, 0.0))
}

fn arc_point(arc: &kurbo::Arc, angle: f64) -> Point {
    Point::new(
        arc.center.x + arc.radii.x * angle.cos(),
        arc.center.y + arc.radii.y * angle.sin(),
    )
}

fn push_arc_segments(path: &mut BezPath, arc: &kurbo::Arc) {
    for el in arc.to_path(ARC_TOLERANCE) {
        match el {
            PathEl::MoveTo(_) => {}
            _ => path.push(el),
        }
    }
}

fn ensure_path_started(path: &mut BezPath, has_started: &mut bool, current: Point) {
    if !*has_started {
        path.move_to(current);
        *has_started = true;
    }
}

fn backend_angle(degrees: f64) -> i64 {
    // Backend angles turn counterclockwise
    (-degrees * BACKEND_ANGLE_UNITS).round() as i64
}

fn coord(value: f64) -> i64 {
    value.round() as i64
}

/// The backend's compact path syntax, e.g. `m0,0 l10,0 l10,10 x e`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => write!(f, "m{},{} ", coord(p.x), coord(p.y))?,
                PathCommand::LineTo(p) => write!(f, "l{},{} ", coord(p.x), coord(p.y))?,
                PathCommand::QuadrantX(p) => write!(f, "qx{},{} ", coord(p.x), coord(p.y))?,
                PathCommand::QuadrantY(p) => write!(f, "qy{},{} ", coord(p.x), coord(p.y))?,
                PathCommand::Arc {
                    center,
                    radii,
                    start_angle,
                    sweep_angle,
                    connect,
                } => write!(
                    f,
                    "{}{},{},{},{},{},{} ",
                    if connect { "ae" } else { "al" },
                    coord(center.x),
                    coord(center.y),
                    coord(radii.x),
                    coord(radii.y),
                    backend_angle(start_angle),
                    backend_angle(sweep_angle),
                )?,
                PathCommand::Close => write!(f, "x ")?,
            }
        }
        write!(f, "e")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_path() -> Path {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.line_to((10.0, 10.0));
        path.line_to((0.0, 10.0));
        path.close();
        path
    }

    #[test]
    fn test_display_backend_syntax() {
        assert_eq!(rect_path().to_string(), "m0,0 l10,0 l10,10 l0,10 x e");
        assert_eq!(Path::new().to_string(), "e");
    }

    #[test]
    fn test_display_rounds_coordinates() {
        let mut path = Path::new();
        path.move_to((0.4, 1.6));
        path.quadrant_y((5.5, -0.2));
        assert_eq!(path.to_string(), "m0,2 qy6,0 e");
    }

    #[test]
    fn test_display_arc_angles_are_counterclockwise_units() {
        let mut path = Path::new();
        path.arc(Point::new(10.0, 10.0), Vec2::new(10.0, 5.0), 225.0, 45.0, false);
        path.arc(Point::new(90.0, 10.0), Vec2::new(10.0, 5.0), 270.0, 45.0, true);
        assert_eq!(
            path.to_string(),
            "al10,10,10,5,-14745600,-2949120 ae90,10,10,5,-17694720,-2949120 e"
        );
    }

    #[test]
    fn test_bez_path_bounds_match_rect() {
        let bez = rect_path().to_bez_path();
        let bbox = bez.bounding_box();
        assert_eq!(bbox, kurbo::Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_quadrant_becomes_quarter_ellipse() {
        let mut path = Path::new();
        path.move_to((0.0, 10.0));
        path.quadrant_y((10.0, 0.0));
        path.line_to((20.0, 0.0));
        path.close();
        let bez = path.to_bez_path();
        let bbox = bez.bounding_box();
        assert!((bbox.x0 - 0.0).abs() < 1e-6);
        assert!((bbox.y0 - 0.0).abs() < 1e-6);
        // The arc bulges towards the top-left corner without reaching it
        assert!(!bez.contains(Point::new(1.0, 1.0)));
        assert!(bez.contains(Point::new(9.0, 5.0)));
    }

    #[test]
    fn test_degenerate_quadrant_is_a_line() {
        assert!(quadrant_arc(Point::new(0.0, 0.0), Point::new(0.0, 10.0), true).is_none());
        let arc = quadrant_arc(Point::new(0.0, 10.0), Point::new(10.0, 0.0), false).unwrap();
        assert_eq!(arc.center, Point::new(10.0, 10.0));
        assert!((arc.sweep_angle - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_translated_moves_every_point() {
        let moved = rect_path().translated(Vec2::new(5.0, -5.0));
        assert_eq!(moved.to_string(), "m5,-5 l15,-5 l15,5 l5,5 x e");
        assert_eq!(moved.subpath_count(), 1);
    }

    #[test]
    fn test_arc_sub_path_to_bez() {
        let mut path = Path::new();
        path.arc(Point::new(0.0, 0.0), Vec2::new(10.0, 10.0), 0.0, 90.0, false);
        path.close();
        let bez = path.to_bez_path();
        let bbox = bez.bounding_box();
        assert!((bbox.x1 - 10.0).abs() < 1e-6);
        assert!((bbox.y1 - 10.0).abs() < 1e-6);
        assert!(bbox.x0.abs() < 1e-6);
    }
}
