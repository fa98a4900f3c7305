//! Gap cutouts for `dashed` and `dotted` borders.
//!
//! A dashed side is painted as a solid region with rectangles removed where the gaps are.
//! Dashes and gaps have the same length, and the pattern is centered on the side so both ends
//! look the same.

use backfill_traits::style::BorderStyle;
use kurbo::Rect;

use crate::path::Path;

/// Dash (and gap) length for `style` on a side `width` pixels thick, or `None` for styles
/// without gaps.
pub fn dash_length(style: BorderStyle, width: f64) -> Option<f64> {
    match style {
        BorderStyle::Dashed => Some(width * 3.0),
        BorderStyle::Dotted => Some(width),
        _ => None,
    }
}

/// Gap rectangles along one side.
///
/// The side runs from `start` to `end` along the x axis (or the y axis when `vertical`), is
/// `width` thick, and its outer edge sits at `shift` on the other axis.
pub fn dash_cutouts(
    start: f64,
    end: f64,
    width: f64,
    shift: f64,
    vertical: bool,
    style: BorderStyle,
) -> Vec<Rect> {
    let Some(dash) = dash_length(style, width) else {
        return Vec::new();
    };
    let span = end - start;
    if dash <= 0.0 || dash > span {
        return Vec::new();
    }

    let mut cutouts = Vec::new();
    let mut pos = start + ((span - dash) / 2.0) % dash;
    while pos < end {
        let gap_end = (pos + dash).min(end);
        cutouts.push(if vertical {
            Rect::new(shift, pos, shift + width, gap_end)
        } else {
            Rect::new(pos, shift, gap_end, shift + width)
        });
        pos += dash * 2.0;
    }
    cutouts
}

/// Append each cutout as a closed counterclockwise rectangle, multiplied by `scale`.
///
/// Side regions wind clockwise, so the cutouts remove material under either fill rule.
pub fn append_cutouts(path: &mut Path, cutouts: &[Rect], scale: f64) {
    for cutout in cutouts {
        let rect = cutout.scale_from_origin(scale);
        path.move_to((rect.x0, rect.y0));
        path.line_to((rect.x0, rect.y1));
        path.line_to((rect.x1, rect.y1));
        path.line_to((rect.x1, rect.y0));
        path.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_gaps_are_centered() {
        let cutouts = dash_cutouts(0.0, 50.0, 4.0, 0.0, false, BorderStyle::Dashed);
        assert_eq!(
            cutouts,
            vec![
                Rect::new(7.0, 0.0, 19.0, 4.0),
                Rect::new(31.0, 0.0, 43.0, 4.0),
            ]
        );
    }

    #[test]
    fn test_dotted_on_vertical_side() {
        let cutouts = dash_cutouts(10.0, 20.0, 2.0, 98.0, true, BorderStyle::Dotted);
        // (10 - 2) / 2 % 2 = 0: gaps at 10, 14, 18
        assert_eq!(
            cutouts,
            vec![
                Rect::new(98.0, 10.0, 100.0, 12.0),
                Rect::new(98.0, 14.0, 100.0, 16.0),
                Rect::new(98.0, 18.0, 100.0, 20.0),
            ]
        );
    }

    #[test]
    fn test_short_side_is_solid() {
        assert!(dash_cutouts(0.0, 11.0, 4.0, 0.0, false, BorderStyle::Dashed).is_empty());
        assert!(dash_cutouts(0.0, 50.0, 4.0, 0.0, false, BorderStyle::Solid).is_empty());
        assert!(dash_cutouts(0.0, 50.0, 0.0, 0.0, false, BorderStyle::Dotted).is_empty());
    }

    #[test]
    fn test_cutouts_never_pass_end() {
        for span in [12.0, 13.0, 25.0, 37.5, 50.0, 61.0, 100.0] {
            let cutouts = dash_cutouts(5.0, 5.0 + span, 4.0, 0.0, false, BorderStyle::Dashed);
            let first = 5.0 + ((span - 12.0) / 2.0) % 12.0;
            let expected = ((5.0 + span - first) / 24.0_f64).ceil() as usize;
            assert_eq!(cutouts.len(), expected, "gap count for span {span}");
            for cutout in &cutouts {
                assert!(cutout.x1 <= 5.0 + span, "cutout {cutout:?} ends past the side");
                assert!(cutout.x0 < cutout.x1);
            }
        }
    }

    #[test]
    fn test_cutout_winding() {
        let mut path = Path::new();
        append_cutouts(&mut path, &[Rect::new(1.0, 2.0, 3.0, 4.0)], 2.0);
        assert_eq!(path.to_string(), "m2,4 l2,8 l6,8 l6,4 x e");
    }
}
