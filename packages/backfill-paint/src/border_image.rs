//! Nine-piece `border-image` geometry with the `stretch` repeat mode.

use backfill_traits::style::BorderImage;
use kurbo::{Insets, Rect, Size};
use smallvec::SmallVec;

use crate::BORDER_SCALE;
use crate::fill::Fill;
use crate::path::Path;
use crate::shape::PathResult;

/// One stretched slice of the border image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderImagePiece {
    /// Where the slice is drawn, in element pixels.
    pub dest: Rect,
    /// Fraction of the image cut away on each side to get the slice.
    pub crop: Insets,
}

/// The pieces of `image` drawn over a `size` box whose border widths are `widths`, row by row
/// from the top left. Pieces with nothing to draw are left out, and the middle piece is only
/// present with the `fill` keyword.
pub fn border_image_pieces(
    size: Size,
    widths: Insets,
    image: &BorderImage,
) -> SmallVec<[BorderImagePiece; 9]> {
    let mut pieces = SmallVec::new();
    let Size {
        width: image_w,
        height: image_h,
    } = image.image_size;
    if image_w <= 0.0 || image_h <= 0.0 {
        return pieces;
    }

    let slice = &image.slice;
    let top = slice.top.to_px(image_h).min(image_h);
    let bottom = slice.bottom.to_px(image_h).min(image_h - top);
    let left = slice.left.to_px(image_w).min(image_w);
    let right = slice.right.to_px(image_w).min(image_w - left);

    let src_x = [0.0, left, image_w - right, image_w];
    let src_y = [0.0, top, image_h - bottom, image_h];
    let dest_x = [0.0, widths.x0, size.width - widths.x1, size.width];
    let dest_y = [0.0, widths.y0, size.height - widths.y1, size.height];

    for row in 0..3 {
        for col in 0..3 {
            if row == 1 && col == 1 && !slice.fill {
                continue;
            }
            let dest = Rect::new(dest_x[col], dest_y[row], dest_x[col + 1], dest_y[row + 1]);
            let src_w = src_x[col + 1] - src_x[col];
            let src_h = src_y[row + 1] - src_y[row];
            if dest.width() <= 0.0 || dest.height() <= 0.0 || src_w <= 0.0 || src_h <= 0.0 {
                continue;
            }
            pieces.push(BorderImagePiece {
                dest,
                crop: Insets {
                    x0: src_x[col] / image_w,
                    y0: src_y[row] / image_h,
                    x1: (image_w - src_x[col + 1]) / image_w,
                    y1: (image_h - src_y[row + 1]) / image_h,
                },
            });
        }
    }
    pieces
}

/// One image-filled rectangle per border image piece.
pub fn border_image_shapes(size: Size, widths: Insets, image: &BorderImage) -> Vec<PathResult> {
    let scale = BORDER_SCALE as f64;
    border_image_pieces(size, widths, image)
        .into_iter()
        .map(|piece| {
            let rect = piece.dest.scale_from_origin(scale);
            let mut path = Path::new();
            path.move_to((rect.x0, rect.y0));
            path.line_to((rect.x1, rect.y0));
            path.line_to((rect.x1, rect.y1));
            path.line_to((rect.x0, rect.y1));
            path.close();
            let fill = Fill::Image {
                source: image.source.clone(),
                crop: piece.crop,
            };
            PathResult::new(path, fill, BORDER_SCALE)
        })
        .collect()
}
