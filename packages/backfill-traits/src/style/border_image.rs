use kurbo::Size;

/// A `border-image-slice` value: a number of image pixels, or a percentage of the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliceValue {
    Number(f64),
    Percent(f64),
}

impl SliceValue {
    pub fn to_px(self, image_extent: f64) -> f64 {
        match self {
            SliceValue::Number(n) => n.max(0.0),
            SliceValue::Percent(p) => (image_extent * p / 100.0).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderImageSlice {
    pub top: SliceValue,
    pub right: SliceValue,
    pub bottom: SliceValue,
    pub left: SliceValue,
    /// The `fill` keyword: keep the middle of the image.
    pub fill: bool,
}

impl BorderImageSlice {
    pub fn uniform(value: SliceValue) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
            fill: false,
        }
    }
}

/// A `border-image` whose source has already been loaded by the host. Only the `stretch`
/// repeat mode is reproduced.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderImage {
    pub source: String,
    /// Intrinsic size of the loaded image.
    pub image_size: Size,
    pub slice: BorderImageSlice,
}
