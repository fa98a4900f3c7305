use std::cell::{Cell, RefCell};

use kurbo::{Rect, Size};

use crate::style::{BorderRadii, CornerRadii};

/// An element's box in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }
}

/// The host's layout query for one element.
pub trait BoundsSource {
    /// The element's current box. May change between calls while layout is in flux.
    fn query_bounds(&self) -> Bounds;
}

impl BoundsSource for Bounds {
    fn query_bounds(&self) -> Bounds {
        *self
    }
}

/// Bounds of one element, with a reentrant lock that freezes them for a multi-step draw.
///
/// While at least one [`BoundsLock`] is alive every call to [`BoundsInfo::bounds`] returns the
/// snapshot taken when the first lock was acquired. Resolved corner radii are cached for the
/// same span. Once the last lock drops, queries go back to the live source.
pub struct BoundsInfo<S> {
    source: S,
    lock_count: Cell<u32>,
    locked: Cell<Option<Bounds>>,
    last: Cell<Option<Bounds>>,
    radii_cache: RefCell<Option<(BorderRadii, f64, CornerRadii)>>,
}

impl<S: BoundsSource> BoundsInfo<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            lock_count: Cell::new(0),
            locked: Cell::new(None),
            last: Cell::new(None),
            radii_cache: RefCell::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The current bounds: the locked snapshot if locked, otherwise a live query.
    pub fn bounds(&self) -> Bounds {
        match self.locked.get() {
            Some(bounds) => bounds,
            None => self.source.query_bounds(),
        }
    }

    /// Freeze the bounds until the returned guard (and every other guard) is dropped.
    pub fn lock(&self) -> BoundsLock<'_, S> {
        let count = self.lock_count.get();
        if count == 0 {
            self.locked.set(Some(self.source.query_bounds()));
        }
        self.lock_count.set(count + 1);
        BoundsLock { info: self }
    }

    pub fn is_locked(&self) -> bool {
        self.lock_count.get() > 0
    }

    fn unlock(&self) {
        let count = self.lock_count.get().saturating_sub(1);
        self.lock_count.set(count);
        if count == 0 {
            self.locked.set(None);
            self.radii_cache.borrow_mut().take();
        }
    }

    /// Resolve `radii` against the current size. While locked, the result is cached for as
    /// long as the same radii and font size are asked for.
    pub fn corner_radii(&self, radii: &BorderRadii, font_size: f64) -> CornerRadii {
        if self.is_locked() {
            if let Some((cached_radii, cached_font_size, resolved)) = &*self.radii_cache.borrow() {
                if cached_radii == radii && *cached_font_size == font_size {
                    return *resolved;
                }
            }
        }

        let bounds = self.bounds();
        let resolved = radii.resolve(bounds.w, bounds.h, font_size);
        if self.is_locked() {
            *self.radii_cache.borrow_mut() = Some((*radii, font_size, resolved));
        }
        resolved
    }

    /// Whether the size differs from the one recorded by the last [`BoundsInfo::commit`].
    /// Never committed counts as changed.
    pub fn size_changed(&self) -> bool {
        let current = self.bounds();
        self.last
            .get()
            .is_none_or(|last| last.w != current.w || last.h != current.h)
    }

    /// Whether the position differs from the one recorded by the last [`BoundsInfo::commit`].
    pub fn position_changed(&self) -> bool {
        let current = self.bounds();
        self.last
            .get()
            .is_none_or(|last| last.x != current.x || last.y != current.y)
    }

    /// Record the current bounds as the baseline for change detection.
    pub fn commit(&self) {
        self.last.set(Some(self.bounds()));
    }
}

/// Guard returned by [`BoundsInfo::lock`]. Releases one level of the lock on drop.
#[must_use = "the bounds are unlocked as soon as the guard is dropped"]
pub struct BoundsLock<'a, S: BoundsSource> {
    info: &'a BoundsInfo<S>,
}

impl<S: BoundsSource> BoundsLock<'_, S> {
    pub fn bounds(&self) -> Bounds {
        self.info.bounds()
    }
}

impl<S: BoundsSource> Drop for BoundsLock<'_, S> {
    fn drop(&mut self) {
        self.info.unlock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Length;

    /// A layout source whose answer can change between queries.
    struct Live {
        bounds: Cell<Bounds>,
        queries: Cell<usize>,
    }

    impl Live {
        fn new(bounds: Bounds) -> Self {
            Self {
                bounds: Cell::new(bounds),
                queries: Cell::new(0),
            }
        }
    }

    impl BoundsSource for Live {
        fn query_bounds(&self) -> Bounds {
            self.queries.set(self.queries.get() + 1);
            self.bounds.get()
        }
    }

    #[test]
    fn test_unlocked_queries_are_live() {
        let info = BoundsInfo::new(Live::new(Bounds::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(info.bounds().w, 10.0);
        info.source().bounds.set(Bounds::new(0.0, 0.0, 20.0, 10.0));
        assert_eq!(info.bounds().w, 20.0);
        assert_eq!(info.source().queries.get(), 2);
    }

    #[test]
    fn test_lock_freezes_snapshot() {
        let info = BoundsInfo::new(Live::new(Bounds::new(0.0, 0.0, 10.0, 10.0)));
        let guard = info.lock();
        info.source().bounds.set(Bounds::new(5.0, 5.0, 99.0, 99.0));
        assert_eq!(info.bounds(), Bounds::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(guard.bounds(), Bounds::new(0.0, 0.0, 10.0, 10.0));
        // One query for the snapshot, none afterwards
        assert_eq!(info.source().queries.get(), 1);
        drop(guard);
        assert!(!info.is_locked());
        assert_eq!(info.bounds(), Bounds::new(5.0, 5.0, 99.0, 99.0));
    }

    #[test]
    fn test_lock_is_reentrant() {
        let info = BoundsInfo::new(Live::new(Bounds::new(0.0, 0.0, 10.0, 10.0)));
        let outer = info.lock();
        info.source().bounds.set(Bounds::new(0.0, 0.0, 30.0, 30.0));
        {
            let _inner = info.lock();
            assert_eq!(info.bounds().w, 10.0, "nested lock keeps the first snapshot");
        }
        assert!(info.is_locked(), "outer lock still held");
        assert_eq!(info.bounds().w, 10.0);
        drop(outer);
        assert_eq!(info.bounds().w, 30.0);
    }

    #[test]
    fn test_radii_cached_only_while_locked() {
        let info = BoundsInfo::new(Live::new(Bounds::new(0.0, 0.0, 100.0, 100.0)));
        let radii = BorderRadii::uniform(Length::percent(10.0));

        let guard = info.lock();
        let first = info.corner_radii(&radii, 16.0);
        assert_eq!(first, CornerRadii::uniform(10.0));
        // Mid-draw relayout must not leak into the cached result
        info.source().bounds.set(Bounds::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(info.corner_radii(&radii, 16.0), first);
        drop(guard);

        assert_eq!(info.corner_radii(&radii, 16.0), CornerRadii::uniform(20.0));
    }

    #[test]
    fn test_radii_cache_keyed_by_style() {
        let info = BoundsInfo::new(Bounds::new(0.0, 0.0, 100.0, 100.0));
        let _guard = info.lock();
        let small = BorderRadii::uniform(Length::px(5.0));
        let large = BorderRadii::uniform(Length::px(15.0));
        assert_eq!(info.corner_radii(&small, 16.0), CornerRadii::uniform(5.0));
        assert_eq!(info.corner_radii(&large, 16.0), CornerRadii::uniform(15.0));
    }

    #[test]
    fn test_change_detection() {
        let info = BoundsInfo::new(Live::new(Bounds::new(0.0, 0.0, 10.0, 10.0)));
        assert!(info.size_changed());
        info.commit();
        assert!(!info.size_changed());
        assert!(!info.position_changed());

        info.source().bounds.set(Bounds::new(3.0, 0.0, 10.0, 10.0));
        assert!(!info.size_changed());
        assert!(info.position_changed());

        info.source().bounds.set(Bounds::new(3.0, 0.0, 12.0, 10.0));
        assert!(info.size_changed());
    }
}
