use rustc_hash::FxHashMap;

use crate::{Angle, Color, Length};

/// A cache of parsed values keyed by their raw CSS text.
///
/// Owned by whoever parses styles; there is no global instance. Failed parses are cached
/// too, so a bad value is only parsed once.
#[derive(Debug, Clone)]
pub struct ValueCache<T> {
    entries: FxHashMap<String, Option<T>>,
}

impl<T> Default for ValueCache<T> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<T: Clone> ValueCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached value for `raw`, parsing and caching it first if needed.
    pub fn get_or_parse<E: std::fmt::Display>(
        &mut self,
        raw: &str,
        parse: impl FnOnce(&str) -> Result<T, E>,
    ) -> Option<T> {
        if let Some(entry) = self.entries.get(raw) {
            return entry.clone();
        }
        let value = match parse(raw) {
            Ok(value) => Some(value),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(raw, "ignoring unparsable style value: {_err}");
                None
            }
        };
        self.entries.insert(raw.to_string(), value.clone());
        value
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.entries.contains_key(raw)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// The caches a style parser typically keeps around.
#[derive(Debug, Clone, Default)]
pub struct StyleValueCache {
    pub lengths: ValueCache<Length>,
    pub angles: ValueCache<Angle>,
    pub colors: ValueCache<Color>,
}

impl StyleValueCache {
    pub fn length(&mut self, raw: &str) -> Option<Length> {
        self.lengths.get_or_parse(raw, Length::parse)
    }

    pub fn angle(&mut self, raw: &str) -> Option<Angle> {
        self.angles.get_or_parse(raw, Angle::parse)
    }

    pub fn color(&mut self, raw: &str) -> Option<Color> {
        self.colors.get_or_parse(raw, Color::parse)
    }
}
