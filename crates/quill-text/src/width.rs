#![forbid(unsafe_code)]

//! The width oracle: visible column widths with SGR sequences skipped.

use std::borrow::Cow;
use std::num::NonZeroUsize;

use lru::LruCache;
use memchr::memchr;
use rustc_hash::FxBuildHasher;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Remove CSI sequences (`ESC [ params final`) from `text`.
///
/// Returns the input unchanged (borrowed) when it contains no ESC byte.
/// Malformed input never panics: a bare ESC is dropped on its own, and a
/// sequence left dangling at end-of-string is consumed to the end.
#[must_use]
pub fn strip_styles(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let Some(first_esc) = memchr(0x1b, bytes) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first_esc]);
    let mut pos = first_esc;
    while pos < bytes.len() {
        if bytes[pos] == 0x1b {
            pos += 1;
            if pos < bytes.len() && bytes[pos] == b'[' {
                pos += 1;
                // Parameter and intermediate bytes, then one final byte.
                while pos < bytes.len() && matches!(bytes[pos], 0x20..=0x3f) {
                    pos += 1;
                }
                if pos < bytes.len() {
                    pos += 1;
                }
            }
            continue;
        }
        let next = memchr(0x1b, &bytes[pos..]).map_or(bytes.len(), |i| pos + i);
        out.push_str(&text[pos..next]);
        pos = next;
    }
    Cow::Owned(out)
}

/// Codepoints that occupy no terminal cell: controls, combining marks,
/// variation selectors, joiners, and bidi/format controls.
#[inline]
fn is_zero_width_codepoint(c: char) -> bool {
    let u = c as u32;
    matches!(u, 0x0000..=0x001F | 0x007F..=0x009F)
        || matches!(u, 0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF | 0x20D0..=0x20FF)
        || matches!(u, 0xFE20..=0xFE2F)
        || matches!(u, 0xFE00..=0xFE0F | 0xE0100..=0xE01EF)
        || matches!(
            u,
            0x00AD | 0x034F | 0x180E | 0x200B | 0x200C | 0x200D | 0x200E | 0x200F | 0x2060 | 0xFEFF
        )
        || matches!(u, 0x202A..=0x202E | 0x2066..=0x2069 | 0x206A..=0x206F)
}

/// Column width of a single grapheme cluster.
///
/// 0 for clusters made entirely of zero-width codepoints, 2 for East-Asian
/// wide clusters, otherwise 1 — including codepoints `unicode-width` does not
/// know, which default to a single cell rather than vanishing.
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_ascii() {
        return grapheme
            .bytes()
            .filter(|b| matches!(b, 0x20..=0x7e))
            .count();
    }
    if grapheme.chars().all(is_zero_width_codepoint) {
        return 0;
    }
    grapheme.width().max(1)
}

/// Visible column width of `text`, skipping embedded SGR sequences.
///
/// Called on every line of every box/table/nav render; the pure-ASCII fast
/// path avoids both the strip and the grapheme walk.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    if text.bytes().all(|b| matches!(b, 0x20..=0x7e)) {
        return text.len();
    }
    let clean = strip_styles(text);
    clean.graphemes(true).map(grapheme_width).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub len: usize,
}

/// Bounded LRU memo for [`visible_width`], keyed by the raw string.
///
/// An explicit object rather than a module-level map; owners size it and
/// drop it with the render pass that needed it.
#[derive(Debug)]
pub struct WidthCache {
    map: LruCache<String, usize, FxBuildHasher>,
    hits: u64,
    misses: u64,
}

impl WidthCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Capacity is clamped to at least one entry.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            map: LruCache::with_hasher(capacity, FxBuildHasher),
            hits: 0,
            misses: 0,
        }
    }

    #[must_use]
    pub fn width(&mut self, text: &str) -> usize {
        if let Some(&w) = self.map.get(text) {
            self.hits += 1;
            return w;
        }
        self.misses += 1;
        let w = visible_width(text);
        self.map.put(text.to_owned(), w);
        w
    }

    #[must_use]
    pub fn stats(&self) -> WidthCacheStats {
        WidthCacheStats {
            hits: self.hits,
            misses: self.misses,
            len: self.map.len(),
        }
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::new()
    }
}
