#![forbid(unsafe_code)]

//! The per-document anchor registry.
//!
//! Link nodes take their display id from here at construction time; an
//! external command handler reads the finished map back to resolve
//! `click <id>`. The registry is rebuilt fresh for every navigated document.

use std::collections::BTreeMap;

/// One registered link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub text: String,
    pub href: String,
}

/// Ordered id -> anchor map. Ids are unique per document and count up
/// from 1.
#[derive(Debug, Clone, Default)]
pub struct AnchorRegistry {
    entries: BTreeMap<u32, Anchor>,
    next_id: u32,
}

impl AnchorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Register a link and return its assigned id.
    pub fn register(&mut self, text: impl Into<String>, href: impl Into<String>) -> u32 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.entries.insert(
            id,
            Anchor {
                text: text.into(),
                href: href.into(),
            },
        );
        id
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Anchor> {
        self.entries.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Anchor)> {
        self.entries.iter().map(|(id, anchor)| (*id, anchor))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all anchors and restart ids at 1 (called on navigation).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_id = 1;
    }
}
