//! String interner for script identifiers.
//!
//! Provides O(1) interning and lookup. One interner belongs to one
//! interpreter instance; nothing here is shared across threads.

use super::Name;
use rustc_hash::FxHashMap;

/// Maps identifier text to compact `Name` handles and back.
pub struct StringInterner {
    /// Map from string content to index.
    map: FxHashMap<Box<str>, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let mut interner = Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        interner.intern("");
        interner
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&index) = self.map.get(s) {
            return Name::from_raw(index);
        }

        let index = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded capacity of {} strings", u32::MAX));
        self.strings.push(s.into());
        self.map.insert(s.into(), index);
        Name::from_raw(index)
    }

    /// Look up a name without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).map(|&index| Name::from_raw(index))
    }

    /// Resolve a Name back to its text.
    ///
    /// Names from a different interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| s)
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
