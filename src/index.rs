//! The domain-to-entry index.
//!
//! `EntryIndex` maps a domain string to its [`EntryId`], giving O(1)
//! amortized lookup on `add`. Collision and growth policy are left to
//! `std::collections::HashMap`; no removal operation exists, matching
//! spec §4.2 ("no removal").

use std::collections::HashMap;

use crate::entry::EntryId;

pub(crate) struct EntryIndex {
    map: HashMap<Box<str>, EntryId>,
}

impl EntryIndex {
    pub(crate) fn new() -> Self {
        EntryIndex {
            map: HashMap::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        EntryIndex {
            map: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn get(&self, domain: &str) -> Option<EntryId> {
        self.map.get(domain).copied()
    }

    pub(crate) fn put(&mut self, domain: Box<str>, id: EntryId) {
        self.map.insert(domain, id);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}
