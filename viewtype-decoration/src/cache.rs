use crate::ItemOffsets;
use crate::key::{ItemKey, OffsetMap};

/// Side table of the most recent offsets per on-screen item instance.
///
/// Entries are keyed by the instance identity, not by adapter position: a recycled instance
/// bound to a new position simply overwrites its entry on the next layout pass. The cache
/// never owns the items themselves.
#[derive(Clone, Debug)]
pub struct OffsetCache<K> {
    entries: OffsetMap<K>,
}

impl<K: ItemKey> OffsetCache<K> {
    pub fn new() -> Self {
        Self {
            entries: OffsetMap::<K>::new(),
        }
    }

    /// Records `offsets` for `key`, replacing any previous value.
    pub fn store(&mut self, key: K, offsets: ItemOffsets) {
        self.entries.insert(key, offsets);
    }

    /// Returns the last offsets stored for `key`.
    pub fn retrieve(&self, key: &K) -> Option<ItemOffsets> {
        self.entries.get(key).copied()
    }

    /// Drops the entry for `key`, e.g. when the host destroys the instance.
    pub fn forget(&mut self, key: &K) -> Option<ItemOffsets> {
        self.entries.remove(key)
    }

    /// Keeps only the entries for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.entries.retain(|key, _| keep(key));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: ItemKey> Default for OffsetCache<K> {
    fn default() -> Self {
        Self::new()
    }
}
