//! A minimal get/put capability shared by the caches in this crate, so memoized computations can
//! take whichever cache they are given.

use crate::lru::LruCache;
use crate::splay_tree::SplayMap;
use std::hash::Hash;

/// A key-value cache. Lookups take `&mut self` because the implementations reorganize themselves
/// on reads.
pub trait Cache<K, V> {
    /// Returns a copy of the value cached for `key`, or `None` on a miss.
    fn get(&mut self, key: &K) -> Option<V>;

    /// Caches `value` under `key`, replacing any previous value.
    fn put(&mut self, key: K, value: V);
}

impl<'a, K, V, C> Cache<K, V> for &'a mut C
where
    C: Cache<K, V> + ?Sized,
{
    fn get(&mut self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn put(&mut self, key: K, value: V) {
        (**self).put(key, value)
    }
}

impl<K, V> Cache<K, V> for SplayMap<K, V>
where
    K: Ord,
    V: Clone,
{
    fn get(&mut self, key: &K) -> Option<V> {
        self.search(key).cloned()
    }

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn get(&mut self, key: &K) -> Option<V> {
        LruCache::get(self, key).cloned()
    }

    fn put(&mut self, key: K, value: V) {
        LruCache::put(self, key, value);
    }
}
