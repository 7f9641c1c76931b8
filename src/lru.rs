//! Fixed-capacity least-recently-used cache.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::mem;

/// A fixed-capacity cache that evicts the least recently used entry when full.
///
/// Every entry is stamped with a logical clock on each access. A `BTreeMap` ordered by stamp
/// serves as the recency list, so the eviction candidate is always its first entry.
///
/// # Examples
///
/// ```
/// use splay_memo::lru::LruCache;
///
/// let mut cache = LruCache::new(2);
/// cache.put("a", 1);
/// cache.put("b", 2);
/// assert_eq!(cache.get(&"a"), Some(&1));
///
/// // "b" is now the least recently used entry.
/// cache.put("c", 3);
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.len(), 2);
/// ```
pub struct LruCache<K, V> {
    entries: HashMap<K, (V, u64)>,
    recency: BTreeMap<u64, K>,
    capacity: usize,
    clock: u64,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Constructs a new, empty `LruCache<K, V>` holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Error: cache capacity must be positive.");
        LruCache {
            entries: HashMap::new(),
            recency: BTreeMap::new(),
            capacity,
            clock: 0,
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Returns the value cached for `key` and marks it as the most recently used entry.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let LruCache {
            ref mut entries,
            ref mut recency,
            ref mut clock,
            ..
        } = self;
        let (value, stamp) = entries.get_mut(key)?;
        *clock += 1;
        let now = *clock;
        let old_stamp = mem::replace(stamp, now);
        if let Some(key) = recency.remove(&old_stamp) {
            recency.insert(now, key);
        }
        Some(value)
    }

    /// Caches a key-value pair and marks it as the most recently used entry. If the key was
    /// already cached, its old value is returned. If the cache overflows, the least recently used
    /// entry is evicted.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let now = self.tick();
        let LruCache {
            ref mut entries,
            ref mut recency,
            ..
        } = self;
        if let Some((old_value, stamp)) = entries.get_mut(&key) {
            let old_stamp = mem::replace(stamp, now);
            if let Some(key) = recency.remove(&old_stamp) {
                recency.insert(now, key);
            }
            return Some(mem::replace(old_value, value));
        }

        recency.insert(now, key.clone());
        entries.insert(key, (value, now));
        if entries.len() > self.capacity {
            self.evict();
        }
        None
    }

    fn evict(&mut self) {
        if let Some((_, key)) = self.recency.pop_first() {
            self.entries.remove(&key);
        }
    }

    /// Removes `key` from the cache, returning its value if it was cached.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let (value, stamp) = self.entries.remove(key)?;
        self.recency.remove(&stamp);
        Some(value)
    }

    /// Checks if `key` is cached without updating its recency.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    /// Returns the cached keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.recency.values()
    }
}

impl<V> LruCache<(usize, usize), V> {
    /// Removes every cached inclusive range `(left, right)` that covers `index`. Returns the
    /// number of removed entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(8);
    /// cache.put((0, 4), 10);
    /// cache.put((3, 9), 20);
    /// cache.put((5, 9), 30);
    ///
    /// assert_eq!(cache.invalidate_range(4), 2);
    /// assert!(cache.contains_key(&(5, 9)));
    /// ```
    pub fn invalidate_range(&mut self, index: usize) -> usize {
        let stale: Vec<(usize, usize)> = self
            .entries
            .keys()
            .filter(|&&(left, right)| left <= index && index <= right)
            .cloned()
            .collect();
        for key in &stale {
            self.remove(key);
        }
        stale.len()
    }
}
