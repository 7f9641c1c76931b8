use crate::entry::Entry;
use crate::splay_tree::node::Node;
use crate::splay_tree::tree;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;

/// An ordered map implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed items are quick to access again. Every `insert` and `search` "splays" the accessed key
/// to the root of the tree, giving an amortized `O(log n)` bound over any sequence of operations.
///
/// Since splaying restructures the tree, `search` requires a mutable reference. The read-only
/// helpers (`get`, `contains_key`, `floor`, `ceil`, `min`, `max`) do not splay.
///
/// # Examples
///
/// ```
/// use splay_memo::splay_tree::SplayMap;
///
/// let mut map = SplayMap::new();
/// map.insert(5, "five");
/// map.insert(3, "three");
///
/// assert_eq!(map.search(&3), Some(&"three"));
/// assert_eq!(map.root(), Some(&3));
/// assert_eq!(map.search(&4), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&3));
/// assert_eq!(map.ceil(&4), Some(&5));
/// ```
pub struct SplayMap<T, U> {
    tree: tree::Tree<T, U>,
    len: usize,
}

impl<T, U> SplayMap<T, U> {
    /// Constructs a new, empty `SplayMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, u32> = SplayMap::new();
    /// ```
    pub fn new() -> Self {
        SplayMap { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the map. The key is splayed to the root. If the key already
    /// exists in the map, its value is overwritten and the old key-value pair is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)>
    where
        T: Ord,
    {
        let SplayMap {
            ref mut tree,
            ref mut len,
        } = self;
        match tree::insert(tree, key, value) {
            Some(entry) => Some(entry.into_pair()),
            None => {
                *len += 1;
                None
            },
        }
    }

    /// Searches for a key, splaying it to the root. If the key does not exist, the last node on
    /// the search path is splayed to the root instead and `None` is returned.
    ///
    /// Splaying recurses once per two levels of the search path. A tree built from `n` keys
    /// inserted in ascending order is a single path, so the first `search` for its smallest key
    /// recurses about `n / 2` frames deep and can exhaust the stack for very large `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.search(&1), Some(&1));
    /// assert_eq!(map.root(), Some(&1));
    /// assert_eq!(map.search(&0), None);
    /// ```
    pub fn search<V>(&mut self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::search(&mut self.tree, key).map(|entry| &entry.value)
    }

    /// Searches for a key, splaying it to the root, and returns a mutable reference to its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// *map.search_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn search_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::search(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the key at the root of the tree. After `insert` or a successful `search`, this is
    /// the key that was accessed.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// assert_eq!(map.root(), None);
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.root(), Some(&2));
    /// ```
    pub fn root(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.entry.key)
    }

    /// Checks if a key exists in the map. Note that `contains_key` does not splay the tree in
    /// order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(5, 5);
    /// map.insert(3, 3);
    /// assert!(map.contains_key(&5));
    /// assert!(!map.contains_key(&4));
    ///
    /// // The root is left where it was.
    /// assert_eq!(map.root(), Some(&3));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map. Note that `get` does not splay the tree
    /// in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(8, "eight");
    /// map.insert(1, "one");
    /// assert_eq!(map.get(&8), Some(&"eight"));
    /// assert_eq!(map.get(&10), None);
    /// assert_eq!(map.root(), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(5, 5);
    /// map.insert(3, 3);
    /// map.insert(5, 50);
    /// map.search(&10);
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, u32> = SplayMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the height of the tree. An empty tree has height zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
        self.len = 0;
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist. Note that `floor` does not splay the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, ()> = vec![(1, ()), (3, ()), (8, ())].into_iter().collect();
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&3), Some(&3));
    /// assert_eq!(map.floor(&7), Some(&3));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist. Note that `ceil` does not splay the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, ()> = vec![(1, ()), (3, ()), (8, ())].into_iter().collect();
    /// assert_eq!(map.ceil(&4), Some(&8));
    /// assert_eq!(map.ceil(&9), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// assert_eq!(map.min(), None);
    /// map.insert(5, 5);
    /// map.insert(1, 1);
    /// map.insert(8, 8);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, u32> = (0..10).map(|n| (n, n * n)).collect();
    /// assert_eq!(map.max(), Some(&9));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new();
    /// map.insert(8, 'c');
    /// map.insert(3, 'b');
    /// map.insert(5, 'a');
    ///
    /// // Keys come out in order regardless of the shape left by splaying.
    /// let keys: Vec<&u32> = map.iter().map(|(key, _)| key).collect();
    /// assert_eq!(keys, vec![&3, &5, &8]);
    /// ```
    pub fn iter(&self) -> SplayMapIter<'_, T, U> {
        SplayMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayMap;
    ///
    /// let mut map: SplayMap<u32, u32> = (1..=3).map(|n| (n, 0)).collect();
    /// for (key, value) in map.iter_mut() {
    ///     *value = key * 10;
    /// }
    /// assert_eq!(map.search(&2), Some(&20));
    /// ```
    pub fn iter_mut(&mut self) -> SplayMapIterMut<'_, T, U> {
        SplayMapIterMut {
            current: self.tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

impl<T, U> IntoIterator for SplayMap<T, U> {
    type IntoIter = SplayMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a SplayMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = SplayMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut SplayMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = SplayMapIterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `SplayMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct SplayMapIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for SplayMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = node;
            self.current = right;
            entry.into_pair()
        })
    }
}

/// An iterator for `SplayMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct SplayMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: &'a tree::Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> Iterator for SplayMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { ref key, ref value },
                ref right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

type BorrowedIterEntryMut<'a, T, U> = (&'a mut Entry<T, U>, BorrowedTreeMut<'a, T, U>);
type BorrowedTreeMut<'a, T, U> = Option<&'a mut Node<T, U>>;

impl<T, U> Drop for SplayMapIntoIter<T, U> {
    fn drop(&mut self) {
        tree::clear(&mut self.current);
        for node in &mut self.stack {
            tree::clear(&mut node.right);
        }
    }
}

/// A mutable iterator for `SplayMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable references.
pub struct SplayMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: BorrowedTreeMut<'a, T, U>,
    stack: Vec<BorrowedIterEntryMut<'a, T, U>>,
}

impl<'a, T, U> Iterator for SplayMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        let SplayMapIterMut {
            ref mut current,
            ref mut stack,
        } = self;
        while let Some(node) = current.take() {
            let Node { entry, left, right } = node;
            *current = left.as_mut().map(|node| &mut **node);
            stack.push((entry, right.as_mut().map(|node| &mut **node)));
        }
        stack.pop().map(|(entry, right)| {
            *current = right;
            let Entry {
                ref key,
                ref mut value,
            } = entry;
            (key, value)
        })
    }
}

impl<T, U> Default for SplayMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> Drop for SplayMap<T, U> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T, U> Extend<(T, U)> for SplayMap<T, U>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T, U> FromIterator<(T, U)> for SplayMap<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = SplayMap::new();
        map.extend(iter);
        map
    }
}

impl<T, U> fmt::Debug for SplayMap<T, U>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, T, U, V> Index<&'a V> for SplayMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}
