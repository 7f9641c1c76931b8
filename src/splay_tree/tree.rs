use crate::entry::Entry;
use crate::splay_tree::node::{self, Node};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

/// Splays the node with `key` to the root of `tree`. If no such node exists, the last node on the
/// search path becomes the root. Returns the new root; callers must rebind their handle to it.
///
/// Each call descends two levels so that zig-zig and zig-zag steps are applied as a pair.
pub fn splay<T, U, V>(tree: Tree<T, U>, key: &V) -> Tree<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut node = tree?;
    match key.cmp(node.entry.key.borrow()) {
        Ordering::Equal => Some(node),
        Ordering::Less => {
            let mut child = match node.left.take() {
                Some(child) => child,
                None => return Some(node),
            };
            match key.cmp(child.entry.key.borrow()) {
                Ordering::Less => {
                    child.left = splay(child.left.take(), key);
                    node.left = Some(child);
                    node = node::rotate_right(node);
                },
                Ordering::Greater => {
                    child.right = splay(child.right.take(), key);
                    if child.right.is_some() {
                        child = node::rotate_left(child);
                    }
                    node.left = Some(child);
                },
                Ordering::Equal => node.left = Some(child),
            }
            if node.left.is_none() {
                Some(node)
            } else {
                Some(node::rotate_right(node))
            }
        },
        Ordering::Greater => {
            let mut child = match node.right.take() {
                Some(child) => child,
                None => return Some(node),
            };
            match key.cmp(child.entry.key.borrow()) {
                Ordering::Greater => {
                    child.right = splay(child.right.take(), key);
                    node.right = Some(child);
                    node = node::rotate_left(node);
                },
                Ordering::Less => {
                    child.left = splay(child.left.take(), key);
                    if child.left.is_some() {
                        child = node::rotate_right(child);
                    }
                    node.right = Some(child);
                },
                Ordering::Equal => node.right = Some(child),
            }
            if node.right.is_none() {
                Some(node)
            } else {
                Some(node::rotate_left(node))
            }
        },
    }
}

/// Inserts a key-value pair. Returns the replaced entry if `key` already existed.
pub fn insert<T, U>(tree: &mut Tree<T, U>, key: T, value: U) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let mut root = match splay(tree.take(), &key) {
        Some(root) => root,
        None => {
            *tree = Some(Box::new(Node::new(key, value)));
            return None;
        },
    };

    let ret = match key.cmp(&root.entry.key) {
        Ordering::Equal => {
            let old_entry = mem::replace(&mut root.entry, Entry { key, value });
            *tree = Some(root);
            return Some(old_entry);
        },
        Ordering::Less => {
            let mut new_node = Node::new(key, value);
            new_node.left = root.left.take();
            new_node.right = Some(root);
            new_node
        },
        Ordering::Greater => {
            let mut new_node = Node::new(key, value);
            new_node.right = root.right.take();
            new_node.left = Some(root);
            new_node
        },
    };
    debug_assert!(
        is_locally_ordered(&ret),
        "Error: keys do not have a consistent total order."
    );
    *tree = Some(Box::new(ret));
    None
}

/// Splays `key` to the root and returns its entry if present. The tree is restructured even on a
/// miss.
pub fn search<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    *tree = splay(tree.take(), key);
    match tree {
        Some(ref mut node) if key.cmp(node.entry.key.borrow()) == Ordering::Equal => {
            Some(&mut node.entry)
        },
        _ => None,
    }
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn ceil<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn floor<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

pub fn height<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        Some(node) => 1 + cmp::max(height(&node.left), height(&node.right)),
        None => 0,
    }
}

/// Drops every node without recursing, since a splay tree can degenerate into a path.
pub fn clear<T, U>(tree: &mut Tree<T, U>) {
    let mut stack: Vec<Box<Node<T, U>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

fn is_locally_ordered<T, U>(node: &Node<T, U>) -> bool
where
    T: Ord,
{
    let left_ok = node.left.as_ref().map_or(true, |left| left.entry.key < node.entry.key);
    let right_ok = node.right.as_ref().map_or(true, |right| right.entry.key > node.entry.key);
    left_ok && right_ok
}

/// Checks that an in-order traversal yields strictly increasing keys.
#[cfg(test)]
pub fn is_ordered<T, U>(tree: &Tree<T, U>) -> bool
where
    T: Ord,
{
    fn check<'a, T, U>(tree: &'a Tree<T, U>, prev: &mut Option<&'a T>) -> bool
    where
        T: Ord,
    {
        match tree {
            Some(node) => {
                if !check(&node.left, prev) {
                    return false;
                }
                if let Some(prev_key) = *prev {
                    if *prev_key >= node.entry.key {
                        return false;
                    }
                }
                *prev = Some(&node.entry.key);
                check(&node.right, prev)
            },
            None => true,
        }
    }

    check(tree, &mut None)
}

#[cfg(test)]
mod tests {
    use super::{height, insert, is_ordered, search, splay, Tree};
    use std::cmp::Ordering;

    fn root_key(tree: &Tree<u32, u32>) -> Option<u32> {
        tree.as_ref().map(|node| node.entry.key)
    }

    fn left_chain(keys: &[u32]) -> Tree<u32, u32> {
        let mut tree = None;
        for key in keys {
            insert(&mut tree, *key, *key);
        }
        tree
    }

    #[test]
    fn test_splay_empty() {
        let tree: Tree<u32, u32> = None;
        assert!(splay(tree, &1).is_none());
    }

    #[test]
    fn test_splay_zig_zig() {
        // Ascending inserts leave a left path: 5 -> 4 -> 3 -> 2 -> 1.
        let tree = left_chain(&[1, 2, 3, 4, 5]);
        assert_eq!(height(&tree), 5);

        let tree = splay(tree, &1);
        assert_eq!(root_key(&tree), Some(1));
        assert!(is_ordered(&tree));
        assert!(height(&tree) < 5);
    }

    #[test]
    fn test_splay_zig_zag() {
        let mut tree = None;
        insert(&mut tree, 10, 10);
        insert(&mut tree, 5, 5);
        insert(&mut tree, 20, 20);
        let tree = splay(tree, &10);
        let mut tree = splay(tree, &7);
        // 7 is absent, so the root becomes one of its in-order neighbors.
        let key = root_key(&tree);
        assert!(key == Some(5) || key == Some(10));
        assert!(is_ordered(&tree));
        assert_eq!(search(&mut tree, &20).map(|entry| entry.value), Some(20));
    }

    #[test]
    fn test_splay_miss_neighbor() {
        let tree = left_chain(&[2, 4, 6, 8]);
        let tree = splay(tree, &5);
        let key = root_key(&tree);
        assert!(key == Some(4) || key == Some(6));

        let tree = splay(tree, &100);
        assert_eq!(root_key(&tree), Some(8));

        let tree = splay(tree, &0);
        assert_eq!(root_key(&tree), Some(2));
    }

    #[test]
    fn test_insert_replace() {
        let mut tree = None;
        assert!(insert(&mut tree, 1, 1).is_none());
        let old_entry = insert(&mut tree, 1, 2).expect("replaced entry");
        assert_eq!(old_entry.into_pair(), (1, 1));
        assert_eq!(search(&mut tree, &1).map(|entry| entry.value), Some(2));
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_search_root_property() {
        let mut tree = left_chain(&[5, 3, 8, 1]);
        assert_eq!(search(&mut tree, &3).map(|entry| entry.value), Some(3));
        assert_eq!(root_key(&tree), Some(3));
        assert!(search(&mut tree, &10).is_none());
        for key in &[1, 3, 5, 8] {
            assert_eq!(search(&mut tree, key).map(|entry| entry.value), Some(*key));
            assert_eq!(root_key(&tree), Some(*key));
        }
    }

    /// A key whose ordering contradicts itself: every comparison reports `Less`.
    struct AlwaysLess;

    impl PartialEq for AlwaysLess {
        fn eq(&self, _other: &AlwaysLess) -> bool {
            false
        }
    }

    impl Eq for AlwaysLess {}

    impl PartialOrd for AlwaysLess {
        fn partial_cmp(&self, other: &AlwaysLess) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for AlwaysLess {
        fn cmp(&self, _other: &AlwaysLess) -> Ordering {
            Ordering::Less
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "consistent total order")]
    fn test_insert_inconsistent_order() {
        let mut tree = None;
        insert(&mut tree, AlwaysLess, ());
        insert(&mut tree, AlwaysLess, ());
    }

    #[test]
    fn test_is_ordered() {
        assert!(is_ordered::<u32, u32>(&None));
        assert!(is_ordered(&left_chain(&[3, 1, 2, 5, 4])));
    }
}
