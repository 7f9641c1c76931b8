use crate::entry::Entry;
use crate::splay_tree::tree;

pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            left: None,
            right: None,
        }
    }
}

/// Rotates `node` with its left child and returns the new subtree root.
///
/// ```text
///       x            y
///      / \          / \
///     y   C  ==>   A   x
///    / \              / \
///   A   B            B   C
/// ```
pub fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = node.left.take().expect("Error: expected left child node to be `Some`.");
    node.left = child.right.take();
    child.right = Some(node);
    child
}

/// Rotates `node` with its right child and returns the new subtree root.
pub fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = node.right.take().expect("Error: expected right child node to be `Some`.");
    node.right = child.left.take();
    child.left = Some(node);
    child
}
