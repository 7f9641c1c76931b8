//! Fibonacci numbers memoized through an injected cache.

use crate::cache::Cache;
use num_bigint::BigUint;
use std::mem;

/// Computes the `n`-th Fibonacci number recursively, memoizing every term in `cache`. The cache
/// is consulted before expanding a term and updated after computing it.
///
/// Recursion depth grows linearly with `n` for a cold cache.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use splay_memo::fibonacci::fibonacci;
/// use splay_memo::splay_tree::SplayMap;
///
/// let mut tree = SplayMap::new();
/// assert_eq!(fibonacci(10, &mut tree), BigUint::from(55u32));
/// assert_eq!(tree.len(), 11);
/// ```
pub fn fibonacci<C>(n: u64, cache: &mut C) -> BigUint
where
    C: Cache<u64, BigUint> + ?Sized,
{
    if let Some(value) = cache.get(&n) {
        return value;
    }

    if n <= 1 {
        let value = BigUint::from(n);
        cache.put(n, value.clone());
        return value;
    }

    let value = fibonacci(n - 1, cache) + fibonacci(n - 2, cache);
    cache.put(n, value.clone());
    value
}

/// Computes the `n`-th Fibonacci number iteratively without any cache.
pub fn fibonacci_iterative(n: u64) -> BigUint {
    let mut prev = BigUint::from(0u32);
    let mut curr = BigUint::from(1u32);
    for _ in 0..n {
        let next = &prev + &curr;
        prev = mem::replace(&mut curr, next);
    }
    prev
}

#[cfg(test)]
mod tests {
    use super::{fibonacci, fibonacci_iterative};
    use crate::lru::LruCache;
    use crate::splay_tree::SplayMap;
    use num_bigint::BigUint;

    #[test]
    fn test_base_cases() {
        let mut tree = SplayMap::new();
        assert_eq!(fibonacci(0, &mut tree), BigUint::from(0u32));
        assert_eq!(fibonacci(1, &mut tree), BigUint::from(1u32));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_iterative() {
        let expected: Vec<u32> = vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34];
        for (n, value) in expected.into_iter().enumerate() {
            assert_eq!(fibonacci_iterative(n as u64), BigUint::from(value));
        }
    }

    #[test]
    fn test_splay_map_memoization() {
        let mut tree = SplayMap::new();
        assert_eq!(fibonacci(90, &mut tree), BigUint::from(2_880_067_194_370_816_120u64));
        assert_eq!(tree.len(), 91);
        assert_eq!(tree.root(), Some(&90));

        // A warm cache answers from the root without adding nodes.
        assert_eq!(fibonacci(90, &mut tree), fibonacci_iterative(90));
        assert_eq!(tree.len(), 91);
    }

    #[test]
    fn test_persistent_tree_across_calls() {
        let mut tree = SplayMap::new();
        for n in (0..=500).step_by(50) {
            assert_eq!(fibonacci(n, &mut tree), fibonacci_iterative(n));
        }
        assert_eq!(tree.len(), 501);
    }

    #[test]
    fn test_lru_memoization() {
        let mut cache = LruCache::new(usize::max_value());
        assert_eq!(fibonacci(300, &mut cache), fibonacci_iterative(300));
        assert_eq!(cache.len(), 301);
    }

    #[test]
    fn test_small_lru_still_correct() {
        let mut cache = LruCache::new(3);
        assert_eq!(fibonacci(60, &mut cache), fibonacci_iterative(60));
        assert!(cache.len() <= 3);
    }
}
