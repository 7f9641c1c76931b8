//! Range-sum queries over a mutable array, with and without a cache of previously computed ranges.

use crate::error::{Error, Result};
use crate::lru::LruCache;
use log::trace;
use rand::Rng;

/// Largest value written into generated arrays and updates.
pub const MAX_VALUE: i64 = 1000;

/// A single operation in a range-sum workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Query {
    /// Sum of the inclusive range `[left, right]`.
    Range { left: usize, right: usize },
    /// Assignment of `value` to `array[index]`.
    Update { index: usize, value: i64 },
}

fn check_range(len: usize, left: usize, right: usize) -> Result<()> {
    if left > right {
        return Err(Error::InvalidRange { left, right });
    }
    if right >= len {
        return Err(Error::IndexOutOfBounds { index: right, len });
    }
    Ok(())
}

/// Returns the sum of `array[left..=right]`.
///
/// # Examples
///
/// ```
/// use splay_memo::range_sum;
///
/// let array = vec![1, 2, 3, 4];
/// assert_eq!(range_sum::range_sum(&array, 1, 2).unwrap(), 5);
/// assert!(range_sum::range_sum(&array, 2, 4).is_err());
/// ```
pub fn range_sum(array: &[i64], left: usize, right: usize) -> Result<i64> {
    check_range(array.len(), left, right)?;
    Ok(array[left..=right].iter().sum())
}

/// Assigns `value` to `array[index]`.
pub fn update(array: &mut [i64], index: usize, value: i64) -> Result<()> {
    let len = array.len();
    match array.get_mut(index) {
        Some(slot) => {
            *slot = value;
            Ok(())
        },
        None => Err(Error::IndexOutOfBounds { index, len }),
    }
}

/// An array whose range sums are cached in an LRU cache keyed by `(left, right)`. Updating an
/// index invalidates every cached range that covers it.
///
/// # Examples
///
/// ```
/// use splay_memo::range_sum::CachedArrayQueries;
///
/// let mut queries = CachedArrayQueries::new(vec![1, 2, 3, 4], 16);
/// assert_eq!(queries.range_sum(0, 3).unwrap(), 10);
/// queries.update(2, 10).unwrap();
/// assert_eq!(queries.range_sum(0, 3).unwrap(), 17);
/// ```
pub struct CachedArrayQueries {
    array: Vec<i64>,
    cache: LruCache<(usize, usize), i64>,
}

impl CachedArrayQueries {
    pub fn new(array: Vec<i64>, cache_capacity: usize) -> Self {
        CachedArrayQueries {
            array,
            cache: LruCache::new(cache_capacity),
        }
    }

    pub fn range_sum(&mut self, left: usize, right: usize) -> Result<i64> {
        if let Some(sum) = self.cache.get(&(left, right)) {
            return Ok(*sum);
        }
        let sum = range_sum(&self.array, left, right)?;
        self.cache.put((left, right), sum);
        Ok(sum)
    }

    pub fn update(&mut self, index: usize, value: i64) -> Result<()> {
        update(&mut self.array, index, value)?;
        let invalidated = self.cache.invalidate_range(index);
        trace!("update at {} invalidated {} cached ranges", index, invalidated);
        Ok(())
    }

    pub fn array(&self) -> &[i64] {
        &self.array
    }

    pub fn cache(&self) -> &LruCache<(usize, usize), i64> {
        &self.cache
    }
}

/// Generates an array of `size` values drawn uniformly from `1..=MAX_VALUE`.
pub fn generate_array<R>(rng: &mut R, size: usize) -> Vec<i64>
where
    R: Rng,
{
    (0..size).map(|_| rng.gen_range(1..=MAX_VALUE)).collect()
}

/// Generates `num_queries` random queries against an array of `array_size` elements. Each query
/// is a range query with probability `range_ratio` and an update otherwise. Range queries always
/// span at least two elements.
pub fn generate_queries<R>(
    rng: &mut R,
    array_size: usize,
    num_queries: usize,
    range_ratio: f64,
) -> Result<Vec<Query>>
where
    R: Rng,
{
    if array_size < 2 {
        return Err(Error::InvalidConfig("array size must be at least 2"));
    }
    if !(0.0..=1.0).contains(&range_ratio) {
        return Err(Error::InvalidConfig("range ratio must be within [0, 1]"));
    }

    let queries = (0..num_queries)
        .map(|_| {
            if rng.gen_bool(range_ratio) {
                let left = rng.gen_range(0..array_size - 1);
                let right = rng.gen_range(left + 1..array_size);
                Query::Range { left, right }
            } else {
                Query::Update {
                    index: rng.gen_range(0..array_size),
                    value: rng.gen_range(1..=MAX_VALUE),
                }
            }
        })
        .collect();
    Ok(queries)
}

/// Replays `queries` against a copy of `array` without caching. Returns the result of every range
/// query in order.
pub fn run_uncached(array: &[i64], queries: &[Query]) -> Result<Vec<i64>> {
    let mut array = array.to_vec();
    let mut results = Vec::new();
    for query in queries {
        match *query {
            Query::Range { left, right } => results.push(range_sum(&array, left, right)?),
            Query::Update { index, value } => update(&mut array, index, value)?,
        }
    }
    Ok(results)
}

/// Replays `queries` against a copy of `array` through `CachedArrayQueries`. Returns the result of
/// every range query in order.
pub fn run_cached(array: &[i64], queries: &[Query], cache_capacity: usize) -> Result<Vec<i64>> {
    let mut cached = CachedArrayQueries::new(array.to_vec(), cache_capacity);
    let mut results = Vec::new();
    for query in queries {
        match *query {
            Query::Range { left, right } => results.push(cached.range_sum(left, right)?),
            Query::Update { index, value } => cached.update(index, value)?,
        }
    }
    trace!("cached replay finished with {} cached ranges", cached.cache().len());
    Ok(results)
}
