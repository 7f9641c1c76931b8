//! Timing comparisons between the caches and the table output used by the `splay-memo` binary.

use crate::error::{Error, Result};
use crate::fibonacci::fibonacci;
use crate::lru::LruCache;
use crate::range_sum::{self, Query};
use crate::splay_tree::SplayMap;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::time::{Duration, Instant};

const COLUMN_WIDTH: usize = 20;

/// Parameters for the cache comparisons.
#[derive(Clone, Debug)]
pub struct Config {
    pub max_n: u64,
    pub step: u64,
    pub repetitions: u32,
    pub array_size: usize,
    pub num_queries: usize,
    pub range_ratio: f64,
    pub cache_capacity: usize,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_n: 950,
            step: 50,
            repetitions: 1,
            array_size: 100_000,
            num_queries: 50_000,
            range_ratio: 0.8,
            cache_capacity: 1000,
            seed: 0,
        }
    }
}

impl Config {
    pub fn max_n(mut self, max_n: u64) -> Self {
        self.max_n = max_n;
        self
    }

    pub fn step(mut self, step: u64) -> Self {
        self.step = step;
        self
    }

    pub fn repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn array_size(mut self, array_size: usize) -> Self {
        self.array_size = array_size;
        self
    }

    pub fn num_queries(mut self, num_queries: usize) -> Self {
        self.num_queries = num_queries;
        self
    }

    pub fn cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(Error::InvalidConfig("step must be positive"));
        }
        if self.repetitions == 0 {
            return Err(Error::InvalidConfig("repetitions must be positive"));
        }
        if self.cache_capacity == 0 {
            return Err(Error::InvalidConfig("cache capacity must be positive"));
        }
        if self.array_size < 2 {
            return Err(Error::InvalidConfig("array size must be at least 2"));
        }
        Ok(())
    }

    /// The Fibonacci indices to measure: `0, step, 2 * step, ..` up to `max_n`.
    pub fn n_values(&self) -> impl Iterator<Item = u64> {
        let step = self.step.max(1);
        (0..=self.max_n).step_by(step as usize)
    }
}

/// Runs `f` `repetitions` times and returns the mean wall-clock duration.
pub fn time_average<F>(repetitions: u32, mut f: F) -> Duration
where
    F: FnMut(),
{
    let start = Instant::now();
    for _ in 0..repetitions {
        f();
    }
    start.elapsed() / repetitions.max(1)
}

/// Timings for one Fibonacci index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FibonacciRow {
    pub n: u64,
    pub lru: Duration,
    pub splay: Duration,
}

/// Times the memoized Fibonacci evaluator for every index in `config.n_values()`, once backed by
/// an unbounded LRU cache and once by a splay tree. Both caches persist across indices.
pub fn compare_fibonacci(config: &Config) -> Result<Vec<FibonacciRow>> {
    config.validate()?;
    let mut lru = LruCache::new(usize::max_value());
    let mut tree = SplayMap::new();

    let rows = config
        .n_values()
        .map(|n| {
            let lru_time = time_average(config.repetitions, || {
                fibonacci(n, &mut lru);
            });
            let splay_time = time_average(config.repetitions, || {
                fibonacci(n, &mut tree);
            });
            info!("Completed measurements for n={}", n);
            debug!("splay tree holds {} terms with height {}", tree.len(), tree.height());
            FibonacciRow {
                n,
                lru: lru_time,
                splay: splay_time,
            }
        })
        .collect();
    Ok(rows)
}

/// Timings for replaying one range-sum workload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeSumReport {
    pub uncached: Duration,
    pub cached: Duration,
}

impl RangeSumReport {
    /// Ratio of uncached to cached time.
    pub fn speedup(&self) -> f64 {
        let cached = self.cached.as_secs_f64();
        if cached == 0.0 {
            return f64::INFINITY;
        }
        self.uncached.as_secs_f64() / cached
    }
}

/// Generates a seeded range-sum workload and times it with and without the LRU range cache.
pub fn compare_range_sum(config: &Config) -> Result<RangeSumReport> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let array = range_sum::generate_array(&mut rng, config.array_size);
    let queries: Vec<Query> = range_sum::generate_queries(
        &mut rng,
        config.array_size,
        config.num_queries,
        config.range_ratio,
    )?;
    debug!("generated {} queries over {} elements", queries.len(), array.len());

    let start = Instant::now();
    let uncached_results = range_sum::run_uncached(&array, &queries)?;
    let uncached = start.elapsed();
    info!("Completed uncached replay in {:.2?}", uncached);

    let start = Instant::now();
    let cached_results = range_sum::run_cached(&array, &queries, config.cache_capacity)?;
    let cached = start.elapsed();
    info!("Completed cached replay in {:.2?}", cached);

    debug_assert_eq!(uncached_results, cached_results);
    Ok(RangeSumReport { uncached, cached })
}

/// Writes the Fibonacci timings as a table with centered columns.
pub fn write_fibonacci_table<W>(writer: &mut W, rows: &[FibonacciRow]) -> Result<()>
where
    W: Write,
{
    writeln!(
        writer,
        "{:^width$}{:^width$}{:^width$}",
        "n",
        "LRU Cache Time (s)",
        "Splay Tree Time (s)",
        width = COLUMN_WIDTH,
    )?;
    writeln!(writer, "{}", "-".repeat(COLUMN_WIDTH * 3))?;
    for row in rows {
        writeln!(
            writer,
            "{:^width$}{:^width$.8}{:^width$.8}",
            row.n,
            row.lru.as_secs_f64(),
            row.splay.as_secs_f64(),
            width = COLUMN_WIDTH,
        )?;
    }
    Ok(())
}

/// Writes the range-sum timings and the speedup of the cached replay.
pub fn write_range_sum_report<W>(writer: &mut W, report: &RangeSumReport) -> Result<()>
where
    W: Write,
{
    writeln!(writer, "Time without caching: {:.2} seconds", report.uncached.as_secs_f64())?;
    writeln!(writer, "Time with LRU cache: {:.2} seconds", report.cached.as_secs_f64())?;
    writeln!(writer, "Speedup: {:.2}x", report.speedup())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        compare_fibonacci, compare_range_sum, time_average, write_fibonacci_table,
        write_range_sum_report, Config, FibonacciRow, RangeSumReport,
    };
    use std::time::Duration;

    #[test]
    fn test_default_n_values() {
        let config = Config::default();
        let n_values: Vec<u64> = config.n_values().collect();
        assert_eq!(n_values.len(), 20);
        assert_eq!(n_values.first(), Some(&0));
        assert_eq!(n_values.last(), Some(&950));
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());
        assert!(Config::default().step(0).validate().is_err());
        assert!(Config::default().repetitions(0).validate().is_err());
        assert!(Config::default().cache_capacity(0).validate().is_err());
        assert!(Config::default().array_size(1).validate().is_err());
    }

    #[test]
    fn test_time_average_runs_each_repetition() {
        let mut calls = 0;
        time_average(4, || calls += 1);
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_compare_fibonacci() {
        let config = Config::default().max_n(100).step(25).repetitions(2);
        let rows = compare_fibonacci(&config).unwrap();
        assert_eq!(rows.iter().map(|row| row.n).collect::<Vec<u64>>(), vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn test_compare_range_sum() {
        let config = Config::default().array_size(500).num_queries(200).cache_capacity(10).seed(3);
        assert!(compare_range_sum(&config).is_ok());
        assert!(compare_range_sum(&config.array_size(1)).is_err());
    }

    #[test]
    fn test_write_fibonacci_table() {
        let rows = vec![FibonacciRow {
            n: 50,
            lru: Duration::from_millis(1),
            splay: Duration::from_millis(2),
        }];
        let mut output = Vec::new();
        write_fibonacci_table(&mut output, &rows).unwrap();
        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 60);
        assert_eq!(lines[1], "-".repeat(60));
        assert!(lines[2].contains("0.00100000"));
        assert!(lines[2].contains("0.00200000"));
        assert_eq!(lines[2].trim_start().split_whitespace().next(), Some("50"));
    }

    #[test]
    fn test_write_range_sum_report() {
        let report = RangeSumReport {
            uncached: Duration::from_secs(3),
            cached: Duration::from_secs(1),
        };
        assert!((report.speedup() - 3.0).abs() < 1e-9);

        let mut output = Vec::new();
        write_range_sum_report(&mut output, &report).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Speedup: 3.00x"));
    }
}
