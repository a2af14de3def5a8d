//! A timing harness comparing searches in a tree built from randomly ordered keys against one
//! built from ascending keys. The first stays short on average while the second degenerates into
//! a chain, so searching it costs `O(n)` per key.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::harness::{self, HarnessConfig, Shape};
//!
//! let config = HarnessConfig {
//!     sizes: vec![64],
//!     seed: Some(1),
//! };
//! let measurements = harness::run(&config).unwrap();
//!
//! assert_eq!(measurements.len(), 2);
//! let chain = measurements.iter().find(|m| m.shape == Shape::Ascending).unwrap();
//! assert_eq!(chain.height, 64);
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sequence;
use crate::tree::OrderedTree;

/// The sizes measured when none are given.
pub const DEFAULT_SIZES: [usize; 5] = [100, 500, 1000, 5000, 10000];

/// Errors reported by the harness.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum HarnessError {
    /// There was nothing to measure.
    #[error("no tree sizes to measure")]
    NoSizes,
    /// A tree of size zero has nothing to search.
    #[error("tree sizes must be greater than zero")]
    ZeroSize,
    /// A key that was inserted could not be found again.
    #[error("key {key} went missing from the {shape} tree of size {size}")]
    KeyNotFound {
        /// The key that was searched for.
        key: u32,
        /// How the tree was built.
        shape: Shape,
        /// How many keys were inserted.
        size: usize,
    },
}

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

/// The order in which keys are inserted, which decides the shape of the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    /// A random permutation. Expected height is `O(lg n)`.
    Random,
    /// Strictly increasing keys. The tree is a chain of height `n`.
    Ascending,
}

impl Shape {
    /// Every shape, in the order they are measured.
    pub const ALL: [Shape; 2] = [Shape::Random, Shape::Ascending];

    /// Generates `size` keys in this shape's insertion order.
    pub fn keys<R: Rng + ?Sized>(self, size: usize, rng: &mut R) -> Vec<u32> {
        match self {
            Self::Random => sequence::shuffled(size, rng),
            Self::Ascending => sequence::ascending(size),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Random => "random",
            Self::Ascending => "ascending",
        };
        f.pad(name)
    }
}

/// Which sizes to measure and how to seed the random shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Number of keys in each measured tree.
    pub sizes: Vec<usize>,
    /// Seed for the random shape. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            seed: None,
        }
    }
}

impl HarnessConfig {
    /// Checks the config can be run.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(HarnessError::NoSizes);
        }
        if self.sizes.contains(&0) {
            return Err(HarnessError::ZeroSize);
        }
        Ok(())
    }
}

/// Timings for one tree.
#[derive(Clone, Debug)]
pub struct Measurement {
    /// Number of keys inserted.
    pub size: usize,
    /// Insertion order used.
    pub shape: Shape,
    /// Height of the tree after all inserts.
    pub height: usize,
    /// Time spent inserting every key.
    pub insert: Duration,
    /// Time spent searching for every key.
    pub search: Duration,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>8} {:<10} {:>8} {:>14.6} {:>14.6}",
            self.size,
            self.shape,
            self.height,
            self.insert.as_secs_f64(),
            self.search.as_secs_f64()
        )
    }
}

/// Builds a tree of `size` keys in `shape`'s order, then searches for every key, timing both
/// batches.
pub fn measure<R: Rng + ?Sized>(size: usize, shape: Shape, rng: &mut R) -> Result<Measurement> {
    if size == 0 {
        return Err(HarnessError::ZeroSize);
    }
    let keys = shape.keys(size, rng);
    let mut tree = OrderedTree::new();

    let start = Instant::now();
    for key in &keys {
        tree.insert(*key);
    }
    let insert = start.elapsed();

    let start = Instant::now();
    for key in &keys {
        if tree.search(key).is_none() {
            return Err(HarnessError::KeyNotFound {
                key: *key,
                shape,
                size,
            });
        }
    }
    let search = start.elapsed();

    let measurement = Measurement {
        size,
        shape,
        height: tree.height(),
        insert,
        search,
    };
    debug!(
        "measured {} tree of {} keys: height {}, search {:?}",
        shape, size, measurement.height, search
    );
    Ok(measurement)
}

/// Measures every shape at every configured size.
pub fn run(config: &HarnessConfig) -> Result<Vec<Measurement>> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("running search harness with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut measurements = Vec::with_capacity(config.sizes.len() * Shape::ALL.len());
    for size in &config.sizes {
        for shape in Shape::ALL.iter() {
            measurements.push(measure(*size, *shape, &mut rng)?);
        }
    }

    Ok(measurements)
}
