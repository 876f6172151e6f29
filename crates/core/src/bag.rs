//! Bag module - fair random shape generation
//!
//! Implements the bag randomizer over the 18-shape catalog: the bag starts
//! as a shuffled copy of the full catalog, draws pop a uniformly random
//! remaining element, and the bag refills eagerly the moment it empties.
//! Within one unrefilled window every shape appears exactly once, so the
//! repeat distance between two draws of the same shape is bounded.
//!
//! Randomness comes from a seeded LCG so that a seed reproduces a session.

use crate::catalog::{Shape, ShapeCatalog};

/// Simple LCG (Linear Congruential Generator) RNG
///
/// Uses the Numerical Recipes constants. Small, deterministic, and plenty
/// for shuffling a bag.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would produce a degenerate sequence.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice with Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state, usable as a seed to resume the stream
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Fair random sequence of shapes from a fixed catalog
#[derive(Debug, Clone)]
pub struct PieceBag {
    catalog: &'static ShapeCatalog,
    remaining: Vec<&'static Shape>,
    rng: SimpleRng,
}

impl PieceBag {
    /// Create a bag over the standard catalog with the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_catalog(ShapeCatalog::standard(), seed)
    }

    /// Create a bag over an arbitrary catalog
    pub fn with_catalog(catalog: &'static ShapeCatalog, seed: u32) -> Self {
        let mut bag = Self {
            catalog,
            remaining: Vec::with_capacity(catalog.len()),
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.remaining.clear();
        self.remaining.extend(self.catalog.shapes());
        self.rng.shuffle(&mut self.remaining);
    }

    /// Draw the next shape
    ///
    /// Pops a uniformly random element of the remaining set. The bag
    /// refills at the moment of exhaustion, so it can never be observed
    /// empty.
    pub fn next_shape(&mut self) -> &'static Shape {
        let index = self.rng.next_range(self.remaining.len() as u32) as usize;
        let shape = self.remaining.swap_remove(index);
        if self.remaining.is_empty() {
            self.refill();
        }
        shape
    }

    /// Number of shapes left before the next refill
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}
