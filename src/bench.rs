use std::fmt;
use std::hint::black_box;

use serde::Serialize;

use crate::data::model::{BoxedSequence, DatasetRegistry, FlatVector, VectorPair};
use crate::distance::{euclidean_on_arrays, euclidean_on_lists};

// ---------------------------------------------------------------------------
// Consume sink
// ---------------------------------------------------------------------------

/// Receives every computed distance so the optimizer cannot drop the work.
pub trait Sink {
    fn consume(&mut self, value: f64);
}

/// Sink that only hands the value to [`std::hint::black_box`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Blackhole;

impl Sink for Blackhole {
    #[inline]
    fn consume(&mut self, value: f64) {
        black_box(value);
    }
}

impl<F: FnMut(f64)> Sink for F {
    fn consume(&mut self, value: f64) {
        self(value)
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// The two timed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Arrays,
    Lists,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Arrays, Operation::Lists];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Arrays => "arrays",
            Operation::Lists => "lists",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// DistanceCase – one benchmark parameter value
// ---------------------------------------------------------------------------

/// Vectors of one configured length, resolved once before timing starts.
#[derive(Debug, Clone, Copy)]
pub struct DistanceCase<'a> {
    size: usize,
    flat: &'a VectorPair<FlatVector>,
    boxed: &'a VectorPair<BoxedSequence>,
}

impl<'a> DistanceCase<'a> {
    /// Look up both representations for `size`.
    ///
    /// # Panics
    ///
    /// Panics if the registry holds no dataset of that length. The benchmark
    /// sizes must match the test data; a mismatch is a configuration bug.
    pub fn setup(registry: &'a DatasetRegistry, size: usize) -> Self {
        match (registry.flat(size), registry.sequences(size)) {
            (Some(flat), Some(boxed)) => Self { size, flat, boxed },
            _ => panic!(
                "no dataset of length {size} (loaded sizes: {:?})",
                registry.sizes().collect::<Vec<_>>()
            ),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance over the flat buffers.
    #[inline]
    pub fn euclidean_on_arrays(&self) -> f64 {
        euclidean_on_arrays(&self.flat.v1, &self.flat.v2)
    }

    /// Distance over the boxed sequences.
    #[inline]
    pub fn euclidean_on_lists(&self) -> f64 {
        euclidean_on_lists(&self.boxed.v1, &self.boxed.v2)
    }

    /// Run one operation and feed its result to `sink`.
    #[inline]
    pub fn run<S: Sink + ?Sized>(&self, op: Operation, sink: &mut S) {
        let result = match op {
            Operation::Arrays => self.euclidean_on_arrays(),
            Operation::Lists => self.euclidean_on_lists(),
        };
        sink.consume(result);
    }
}
