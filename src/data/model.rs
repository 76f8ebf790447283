use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Vector representations
// ---------------------------------------------------------------------------

/// Contiguous, fixed-length buffer of `f64` with no per-element allocation.
pub type FlatVector = Box<[f64]>;

/// Sequence whose elements each live in their own heap allocation, so every
/// access goes through one extra pointer.
pub type BoxedSequence = Vec<Box<f64>>;

/// The two vectors of one test case, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPair<V> {
    pub v1: V,
    pub v2: V,
}

impl<V> VectorPair<V> {
    pub fn new(v1: V, v2: V) -> Self {
        Self { v1, v2 }
    }
}

impl VectorPair<FlatVector> {
    /// Build the flat form from two parsed rows.
    pub fn flat_from(a: &[f64], b: &[f64]) -> Self {
        Self::new(a.into(), b.into())
    }
}

impl VectorPair<BoxedSequence> {
    /// Build the boxed form from two parsed rows, one allocation per value.
    pub fn boxed_from(a: &[f64], b: &[f64]) -> Self {
        Self::new(
            a.iter().copied().map(Box::new).collect(),
            b.iter().copied().map(Box::new).collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// DatasetRegistry – both representations keyed by vector length
// ---------------------------------------------------------------------------

/// Loaded test vectors, keyed by vector length.
///
/// Both maps always carry the same keys with the same values in the same
/// order; the only way to add an entry is [`DatasetRegistry::insert_rows`],
/// which writes both maps at once. Once handed out by the loader the
/// registry is never mutated.
#[derive(Debug, Clone, Default)]
pub struct DatasetRegistry {
    flat: BTreeMap<usize, VectorPair<FlatVector>>,
    boxed: BTreeMap<usize, VectorPair<BoxedSequence>>,
}

impl DatasetRegistry {
    /// Insert a parsed pair of rows under the length of `a`, replacing any
    /// earlier pair of that length. Returns `true` if a pair was replaced.
    ///
    /// The length of `b` is not checked against `a`.
    pub(crate) fn insert_rows(&mut self, a: &[f64], b: &[f64]) -> bool {
        let key = a.len();
        let replaced = self.flat.insert(key, VectorPair::flat_from(a, b)).is_some();
        self.boxed.insert(key, VectorPair::boxed_from(a, b));
        replaced
    }

    /// Flat-buffer pair for the given length.
    pub fn flat(&self, size: usize) -> Option<&VectorPair<FlatVector>> {
        self.flat.get(&size)
    }

    /// Boxed-sequence pair for the given length.
    pub fn sequences(&self, size: usize) -> Option<&VectorPair<BoxedSequence>> {
        self.boxed.get(&size)
    }

    /// Whether a dataset of this length was loaded.
    pub fn contains(&self, size: usize) -> bool {
        self.flat.contains_key(&size)
    }

    /// All loaded vector lengths, ascending.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.flat.keys().copied()
    }

    /// Number of distinct vector lengths.
    pub fn len(&self) -> usize {
        self.flat.len()
    }

    /// Whether nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }
}
