/// Data layer: vector representations and dataset loading.
///
/// Architecture:
/// ```text
///   resources/test.in  (pairs of space-separated rows)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse line pairs → DatasetRegistry
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ DatasetRegistry  │  size → (flat pair, boxed pair)
///   └─────────────────┘
/// ```

pub mod loader;
pub mod model;

pub use loader::{load_embedded, load_file, load_reader, load_str, LoadError, EMBEDDED_DATASET};
pub use model::{BoxedSequence, DatasetRegistry, FlatVector, VectorPair};
