//! Architecture abstraction.

use crate::{Vector, VectorSpec};

/// Supplies the classification of every interrupt vector of an architecture.
///
/// Implementations are pure static data: the same vector must always yield
/// the same [`VectorSpec`], and the spec's `vector` field must equal the
/// vector it was requested for. [`VectorTable`] checks both.
///
/// [`VectorTable`]: crate::VectorTable
pub trait Architecture {
    /// Number of architecturally defined exception vectors.
    ///
    /// Vectors at or above this number are externally assigned interrupts
    /// and never carry a hardware error code.
    ///
    /// # Architecture-specific
    ///
    /// - **AMD64**: `32`
    const EXCEPTION_COUNT: u8;

    /// Returns the classification of the given vector.
    fn vector_spec(vector: Vector) -> VectorSpec;
}
