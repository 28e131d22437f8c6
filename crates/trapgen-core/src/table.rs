use indexmap::{IndexMap, map::Entry};

use crate::{Architecture, TrapgenError, Vector, VectorSpec, asm};

/// The validated classification of every interrupt vector.
///
/// A `VectorTable` always holds exactly [`VECTOR_COUNT`] entries, the entry
/// at position *i* describes vector *i*, and every label is a unique
/// assembler identifier. The table is immutable once built.
///
/// [`VECTOR_COUNT`]: Self::VECTOR_COUNT
#[derive(Debug, Clone)]
pub struct VectorTable {
    specs: Vec<VectorSpec>,
    symbols: IndexMap<String, Vector>,
    exception_count: u8,
}

impl VectorTable {
    /// Number of interrupt vectors.
    pub const VECTOR_COUNT: usize = 256;

    /// Builds the table from the classification of an architecture.
    pub fn new<Arch>() -> Result<Self, TrapgenError>
    where
        Arch: Architecture,
    {
        let specs = Vector::all().map(Arch::vector_spec).collect();
        Self::from_specs(specs, Arch::EXCEPTION_COUNT)
    }

    /// Validates a list of vector classifications and wraps it.
    ///
    /// `exception_count` is the number of leading vectors that may carry a
    /// hardware error code.
    pub fn from_specs(specs: Vec<VectorSpec>, exception_count: u8) -> Result<Self, TrapgenError> {
        if specs.len() != Self::VECTOR_COUNT {
            return Err(TrapgenError::VectorCount {
                expected: Self::VECTOR_COUNT,
                found: specs.len(),
            });
        }

        let mut symbols = IndexMap::with_capacity(specs.len());

        for (position, spec) in specs.iter().enumerate() {
            if spec.vector.index() != position {
                return Err(TrapgenError::VectorOutOfOrder {
                    position,
                    vector: spec.vector,
                });
            }

            if spec.label.is_empty() {
                return Err(TrapgenError::EmptyLabel(spec.vector));
            }

            if !asm::is_identifier(&spec.label) {
                return Err(TrapgenError::InvalidSymbol(spec.label.to_string()));
            }

            if spec.has_hw_error_code && spec.vector.0 >= exception_count {
                return Err(TrapgenError::UnexpectedErrorCode(spec.vector));
            }

            match symbols.entry(spec.label.to_string()) {
                Entry::Vacant(entry) => {
                    entry.insert(spec.vector);
                }
                Entry::Occupied(entry) => {
                    return Err(TrapgenError::DuplicateLabel {
                        label: entry.key().clone(),
                        first: *entry.get(),
                        second: spec.vector,
                    });
                }
            }
        }

        tracing::debug!(
            vectors = specs.len(),
            exception_count,
            with_error_code = specs.iter().filter(|spec| spec.has_hw_error_code).count(),
            "vector table built"
        );

        Ok(Self {
            specs,
            symbols,
            exception_count,
        })
    }

    /// Returns the number of vectors in the table.
    ///
    /// This is always [`VECTOR_COUNT`](Self::VECTOR_COUNT).
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `false`; a validated table is never empty.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Returns the number of architecturally defined exception vectors.
    pub fn exception_count(&self) -> u8 {
        self.exception_count
    }

    /// Returns the classification of the given vector.
    pub fn get(&self, vector: Vector) -> &VectorSpec {
        // Every vector has an entry, and it sits at its own index.
        &self.specs[vector.index()]
    }

    /// Returns the vector whose trampoline carries the given label.
    pub fn position(&self, label: &str) -> Option<Vector> {
        self.symbols.get(label).copied()
    }

    /// Returns an iterator over the classifications in vector order.
    pub fn iter(&self) -> std::slice::Iter<'_, VectorSpec> {
        self.specs.iter()
    }
}

impl<'a> IntoIterator for &'a VectorTable {
    type Item = &'a VectorSpec;
    type IntoIter = std::slice::Iter<'a, VectorSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
