//! AMD64 trap classification.
//!
//! Vectors `0..32` are the architecturally defined exceptions listed in
//! [`EXCEPTIONS`]; ten of them have a hardware-pushed error code. Vectors
//! `32..256` are externally assigned interrupts, named `vector<N>`, and
//! never carry an error code.

mod interrupt;

use trapgen_core::{Architecture, Vector, VectorSpec};

pub use self::interrupt::{EXCEPTIONS, ExceptionVector};

/// AMD64 architecture.
#[derive(Debug)]
pub struct Amd64;

impl Architecture for Amd64 {
    const EXCEPTION_COUNT: u8 = ExceptionVector::COUNT;

    fn vector_spec(vector: Vector) -> VectorSpec {
        let Some(&exception) = EXCEPTIONS.get(vector.index()) else {
            return VectorSpec::external(vector);
        };

        match exception.label() {
            Some(label) => VectorSpec::new(vector, label, exception.requires_error_code()),
            None => VectorSpec::external(vector),
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
