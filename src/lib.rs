//! Build-time generator for interrupt entry trampolines.
//!
//! `trapgen` produces GNU assembler source containing one entry trampoline
//! per interrupt vector and a table of their addresses. Each trampoline
//! normalizes the stack to `[vector][error code][interrupt frame]`, pushing a
//! zero when the hardware did not supply an error code, and jumps to the
//! shared `handleTrap` routine. The table, `trap_table`, holds the
//! trampoline of vector *i* at slot *i*.
//!
//! The output is usually generated from a build script:
//!
//! ```no_run
//! let out_dir = std::env::var("OUT_DIR").unwrap();
//! trapgen::generate_to_file(format!("{out_dir}/traps.S")).unwrap();
//! ```

use std::{fs::File, io::BufWriter, path::Path};

#[doc(inline)]
pub use trapgen_core::{
    Architecture, Emitter, EmitterOptions, Stub, TrapgenError, Vector, VectorSpec, VectorTable,
    asm,
};

/// Architecture-specific classifications.
pub mod arch {
    #[cfg(feature = "arch-amd64")]
    #[doc(inline)]
    pub use trapgen_arch_amd64 as amd64;
}

/// Generates the trampolines and the dispatch table for AMD64.
///
/// The result is deterministic: every call returns the same text.
#[cfg(feature = "arch-amd64")]
pub fn generate() -> Result<String, TrapgenError> {
    let table = VectorTable::new::<trapgen_arch_amd64::Amd64>()?;
    Emitter::new(&table)?.render()
}

/// Runs the generator with the given command-line arguments, excluding the
/// program name.
///
/// The generator takes no arguments; any argument is rejected before
/// anything is rendered.
#[cfg(feature = "arch-amd64")]
pub fn run(args: impl IntoIterator<Item = String>) -> Result<String, TrapgenError> {
    if let Some(argument) = args.into_iter().next() {
        return Err(TrapgenError::UnexpectedArgument(argument));
    }

    generate()
}

/// Generates the AMD64 trampolines and writes them to `path`.
#[cfg(feature = "arch-amd64")]
pub fn generate_to_file(path: impl AsRef<Path>) -> Result<(), TrapgenError> {
    let path = path.as_ref();
    let table = VectorTable::new::<trapgen_arch_amd64::Amd64>()?;

    Emitter::new(&table)?.write_to(BufWriter::new(File::create(path)?))?;

    tracing::debug!(path = %path.display(), "trampolines written");
    Ok(())
}

#[cfg(all(test, feature = "arch-amd64"))]
#[path = "lib_tests.rs"]
mod tests;
