//! Core trap stub generation.
//!
//! This crate turns a classification of interrupt vectors into GNU assembler
//! source: one entry trampoline per vector, each normalizing the stack frame
//! to `[error code][vector]` before jumping to a shared dispatch routine, and
//! a table holding the address of every trampoline in vector order.
//!
//! The architecture-specific knowledge (which vectors carry a hardware error
//! code, and what they are called) is supplied through the [`Architecture`]
//! trait.

pub mod arch;
pub mod asm;
mod emitter;
mod error;
mod table;
mod vector;

pub use self::{
    arch::Architecture,
    emitter::{Emitter, EmitterOptions, Stub},
    error::TrapgenError,
    table::VectorTable,
    vector::{Vector, VectorSpec},
};
