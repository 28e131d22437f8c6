use smallvec::SmallVec;

use super::Emitter;
use crate::{
    TrapgenError, Vector, VectorSpec,
    asm::{self, Instruction, Line},
};

/// Entry trampoline of a single vector.
///
/// On entry the hardware has pushed the interrupt frame and, for some
/// exceptions, an error code. The trampoline pushes a zero in place of the
/// error code when the hardware did not, then pushes the vector number and
/// jumps to the dispatch routine. The dispatch routine therefore always sees
/// `[vector][error code][interrupt frame]` on the stack.
#[derive(Debug, Clone)]
pub struct Stub<'a> {
    spec: &'a VectorSpec,
    body: SmallVec<[Instruction<'a>; 3]>,
}

impl<'a> Stub<'a> {
    /// Builds the trampoline for `spec`, jumping to `dispatch`.
    pub fn new(spec: &'a VectorSpec, dispatch: &'a str) -> Self {
        let mut body = SmallVec::new();

        // The placeholder must sit below the vector number.
        if spec.needs_padding() {
            body.push(Instruction::Push(0));
        }

        body.push(Instruction::Push(u64::from(spec.vector.0)));
        body.push(Instruction::Jmp(dispatch));

        Self { spec, body }
    }

    /// Returns the vector this trampoline serves.
    pub fn vector(&self) -> Vector {
        self.spec.vector
    }

    /// Returns the label of the entry point.
    pub fn label(&self) -> &'a str {
        &self.spec.label
    }

    /// Returns whether the trampoline pushes a placeholder error code.
    pub fn is_padded(&self) -> bool {
        self.spec.needs_padding()
    }

    /// Returns the instructions of the trampoline body.
    pub fn body(&self) -> &[Instruction<'a>] {
        &self.body
    }

    /// Returns the values pushed before the jump, in push order.
    pub fn pushes(&self) -> impl Iterator<Item = u64> + '_ {
        self.body.iter().filter_map(|instruction| match instruction {
            Instruction::Push(value) => Some(*value),
            Instruction::Jmp(_) => None,
        })
    }

    /// Returns the symbol the trampoline jumps to.
    pub fn target(&self) -> Option<&'a str> {
        self.body.iter().find_map(|instruction| match instruction {
            Instruction::Jmp(symbol) => Some(*symbol),
            Instruction::Push(_) => None,
        })
    }

    /// Returns the assembler lines of the trampoline, including the
    /// trailing separator.
    pub fn lines(&self) -> impl Iterator<Item = Line<'a>> + '_ {
        let label = self.label();

        [Line::Global(label), Line::Label(label)]
            .into_iter()
            .chain(self.body.iter().copied().map(Line::Instruction))
            .chain(std::iter::once(Line::Blank))
    }
}

impl Emitter<'_> {
    /// Writes the text section: the dispatch routine declaration followed by
    /// one trampoline per vector.
    pub fn emit_stubs(&self, out: &mut impl std::fmt::Write) -> Result<(), TrapgenError> {
        let options = self.options();

        tracing::debug!(
            section = %options.text_section,
            dispatch = %options.dispatch_symbol,
            "emitting trampolines"
        );

        asm::write_lines(
            out,
            [
                Line::Section(&options.text_section),
                Line::Extern(&options.dispatch_symbol),
            ],
        )?;

        for stub in self.stubs() {
            tracing::trace!(
                vector = %stub.vector(),
                label = stub.label(),
                padded = stub.is_padded(),
                "trampoline"
            );

            asm::write_lines(out, stub.lines())?;
        }

        Ok(())
    }
}
