use super::Emitter;
use crate::{
    TrapgenError,
    asm::{self, Line},
};

impl Emitter<'_> {
    /// Writes the data section holding the dispatch table.
    ///
    /// The table has one pointer-sized slot per vector. Slot *i* holds the
    /// address of the trampoline of vector *i*, so the kernel can index it
    /// directly by vector number when populating its IDT.
    pub fn emit_dispatch_table(&self, out: &mut impl std::fmt::Write) -> Result<(), TrapgenError> {
        let options = self.options();

        tracing::debug!(
            section = %options.data_section,
            table = %options.table_symbol,
            entries = self.table.len(),
            "emitting dispatch table"
        );

        asm::write_lines(
            out,
            [
                Line::Section(&options.data_section),
                Line::Global(&options.table_symbol),
                Line::Label(&options.table_symbol),
            ],
        )?;

        asm::write_lines(out, self.table.iter().map(|spec| Line::Quad(&spec.label)))?;

        Ok(())
    }
}
