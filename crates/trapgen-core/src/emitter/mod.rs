mod dispatch;
mod stub;

pub use self::stub::Stub;
use crate::{TrapgenError, VectorTable, asm};

/// Symbols and sections shared with the kernel that links the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterOptions {
    /// External routine every trampoline jumps to.
    pub dispatch_symbol: String,

    /// Global symbol of the trampoline address table.
    pub table_symbol: String,

    /// Section holding the trampolines.
    pub text_section: String,

    /// Section holding the address table.
    pub data_section: String,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            dispatch_symbol: String::from("handleTrap"),
            table_symbol: String::from("trap_table"),
            text_section: String::from(".text"),
            data_section: String::from(".data"),
        }
    }
}

/// Emits the trampolines and the dispatch table for a [`VectorTable`].
///
/// The output is a pure function of the table and the options: emitting the
/// same table twice yields byte-identical text.
#[derive(Debug, Clone)]
pub struct Emitter<'a> {
    table: &'a VectorTable,
    options: EmitterOptions,
}

impl<'a> Emitter<'a> {
    /// Creates an emitter with the default link contract.
    pub fn new(table: &'a VectorTable) -> Result<Self, TrapgenError> {
        Self::with_options(table, EmitterOptions::default())
    }

    /// Creates an emitter with the given link contract.
    ///
    /// Fails if a contract symbol is not a valid identifier or collides with
    /// a trampoline label or with the other symbol, or if a section name is
    /// empty or contains whitespace.
    pub fn with_options(
        table: &'a VectorTable,
        options: EmitterOptions,
    ) -> Result<Self, TrapgenError> {
        for symbol in [&options.dispatch_symbol, &options.table_symbol] {
            if !asm::is_identifier(symbol) {
                return Err(TrapgenError::InvalidSymbol(symbol.clone()));
            }

            if let Some(vector) = table.position(symbol) {
                return Err(TrapgenError::SymbolCollision {
                    symbol: symbol.clone(),
                    vector,
                });
            }
        }

        if options.dispatch_symbol == options.table_symbol {
            return Err(TrapgenError::DuplicateSymbol(options.table_symbol.clone()));
        }

        for section in [&options.text_section, &options.data_section] {
            if section.is_empty() || section.chars().any(char::is_whitespace) {
                return Err(TrapgenError::InvalidSection(section.clone()));
            }
        }

        Ok(Self { table, options })
    }

    /// Returns the link contract in use.
    pub fn options(&self) -> &EmitterOptions {
        &self.options
    }

    /// Returns the trampoline of every vector, in vector order.
    pub fn stubs(&self) -> impl ExactSizeIterator<Item = Stub<'_>> {
        let dispatch = self.options.dispatch_symbol.as_str();
        self.table.iter().map(move |spec| Stub::new(spec, dispatch))
    }

    /// Writes the complete assembler source: trampolines first, then the
    /// dispatch table.
    pub fn emit(&self, out: &mut impl std::fmt::Write) -> Result<(), TrapgenError> {
        self.emit_stubs(out)?;
        self.emit_dispatch_table(out)?;
        Ok(())
    }

    /// Renders the complete assembler source into a string.
    pub fn render(&self) -> Result<String, TrapgenError> {
        let mut output = String::new();
        self.emit(&mut output)?;
        Ok(output)
    }

    /// Renders the complete assembler source and writes it to `writer`.
    pub fn write_to(&self, mut writer: impl std::io::Write) -> Result<(), TrapgenError> {
        let output = self.render()?;
        writer.write_all(output.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
