//! GNU assembler (AT&T syntax) line model.
//!
//! Only the handful of directives and instructions the trampolines and the
//! dispatch table need are modelled. Every [`Line`] renders to exactly one
//! line of source text, without the trailing newline.

/// A single line of assembler source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `.section <name>`
    Section(&'a str),

    /// `.extern <symbol>`
    Extern(&'a str),

    /// `.global <symbol>`
    Global(&'a str),

    /// `<symbol>:`
    Label(&'a str),

    /// An instruction, indented by one tab.
    Instruction(Instruction<'a>),

    /// `.quad <symbol>`, indented by one tab.
    Quad(&'a str),

    /// An empty separator line.
    Blank,
}

/// An instruction emitted inside a trampoline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction<'a> {
    /// `pushq $<imm>`: pushes a 64-bit sign-extended immediate.
    Push(u64),

    /// `jmp <symbol>`: unconditional jump.
    Jmp(&'a str),
}

impl std::fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Section(name) => write!(f, ".section {name}"),
            Self::Extern(symbol) => write!(f, ".extern {symbol}"),
            Self::Global(symbol) => write!(f, ".global {symbol}"),
            Self::Label(symbol) => write!(f, "{symbol}:"),
            Self::Instruction(instruction) => write!(f, "\t{instruction}"),
            Self::Quad(symbol) => write!(f, "\t.quad {symbol}"),
            Self::Blank => Ok(()),
        }
    }
}

impl std::fmt::Display for Instruction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Push(value) => write!(f, "pushq ${value}"),
            Self::Jmp(symbol) => write!(f, "jmp {symbol}"),
        }
    }
}

/// Writes the given lines, each terminated by a newline.
pub fn write_lines<'a>(
    out: &mut impl std::fmt::Write,
    lines: impl IntoIterator<Item = Line<'a>>,
) -> std::fmt::Result {
    for line in lines {
        writeln!(out, "{line}")?;
    }

    Ok(())
}

/// Returns whether `symbol` is a valid assembler identifier.
///
/// Identifiers start with a letter, `_`, `.` or `$`, followed by any number
/// of letters, digits, `_`, `.` or `$`.
///
/// # Examples
///
/// ```
/// # use trapgen_core::asm::is_identifier;
/// assert!(is_identifier("page_fault"));
/// assert!(is_identifier("vector200"));
/// assert!(!is_identifier("200vector"));
/// assert!(!is_identifier("page fault"));
/// ```
pub fn is_identifier(symbol: &str) -> bool {
    let mut chars = symbol.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || matches!(first, '_' | '.' | '$') => {}
        _ => return false,
    }

    chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '$'))
}
