use crate::Vector;

/// An error that can occur while building or emitting a vector table.
#[derive(thiserror::Error, Debug)]
pub enum TrapgenError {
    /// An I/O error occurred while writing the output.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A formatting error occurred while rendering the output.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),

    /// The table does not hold exactly one entry per vector.
    #[error("Expected {expected} vectors, found {found}")]
    VectorCount {
        /// Number of vectors the table must hold.
        expected: usize,

        /// Number of vectors that were supplied.
        found: usize,
    },

    /// An entry sits at a position other than its vector number.
    #[error("Vector {vector} found at position {position}")]
    VectorOutOfOrder {
        /// Position of the entry in the supplied list.
        position: usize,

        /// Vector number the entry declares.
        vector: Vector,
    },

    /// A vector has an empty label.
    #[error("Vector {0} has an empty label")]
    EmptyLabel(Vector),

    /// A symbol is not a valid assembler identifier.
    #[error("Invalid symbol name `{0}`")]
    InvalidSymbol(String),

    /// Two vectors share the same label.
    #[error("Label `{label}` used by vectors {first} and {second}")]
    DuplicateLabel {
        /// The label in question.
        label: String,

        /// The first vector that uses the label.
        first: Vector,

        /// The second vector that uses the label.
        second: Vector,
    },

    /// A symbol of the link contract collides with a trampoline label.
    #[error("Symbol `{symbol}` collides with the label of vector {vector}")]
    SymbolCollision {
        /// The colliding symbol.
        symbol: String,

        /// The vector whose trampoline carries the same label.
        vector: Vector,
    },

    /// Two symbols of the link contract share the same name.
    #[error("Symbol `{0}` is used for both the dispatch routine and the table")]
    DuplicateSymbol(String),

    /// A section name is empty or contains whitespace.
    #[error("Invalid section name {0:?}")]
    InvalidSection(String),

    /// A vector outside the exception range claims a hardware error code.
    #[error("Vector {0} is not an exception and cannot carry a hardware error code")]
    UnexpectedErrorCode(Vector),

    /// The generator was invoked with an argument it does not accept.
    #[error("Unexpected argument `{0}`")]
    UnexpectedArgument(String),
}
