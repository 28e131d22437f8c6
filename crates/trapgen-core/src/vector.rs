use std::borrow::Cow;

/// An interrupt vector number.
///
/// The `Display` implementation renders the plain decimal number, which is
/// the form used in emitted immediates and synthesized labels.
///
/// # Examples
///
/// ```
/// # use trapgen_core::Vector;
/// assert_eq!(format!("{}", Vector(200)), "200");
/// assert_eq!(format!("{:?}", Vector(14)), "0x0e");
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector(pub u8);

impl Vector {
    /// Creates a new instance of the `Vector` type.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the vector number as a table index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns an iterator over every vector, `0..=255`, in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Vector> + ExactSizeIterator {
        (0..=u8::MAX).map(Vector)
    }
}

impl From<u8> for Vector {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Vector> for u8 {
    fn from(value: Vector) -> u8 {
        value.0
    }
}

impl std::fmt::Debug for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a single interrupt vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorSpec {
    /// The vector number.
    ///
    /// This is also the position of the entry in every emitted table.
    pub vector: Vector,

    /// Name of the trampoline entry point.
    pub label: Cow<'static, str>,

    /// Whether the CPU pushes an error code before invoking the handler.
    pub has_hw_error_code: bool,
}

impl VectorSpec {
    /// Prefix of the labels synthesized for vectors without an
    /// architectural name.
    pub const EXTERNAL_PREFIX: &'static str = "vector";

    /// Creates a new vector classification.
    pub fn new(
        vector: Vector,
        label: impl Into<Cow<'static, str>>,
        has_hw_error_code: bool,
    ) -> Self {
        Self {
            vector,
            label: label.into(),
            has_hw_error_code,
        }
    }

    /// Creates the classification of an externally assigned interrupt.
    ///
    /// The label is synthesized from the vector number and no hardware
    /// error code is pushed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trapgen_core::{Vector, VectorSpec};
    /// let spec = VectorSpec::external(Vector(200));
    /// assert_eq!(spec.label, "vector200");
    /// assert!(!spec.has_hw_error_code);
    /// ```
    pub fn external(vector: Vector) -> Self {
        Self {
            vector,
            label: Cow::Owned(format!("{}{}", Self::EXTERNAL_PREFIX, vector)),
            has_hw_error_code: false,
        }
    }

    /// Returns whether the trampoline must push a placeholder error code.
    pub fn needs_padding(&self) -> bool {
        !self.has_hw_error_code
    }
}
