use std::borrow::Cow;

use super::VectorTable;
use crate::{Architecture, TrapgenError, Vector, VectorSpec};

///////////////////////////////////////////////////////////////////////////////
// Mock Architecture
///////////////////////////////////////////////////////////////////////////////

struct MockArch;

impl Architecture for MockArch {
    const EXCEPTION_COUNT: u8 = 32;

    fn vector_spec(vector: Vector) -> VectorSpec {
        match vector.0 {
            8 | 14 => VectorSpec::new(vector, format!("exception{}", vector), true),
            0..32 => VectorSpec::new(vector, format!("exception{}", vector), false),
            _ => VectorSpec::external(vector),
        }
    }
}

fn mock_specs() -> Vec<VectorSpec> {
    Vector::all().map(MockArch::vector_spec).collect()
}

///////////////////////////////////////////////////////////////////////////////
// Construction
///////////////////////////////////////////////////////////////////////////////

#[test]
fn builds_from_architecture() -> Result<(), TrapgenError> {
    let table = VectorTable::new::<MockArch>()?;

    assert_eq!(table.len(), VectorTable::VECTOR_COUNT);
    assert!(!table.is_empty());
    assert_eq!(table.exception_count(), 32);

    for (position, spec) in table.iter().enumerate() {
        assert_eq!(spec.vector.index(), position);
    }

    assert!(table.get(Vector(14)).has_hw_error_code);
    assert!(!table.get(Vector(0)).has_hw_error_code);
    assert_eq!(table.get(Vector(200)).label, "vector200");

    Ok(())
}

#[test]
fn position_resolves_labels() -> Result<(), TrapgenError> {
    let table = VectorTable::new::<MockArch>()?;

    assert_eq!(table.position("exception14"), Some(Vector(14)));
    assert_eq!(table.position("vector255"), Some(Vector(255)));
    assert_eq!(table.position("handleTrap"), None);

    Ok(())
}

#[test]
fn every_label_is_unique() -> Result<(), TrapgenError> {
    let table = VectorTable::new::<MockArch>()?;

    for spec in &table {
        assert_eq!(table.position(&spec.label), Some(spec.vector));
    }

    Ok(())
}

///////////////////////////////////////////////////////////////////////////////
// Validation
///////////////////////////////////////////////////////////////////////////////

#[test]
fn rejects_missing_vector() {
    let mut specs = mock_specs();
    specs.pop();

    let result = VectorTable::from_specs(specs, 32);
    assert!(matches!(
        result,
        Err(TrapgenError::VectorCount {
            expected: 256,
            found: 255
        })
    ));
}

#[test]
fn rejects_extra_vector() {
    let mut specs = mock_specs();
    specs.push(VectorSpec::external(Vector(0)));

    let result = VectorTable::from_specs(specs, 32);
    assert!(matches!(
        result,
        Err(TrapgenError::VectorCount { found: 257, .. })
    ));
}

#[test]
fn rejects_reordered_vectors() {
    let mut specs = mock_specs();
    specs.swap(40, 41);

    let result = VectorTable::from_specs(specs, 32);
    assert!(matches!(
        result,
        Err(TrapgenError::VectorOutOfOrder {
            position: 40,
            vector: Vector(41)
        })
    ));
}

#[test]
fn rejects_duplicate_vector() {
    let mut specs = mock_specs();
    specs[7] = VectorSpec::new(Vector(6), "exception7", false);

    let result = VectorTable::from_specs(specs, 32);
    assert!(matches!(
        result,
        Err(TrapgenError::VectorOutOfOrder {
            position: 7,
            vector: Vector(6)
        })
    ));
}

#[test]
fn rejects_empty_label() {
    let mut specs = mock_specs();
    specs[15].label = Cow::Borrowed("");

    let result = VectorTable::from_specs(specs, 32);
    assert!(matches!(result, Err(TrapgenError::EmptyLabel(Vector(15)))));
}

#[test]
fn rejects_invalid_label() {
    let mut specs = mock_specs();
    specs[3].label = Cow::Borrowed("break point");

    let result = VectorTable::from_specs(specs, 32);
    assert!(matches!(result, Err(TrapgenError::InvalidSymbol(label)) if label == "break point"));
}

#[test]
fn rejects_duplicate_label() {
    let mut specs = mock_specs();
    specs[100].label = Cow::Borrowed("exception14");

    let result = VectorTable::from_specs(specs, 32);
    assert!(matches!(
        result,
        Err(TrapgenError::DuplicateLabel {
            first: Vector(14),
            second: Vector(100),
            ..
        })
    ));
}

#[test]
fn rejects_error_code_outside_exceptions() {
    let mut specs = mock_specs();
    specs[32].has_hw_error_code = true;

    let result = VectorTable::from_specs(specs, 32);
    assert!(matches!(
        result,
        Err(TrapgenError::UnexpectedErrorCode(Vector(32)))
    ));
}

#[test]
fn error_messages_name_the_vectors() {
    let err = TrapgenError::DuplicateLabel {
        label: String::from("page_fault"),
        first: Vector(14),
        second: Vector(15),
    };

    assert_eq!(
        err.to_string(),
        "Label `page_fault` used by vectors 14 and 15"
    );
}
