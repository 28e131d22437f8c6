use super::{generate, generate_to_file, run};
use crate::{Architecture, TrapgenError, Vector, arch::amd64::Amd64};

/// Splits the text section into `(label, body)` pairs.
fn trampolines(output: &str) -> Vec<(&str, Vec<&str>)> {
    let text = output.split(".section .data\n").next().unwrap_or_default();

    let mut result = Vec::new();
    let mut lines = text.lines().peekable();

    while let Some(line) = lines.next() {
        let Some(label) = line.strip_suffix(':') else {
            continue;
        };

        let mut body = Vec::new();
        while let Some(line) = lines.next_if(|line| !line.is_empty()) {
            body.push(line);
        }

        result.push((label, body));
    }

    result
}

fn table_entries(output: &str) -> Vec<&str> {
    output
        .lines()
        .skip_while(|line| *line != "trap_table:")
        .filter_map(|line| line.strip_prefix("\t.quad "))
        .collect()
}

#[test]
fn emits_one_trampoline_per_vector() -> Result<(), TrapgenError> {
    let output = generate()?;
    let trampolines = trampolines(&output);

    assert_eq!(trampolines.len(), 256);

    for (index, (label, body)) in trampolines.iter().enumerate() {
        let spec = Amd64::vector_spec(Vector(index as u8));
        assert_eq!(*label, spec.label);

        let push = format!("\tpushq ${index}");
        if spec.has_hw_error_code {
            assert_eq!(*body, [push.as_str(), "\tjmp handleTrap"], "{label}");
        }
        else {
            assert_eq!(
                *body,
                ["\tpushq $0", push.as_str(), "\tjmp handleTrap"],
                "{label}"
            );
        }
    }

    Ok(())
}

#[test]
fn page_fault_has_single_push() -> Result<(), TrapgenError> {
    let output = generate()?;

    assert!(output.contains(
        ".global page_fault\n\
         page_fault:\n\
         \tpushq $14\n\
         \tjmp handleTrap\n"
    ));

    Ok(())
}

#[test]
fn division_error_is_padded() -> Result<(), TrapgenError> {
    let output = generate()?;

    assert!(output.contains(
        ".global division_error\n\
         division_error:\n\
         \tpushq $0\n\
         \tpushq $0\n\
         \tjmp handleTrap\n"
    ));

    Ok(())
}

#[test]
fn vector_200_is_synthesized_and_tabled() -> Result<(), TrapgenError> {
    let output = generate()?;

    assert!(output.contains(
        ".global vector200\n\
         vector200:\n\
         \tpushq $0\n\
         \tpushq $200\n\
         \tjmp handleTrap\n"
    ));

    let entries = table_entries(&output);
    assert_eq!(entries.len(), 256);
    assert_eq!(entries[200], "vector200");

    Ok(())
}

#[test]
fn table_matches_trampoline_order() -> Result<(), TrapgenError> {
    let output = generate()?;

    let labels = trampolines(&output)
        .into_iter()
        .map(|(label, _)| label)
        .collect::<Vec<_>>();

    assert_eq!(table_entries(&output), labels);
    assert!(output.contains(".section .data\n.global trap_table\ntrap_table:\n"));

    Ok(())
}

#[test]
fn generation_is_idempotent() -> Result<(), TrapgenError> {
    assert_eq!(generate()?, generate()?);
    Ok(())
}

#[test]
fn generate_to_file_writes_output() -> Result<(), TrapgenError> {
    let path = std::env::temp_dir().join(format!("trapgen-{}.S", std::process::id()));

    generate_to_file(&path)?;
    let written = std::fs::read_to_string(&path)?;
    std::fs::remove_file(&path)?;

    assert_eq!(written, generate()?);
    Ok(())
}

#[test]
fn run_without_arguments_generates() -> Result<(), TrapgenError> {
    assert_eq!(run(std::iter::empty())?, generate()?);
    Ok(())
}

#[test]
fn run_rejects_arguments() {
    let result = run([String::from("foo")]);
    assert!(matches!(
        result,
        Err(TrapgenError::UnexpectedArgument(argument)) if argument == "foo"
    ));

    let result = run([String::from("--help"), String::from("bar")]);
    assert!(matches!(
        result,
        Err(TrapgenError::UnexpectedArgument(argument)) if argument == "--help"
    ));
}
