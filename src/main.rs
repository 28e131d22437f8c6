//! Writes the AMD64 interrupt entry trampolines and their dispatch table to
//! standard output.

use std::io::{BufWriter, Write as _};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = trapgen::run(std::env::args().skip(1))?;

    let mut stdout = BufWriter::new(std::io::stdout().lock());
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    tracing::info!(bytes = output.len(), "trampolines generated");
    Ok(())
}
