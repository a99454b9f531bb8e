/// Interactive session — collects a root path and a yes/no
/// confirmation, then runs the sweep.
///
/// Generic over `BufRead`/`Write` so the whole dialogue can be
/// exercised in tests with in-memory buffers; the binary passes a
/// locked stdin and stdout. Every user-visible message goes to
/// `output`; logging goes through `tracing` and never touches the
/// dialogue stream.
use jsonsweep_core::sweeper;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;

/// The fixed suffix this frontend sweeps for.
pub const TARGET_SUFFIX: &str = ".json";

/// Run one interactive session: prompt, validate, confirm, sweep.
///
/// Nothing is deleted unless the root is an existing directory and
/// the confirmation response is exactly `y` (case-insensitive).
/// A failed deletion propagates and aborts the session; the walk does
/// not resume.
pub fn run_session<R, W>(input: &mut R, output: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(
        output,
        "Enter the path of the directory to scan for {TARGET_SUFFIX} files: "
    )?;
    output.flush()?;
    let root = read_trimmed(input)?;
    let root = Path::new(&root);

    if !root.is_dir() {
        writeln!(output, "Error: The provided path is not a valid directory.")?;
        return Ok(());
    }

    write!(
        output,
        "Are you sure you want to delete all {TARGET_SUFFIX} files in '{}'? (y/n): ",
        root.display()
    )?;
    output.flush()?;
    let answer = read_trimmed(input)?.to_lowercase();

    if answer != "y" {
        writeln!(output, "Operation canceled.")?;
        return Ok(());
    }

    let stats = sweeper::sweep(root, TARGET_SUFFIX, |path| {
        // A write failure here must not interrupt the deletion walk.
        let _ = writeln!(output, "Deleting: {}", path.display());
    })?;
    writeln!(output, "All {TARGET_SUFFIX} files have been deleted.")?;

    debug!(
        "session done: {} deleted in {:?}",
        stats.files_deleted, stats.duration
    );
    Ok(())
}

/// Read one line from `input`, trimming surrounding whitespace.
/// End-of-input reads as an empty response.
fn read_trimmed<R: BufRead>(input: &mut R) -> std::io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
