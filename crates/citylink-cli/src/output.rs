//! Writing the closure table to disk.

use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use citylink_graph::Closure;
use std::path::{Path, PathBuf};

/// Prefix added to the input file name.
pub const OUTPUT_PREFIX: &str = "out-";

/// Where the closure of `input` is written: `out-<file name>`, placed in
/// `out_dir` when given, otherwise next to the input.
pub fn output_path(input: &Path, out_dir: Option<&Path>) -> Result<PathBuf> {
    let file_name = input.file_name().ok_or_else(|| {
        CliError::Custom(format!(
            "Cannot derive an output name from '{}'",
            input.display()
        ))
    })?;

    let mut name = std::ffi::OsString::from(OUTPUT_PREFIX);
    name.push(file_name);

    let dir = match out_dir {
        Some(dir) => dir,
        None => input.parent().unwrap_or_else(|| Path::new("")),
    };
    Ok(dir.join(name))
}

/// Write the `R* Table` followed by a blank line.
pub fn write_closure(closure: &Closure, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_path(dir)?;
    }

    let mut contents = ui::closure_table(closure);
    contents.push('\n');

    std::fs::write(path, contents)
        .with_path(path)
        .context(format!("Failed to write {}", path.display()))?;
    ui::info(&format!("Saving {}...", path.display()));

    tracing::debug!(path = %path.display(), pairs = closure.len(), "Wrote closure table");
    Ok(())
}
