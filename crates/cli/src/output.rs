use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Print `text` to stdout, or write it (newline-terminated) to `out`.
pub fn emit(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        None => {
            println!("{}", text);
            Ok(())
        }
        Some(path) => write_output(path, text),
    }
}

/// Write `text` to `path`, creating missing parent directories.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, format!("{}\n", text))
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = text.len() + 1, "output written");
    Ok(())
}
