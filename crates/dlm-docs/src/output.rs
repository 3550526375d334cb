//! Writing rendered documentation to disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use dlm_schema::TemplateFile;

use crate::error::DocsError;
use crate::{html, markdown};

fn write(path: &Path, contents: &str) -> Result<(), DocsError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| DocsError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| DocsError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "documentation written");
    Ok(())
}

/// Write one `<name>.md` per template file into `out_dir`.
///
/// # Errors
///
/// Returns [`DocsError::Write`] if a directory or file cannot be written.
pub fn write_markdown(files: &[TemplateFile], out_dir: &Path) -> Result<Vec<PathBuf>, DocsError> {
    files
        .iter()
        .map(|file| {
            let path = out_dir.join(Path::new(file.file_name()).with_extension("md"));
            write(&path, &markdown::render_file(file))?;
            Ok(path)
        })
        .collect()
}

/// Write every template into a single Markdown file.
///
/// # Errors
///
/// Returns [`DocsError::Write`] if the file cannot be written.
pub fn write_merged(
    files: &[TemplateFile],
    out_dir: &Path,
    file_name: &str,
) -> Result<PathBuf, DocsError> {
    let path = out_dir.join(file_name);
    write(&path, &markdown::render_merged(files))?;
    Ok(path)
}

/// Write the single-page HTML reference to `path`.
///
/// # Errors
///
/// Returns [`DocsError::Write`] if the file cannot be written.
pub fn write_html(
    files: &[TemplateFile],
    path: &Path,
    title: &str,
    generated_at: DateTime<Utc>,
) -> Result<(), DocsError> {
    write(path, &html::render_page(files, title, generated_at))
}
