use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(String),
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, source_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(source_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write rendered HTML to the mirrored relative path under the output root,
/// swapping the extension to `.html`
pub fn write_rendered(
    relative_path: &RelativePath,
    out_root: &Path,
    html: &str,
) -> Result<PathBuf, IoError> {
    let html_path = relative_path.with_extension("html");
    let absolute_path = html_path.to_path(out_root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, html).map_err(IoError::Io)?;
    Ok(absolute_path)
}

/// Scan for markdown files under the source directory, returned as paths
/// relative to that directory
pub fn scan_markdown_files(source_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    if !source_root.exists() {
        return Err(IoError::InvalidSourceDir(
            "source directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(source_root, source_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(root, &path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
            && let Ok(relative) = path.strip_prefix(root)
        {
            files.push(RelativePathBuf::from_path(relative).map_err(|_| {
                IoError::InvalidSourceDir(format!("non-UTF-8 path: {}", path.display()))
            })?);
        }
    }

    Ok(())
}

pub fn validate_source_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSourceDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
