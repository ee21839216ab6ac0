use std::path::{Path, PathBuf};

/// Resolve `path` against `cwd` unless it is already absolute, dropping `.`
/// components.
///
/// Selected files are matched against the project root by prefix, so both
/// must be expressed the same way. `..` is kept as-is.
pub(crate) fn absolutize_from(cwd: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    joined.components().collect()
}

pub(crate) fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    Ok(absolutize_from(&std::env::current_dir()?, path))
}
