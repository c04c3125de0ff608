//! Path helpers shared by the diff parser and the report normalizers.

use std::path::{Component, Path};

/// Normalize a file path to use forward slashes and no leading `./`.
///
/// Diff keys and report paths both go through this so they compare equal
/// regardless of the platform that produced them.
pub fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let mut rest = path.as_str();
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest.to_string()
}

/// Express `path` relative to `root`, normalized.
///
/// Relative paths are taken as already relative to the root. Absolute paths
/// under `root` have it stripped; absolute paths elsewhere, or with `..`
/// components, return `None`.
pub fn relative_to_root(path: &str, root: &Path) -> Option<String> {
    let candidate = Path::new(path);
    if !candidate.is_absolute() {
        return Some(normalize_path(path));
    }

    let relative = candidate.strip_prefix(root).ok()?;
    let parts = relative
        .components()
        .map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Option<Vec<String>>>()?;

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
