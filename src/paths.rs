//! Lexical path helpers used to compute `scriptPath`.
//!
//! Nothing here touches the filesystem: symlinks are not resolved, exactly
//! like a plain `relpath` on absolute paths.

use std::path::{Component, Path, PathBuf};

/// Makes `path` absolute against `base` and folds `.` and `..` components.
pub fn normalize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for comp in joined.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Path of `path` relative to `base`, rendered with `/` separators.
///
/// `base` is expected to be absolute (the process working directory).
/// Returns `"."` when both are the same location.
pub fn relative_to(path: &Path, base: &Path) -> String {
    let target = normalize(path, base);
    let base = normalize(base, base);

    let target_parts: Vec<Component<'_>> = target.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let common = target_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // Different roots (another drive on Windows): nothing to be relative to.
    if common == 0 && !target_parts.is_empty() {
        return to_slash(&target);
    }

    let mut segments: Vec<String> = Vec::new();
    for _ in common..base_parts.len() {
        segments.push("..".to_string());
    }
    for comp in &target_parts[common..] {
        segments.push(comp.as_os_str().to_string_lossy().into_owned());
    }

    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
