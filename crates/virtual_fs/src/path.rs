//! Virtual-path helpers shared by the file store and its consumers.

/// Normalizes a virtual filesystem path.
///
/// Trims whitespace, converts backslashes to `/`, resolves `.`/`..`, ensures a
/// leading slash, and returns `/` for empty or fully-collapsed paths.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return "/".to_string();
    }

    let mut out = String::new();
    for segment in trimmed.replace('\\', "/").split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." {
            if let Some(idx) = out.rfind('/') {
                out.truncate(idx);
            }
            continue;
        }
        out.push('/');
        out.push_str(segment);
    }

    if out.is_empty() {
        "/".to_string()
    } else {
        out
    }
}

/// Returns the parent path of a normalized path, or `None` for the root.
///
/// Top-level entries report `/` as their parent.
pub fn parent_of(path: &str) -> Option<&str> {
    if path == "/" {
        return None;
    }
    match path.rfind('/') {
        Some(0) => Some("/"),
        Some(idx) => Some(&path[..idx]),
        None => None,
    }
}

/// Returns the final segment of a normalized path (`/` for the root itself).
pub fn base_name(path: &str) -> &str {
    if path == "/" {
        return "/";
    }
    path.rsplit('/').next().unwrap_or(path)
}

/// Joins a child name onto a normalized parent path.
pub fn join(parent: &str, name: &str) -> String {
    if parent == "/" {
        format!("/{name}")
    } else {
        format!("{parent}/{name}")
    }
}

/// Returns `true` when `path` is absolute, normalized, and free of empty or
/// dot segments.
pub fn is_well_formed(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    if !path.starts_with('/') || path.ends_with('/') {
        return false;
    }
    path[1..]
        .split('/')
        .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}
