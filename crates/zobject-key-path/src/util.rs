/// Separator used by the dot-joined key path encoding.
pub const SEPARATOR: char = '.';

/// Parse a dot-joined key path (`"main.Z2K2.Z7K1"`) into steps.
///
/// The empty string is the empty path.
pub fn parse_key_path(key_path: &str) -> Vec<String> {
    if key_path.is_empty() {
        return Vec::new();
    }
    key_path.split(SEPARATOR).map(str::to_string).collect()
}

/// Format steps into the dot-joined key path encoding.
pub fn format_key_path<S: AsRef<str>>(path: &[S]) -> String {
    let mut out = String::new();
    for (i, step) in path.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(step.as_ref());
    }
    out
}

/// Return a new path with `step` appended.
pub fn join(path: &[String], step: impl Into<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(path.len() + 1);
    out.extend_from_slice(path);
    out.push(step.into());
    out
}

/// Check if a string represents a valid non-negative integer array index.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parse an array index step.
pub fn parse_index(index: &str) -> Option<usize> {
    if !is_valid_index(index) {
        return None;
    }
    index.parse().ok()
}
