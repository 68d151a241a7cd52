//! Path helpers shared by folders and the collection.
//!
//! File identifiers arrive from the host as plain strings. The host does not
//! always report the same document the same way (`///foo/x.ts` and
//! `/foo/x.ts`), so every identifier goes through [`normalize`] before it is
//! stored or compared.

/// Canonicalizes a file identifier so equivalent spellings compare equal.
///
/// Every run of three or more `/` collapses to one. Runs of one or two are
/// kept, so UNC-style `//server/share` survives. Idempotent.
pub fn normalize(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len());
    let mut run = 0usize;
    for c in path.chars() {
        if c == '/' {
            run += 1;
            continue;
        }
        push_slashes(&mut normalized, run);
        run = 0;
        normalized.push(c);
    }
    push_slashes(&mut normalized, run);
    normalized
}

fn push_slashes(out: &mut String, run: usize) {
    let count = if run >= 3 { 1 } else { run };
    out.extend(std::iter::repeat('/').take(count));
}

/// Drops a trailing `/` or `\` unless the path is only a separator.
pub fn strip_trailing_separator(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() && !path.is_empty() {
        &path[..1]
    } else {
        trimmed
    }
}

/// Whether `path` lies inside `root`, matching on whole path components.
///
/// `/work/app` contains `/work/app/src/main.rs` but not `/work/application`.
pub fn root_contains(root: &str, path: &str) -> bool {
    let root = strip_trailing_separator(root);
    if root.is_empty() {
        return false;
    }
    match path.strip_prefix(root) {
        Some("") => true,
        Some(rest) => rest.starts_with('/') || rest.starts_with('\\') || root.ends_with(['/', '\\']),
        None => false,
    }
}
