//! Lexical path utilities shared by pattern compilation and lookup.
//!
//! Both registration patterns and request paths go through [`clean`] before
//! they are split into segments, so `/users//42/`, `users/42` and
//! `/users/./42` all address the same route.

use std::borrow::Cow;

use smallvec::SmallVec;

const SLASH: char = '/';

pub(crate) type Segments<'a> = SmallVec<[&'a str; 8]>;

/// Returns the canonical, rooted form of `path`.
///
/// - a leading `/` is implied
/// - repeated `/` collapse to one and a trailing `/` is dropped
/// - `.` segments vanish, `..` removes the previous segment (never above root)
///
/// Already canonical input is returned borrowed.
///
/// ```
/// use route_trie::path::clean;
///
/// assert_eq!(clean("/users/42"), "/users/42");
/// assert_eq!(clean("users//42/"), "/users/42");
/// assert_eq!(clean("/a/./b/../c"), "/a/c");
/// assert_eq!(clean("/../.."), "/");
/// assert_eq!(clean(""), "/");
/// ```
pub fn clean(path: &str) -> Cow<'_, str> {
    if is_clean(path) {
        return Cow::Borrowed(path);
    }

    let mut stack: Segments<'_> = SmallVec::new();
    for part in path.split(SLASH) {
        match part {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            _ => stack.push(part),
        }
    }

    if stack.is_empty() {
        return Cow::Borrowed("/");
    }

    let mut out = String::with_capacity(path.len() + 1);
    for part in &stack {
        out.push(SLASH);
        out.push_str(part);
    }
    Cow::Owned(out)
}

fn is_clean(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    match path.strip_prefix(SLASH) {
        Some(rest) => rest.split(SLASH).all(|s| !matches!(s, "" | "." | "..")),
        None => false,
    }
}

/// Splits an already cleaned path into its segments.
///
/// Root yields exactly one empty segment.
pub(crate) fn segments(cleaned: &str) -> Segments<'_> {
    cleaned
        .strip_prefix(SLASH)
        .unwrap_or(cleaned)
        .split(SLASH)
        .collect()
}

/// Lower-cases `s`, borrowing when there is nothing to fold.
pub(crate) fn fold(s: &str) -> Cow<'_, str> {
    if s.chars().any(char::is_uppercase) {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}

/// Rebuilds the route prefix covered by a match of `matched` segments.
///
/// The result is the lower-cased `/`-joined first `matched` segments of the
/// cleaned `path`. When `matched` exceeds the number of segments the cleaned
/// path is returned unchanged.
///
/// A miss answered by a registered `/` reports one matched segment, so
/// `route_path` yields the first request segment rather than the full path.
/// Callers wanting the full path for such misses should compare the handler
/// with the root registration and pass the full segment count instead.
///
/// ```
/// use route_trie::path::route_path;
///
/// assert_eq!(route_path("/Users/42/Posts", 2), "/users/42");
/// assert_eq!(route_path("/users", 3), "/users");
/// assert_eq!(route_path("/users", 0), "/");
/// assert_eq!(route_path("/missing/deep", 1), "/missing");
/// ```
pub fn route_path(path: &str, matched: usize) -> String {
    let cleaned = clean(path);
    let parts = segments(&cleaned);
    if matched > parts.len() {
        return cleaned.to_string();
    }

    let mut out = String::with_capacity(cleaned.len());
    out.push(SLASH);
    for (i, part) in parts[..matched].iter().enumerate() {
        if i > 0 {
            out.push(SLASH);
        }
        out.push_str(&fold(part));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_borrows_canonical_input() {
        assert!(matches!(clean("/a/b"), Cow::Borrowed("/a/b")));
        assert!(matches!(clean("/"), Cow::Borrowed("/")));
        assert!(matches!(clean("a/b"), Cow::Owned(_)));
    }

    #[test]
    fn clean_resolves_dots() {
        assert_eq!(clean("/a/b/.."), "/a");
        assert_eq!(clean("/a/../../b"), "/b");
        assert_eq!(clean("./a"), "/a");
        assert_eq!(clean("//"), "/");
    }

    #[test]
    fn root_has_one_empty_segment() {
        assert_eq!(segments("/").as_slice(), &[""]);
        assert_eq!(segments("/a/b").as_slice(), &["a", "b"]);
    }

    #[test]
    fn route_path_past_the_end_is_the_cleaned_path() {
        assert_eq!(route_path("users//42/", 5), "/users/42");
        assert_eq!(route_path("/Users/42", 2), "/users/42");
        assert_eq!(route_path("/", 1), "/");
    }

    #[test]
    fn fold_borrows_lowercase() {
        assert!(matches!(fold("users"), Cow::Borrowed("users")));
        assert_eq!(fold("UsErS"), "users");
    }
}
