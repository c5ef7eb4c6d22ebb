//! Route pattern utilities
//!
//! Pattern syntax:
//!
//! - `/users` - literal segment
//! - `/users/:id` - named parameter, matches exactly one segment
//! - `/files/*rest` - catch-all, must be the last segment and directly
//!   follow a `/`; matches the rest of the path including slashes
//!
//! At most one wildcard marker may appear in a single segment.

use crate::error::{Result, RouteError};

/// A wildcard located inside a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wildcard {
    /// Byte offset of the `:` or `*` marker.
    pub start: usize,
    /// Byte offset one past the end of the wildcard (next `/` or end).
    pub end: usize,
    /// False when the segment contains a second marker.
    pub valid: bool,
}

impl Wildcard {
    /// Whether this is a catch-all (`*name`).
    pub fn is_catch_all(&self, path: &[u8]) -> bool {
        path[self.start] == b'*'
    }
}

/// Length in bytes of the longest common prefix of `a` and `b`.
#[inline]
pub fn longest_common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Find the first wildcard segment in `path`.
///
/// Returns `None` when the path is purely static.
pub fn find_wildcard(path: &[u8]) -> Option<Wildcard> {
    let start = path.iter().position(|&c| c == b':' || c == b'*')?;
    let mut valid = true;

    for (offset, &c) in path[start + 1..].iter().enumerate() {
        match c {
            b'/' => {
                return Some(Wildcard {
                    start,
                    end: start + 1 + offset,
                    valid,
                })
            }
            b':' | b'*' => valid = false,
            _ => {}
        }
    }

    Some(Wildcard {
        start,
        end: path.len(),
        valid,
    })
}

/// Check the syntax of a route pattern without touching any tree.
pub fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(RouteError::EmptyPath);
    }

    if !pattern.starts_with('/') {
        return Err(RouteError::MissingLeadingSlash {
            path: pattern.to_string(),
        });
    }

    let bytes = pattern.as_bytes();
    let mut offset = 0;

    while let Some(wildcard) = find_wildcard(&bytes[offset..]) {
        let start = offset + wildcard.start;
        let end = offset + wildcard.end;
        let segment = &pattern[start..end];

        if !wildcard.valid {
            return Err(RouteError::MultipleWildcards {
                path: pattern.to_string(),
                segment: segment.to_string(),
            });
        }

        if segment.len() < 2 {
            return Err(RouteError::EmptyWildcardName {
                path: pattern.to_string(),
            });
        }

        if bytes[start] == b'*' {
            if end != bytes.len() {
                return Err(RouteError::CatchAllNotAtEnd {
                    path: pattern.to_string(),
                });
            }
            if bytes[start - 1] != b'/' {
                return Err(RouteError::CatchAllWithoutSlash {
                    path: pattern.to_string(),
                });
            }
        }

        offset = end;
    }

    Ok(())
}

/// Number of wildcard segments in `pattern`.
pub fn count_params(pattern: &str) -> usize {
    pattern.bytes().filter(|&c| c == b':' || c == b'*').count()
}

/// Join a group prefix and a relative pattern.
///
/// Empty segments are dropped, the result always begins with `/`, and a
/// trailing slash on `relative` is kept so that `/users/` stays distinct
/// from `/users`.
///
/// # Examples
///
/// ```
/// use routekit_core::path::join_paths;
///
/// assert_eq!(join_paths("/api", "users"), "/api/users");
/// assert_eq!(join_paths("/api/", "/users/"), "/api/users/");
/// assert_eq!(join_paths("/api", ""), "/api");
/// assert_eq!(join_paths("/", "/"), "/");
/// ```
pub fn join_paths(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_string();
    }

    let mut joined = String::with_capacity(base.len() + relative.len() + 1);
    for segment in base
        .split('/')
        .chain(relative.split('/'))
        .filter(|s| !s.is_empty())
    {
        joined.push('/');
        joined.push_str(segment);
    }

    if joined.is_empty() || relative.ends_with('/') {
        joined.push('/');
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_common_prefix() {
        assert_eq!(longest_common_prefix(b"/users", b"/user/1"), 5);
        assert_eq!(longest_common_prefix(b"", b"/"), 0);
        assert_eq!(longest_common_prefix(b"/a", b"/a"), 2);
        assert_eq!(longest_common_prefix(b"abc", b"xbc"), 0);
    }

    #[test]
    fn test_find_wildcard() {
        assert_eq!(find_wildcard(b"/static/path"), None);
        assert_eq!(
            find_wildcard(b"/users/:id/posts"),
            Some(Wildcard {
                start: 7,
                end: 10,
                valid: true
            })
        );
        assert_eq!(
            find_wildcard(b"/files/*rest"),
            Some(Wildcard {
                start: 7,
                end: 12,
                valid: true
            })
        );
        assert!(!find_wildcard(b"/:a:b/c").unwrap().valid);
    }

    #[test]
    fn test_validate_accepts_legal_patterns() {
        for pattern in [
            "/",
            "/users",
            "/users/",
            "/users/:id",
            "/users/:id/posts/:post",
            "/files/*rest",
            "/v:version/info",
            "//double",
        ] {
            assert!(validate_pattern(pattern).is_ok(), "{}", pattern);
        }
    }

    #[test]
    fn test_validate_rejects_illegal_patterns() {
        assert_eq!(validate_pattern(""), Err(RouteError::EmptyPath));
        assert!(matches!(
            validate_pattern("users"),
            Err(RouteError::MissingLeadingSlash { .. })
        ));
        assert!(matches!(
            validate_pattern("/users/:"),
            Err(RouteError::EmptyWildcardName { .. })
        ));
        assert!(matches!(
            validate_pattern("/files/*"),
            Err(RouteError::EmptyWildcardName { .. })
        ));
        assert!(matches!(
            validate_pattern("/:a:b"),
            Err(RouteError::MultipleWildcards { .. })
        ));
        assert!(matches!(
            validate_pattern("/:a*b/c"),
            Err(RouteError::MultipleWildcards { .. })
        ));
        assert!(matches!(
            validate_pattern("/files/*rest/more"),
            Err(RouteError::CatchAllNotAtEnd { .. })
        ));
        assert!(matches!(
            validate_pattern("/files*rest"),
            Err(RouteError::CatchAllWithoutSlash { .. })
        ));
    }

    #[test]
    fn test_count_params() {
        assert_eq!(count_params("/"), 0);
        assert_eq!(count_params("/users/:id"), 1);
        assert_eq!(count_params("/users/:id/files/*rest"), 2);
    }

    #[test]
    fn test_join_paths() {
        assert_eq!(join_paths("/", "users"), "/users");
        assert_eq!(join_paths("/api", "/users/:id"), "/api/users/:id");
        assert_eq!(join_paths("/api", "/"), "/api/");
        assert_eq!(join_paths("//api//", "v1//users"), "/api/v1/users");
        assert_eq!(join_paths("/api", ""), "/api");
        assert_eq!(join_paths("/", ""), "/");
    }
}
