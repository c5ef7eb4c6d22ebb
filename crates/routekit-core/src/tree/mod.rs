//! Compressed prefix tree for a single HTTP method
//!
//! A [`Tree`] has two phases. While routes are being registered it is
//! mutated through `&mut self`; once registration is over it is only read,
//! and any number of threads may call [`Tree::find`] on it at once.

mod node;

use crate::error::Result;
use crate::params::Params;
use crate::path::validate_pattern;
use node::{Node, NodeKind, Route};

/// Outcome of a lookup.
///
/// A miss is an ordinary value: `value` is `None` and `tsr` tells whether
/// the same path with one trailing slash added or removed would match.
#[derive(Debug)]
pub struct Match<'t, T> {
    /// The matched handler.
    pub value: Option<&'t T>,
    /// Name the handler was registered under, empty on a miss.
    pub name: &'t str,
    /// The registered pattern that matched, empty on a miss.
    pub full_path: &'t str,
    /// Trailing slash redirect hint.
    pub tsr: bool,
}

impl<'t, T> Match<'t, T> {
    fn found(route: &'t Route<T>) -> Self {
        Self {
            value: Some(&route.value),
            name: &route.name,
            full_path: &route.full_path,
            tsr: false,
        }
    }

    pub(crate) fn miss(tsr: bool) -> Self {
        Self {
            value: None,
            name: "",
            full_path: "",
            tsr,
        }
    }

    /// Whether a handler was matched.
    pub fn is_found(&self) -> bool {
        self.value.is_some()
    }
}

/// Radix tree of the routes registered for one method.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Node<T>,
}

impl<T> Tree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: Node::root() }
    }

    /// Register `value` for `pattern`.
    ///
    /// The pattern's syntax is checked before the tree is touched. Clashes
    /// with existing routes are detected before any node is added, so a
    /// rejected pattern leaves every previously registered route matching
    /// exactly as before.
    pub fn insert(&mut self, pattern: &str, name: impl Into<String>, value: T) -> Result<()> {
        validate_pattern(pattern)?;

        let route = Route {
            value,
            name: name.into(),
            full_path: pattern.to_string(),
        };
        self.root.insert(pattern.as_bytes(), route)
    }

    /// Look up `path`, appending captured parameters to `params`.
    ///
    /// On a miss `params` is left as it was on entry.
    pub fn find<'t>(&'t self, path: &str, params: &mut Params) -> Match<'t, T> {
        let start = params.len();
        if let Some(route) = self.lookup(Subject::exact(path), Some(&mut *params)) {
            return Match::found(route);
        }

        params.truncate(start);
        Match::miss(self.has_slash_variant(path))
    }

    /// Whether `path` matches a route exactly, capturing nothing.
    pub fn matches(&self, path: &str) -> bool {
        self.lookup(Subject::exact(path), None).is_some()
    }

    /// Whether no route has been registered.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Visit every registered route as `(pattern, name, value)`, depth
    /// first in probing order.
    pub fn for_each_route<'t>(&'t self, mut f: impl FnMut(&'t str, &'t str, &'t T)) {
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if let Some(route) = &node.route {
                f(&route.full_path, &route.name, &route.value);
            }
            stack.extend(node.children.iter().rev());
        }
    }

    fn lookup<'t>(
        &'t self,
        subject: Subject<'_>,
        mut params: Option<&mut Params>,
    ) -> Option<&'t Route<T>> {
        let len = subject.len();
        let mut node = &self.root;
        let mut pos = 0;

        loop {
            if !subject.starts_with_at(pos, &node.path) {
                return None;
            }
            pos += node.path.len();

            if pos == len {
                if node.route.is_some() {
                    return node.route.as_ref();
                }
                // A catch-all also matches an empty remainder.
                let wild = node.children.first().filter(|_| node.wild_child)?;
                if wild.kind != NodeKind::CatchAll {
                    return None;
                }
                capture(&mut params, wild, subject, pos, pos)?;
                return wild.route.as_ref();
            }

            if node.wild_child {
                let wild = &node.children[0];
                match wild.kind {
                    NodeKind::Param => {
                        let end = subject.segment_end(pos);
                        if end == pos {
                            return None;
                        }

                        capture(&mut params, wild, subject, pos, end)?;
                        pos = end;

                        if pos == len {
                            return wild.route.as_ref();
                        }
                        node = wild.children.first()?;
                    }
                    NodeKind::CatchAll => {
                        capture(&mut params, wild, subject, pos, len)?;
                        return wild.route.as_ref();
                    }
                    NodeKind::Root | NodeKind::Static => return None,
                }
                continue;
            }

            let next = subject.byte(pos);
            let i = node.indices.iter().position(|&c| c == next)?;
            node = &node.children[i];
        }
    }

    /// Whether adding or removing exactly one trailing slash yields a match.
    fn has_slash_variant(&self, path: &str) -> bool {
        if path.len() > 1 {
            if let Some(stripped) = path.strip_suffix('/') {
                return self.matches(stripped);
            }
        }

        self.lookup(Subject::with_slash(path), None).is_some()
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node<T> {
        &self.root
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The path a lookup walks: the request path, optionally followed by one
/// `/` that is never materialized.
#[derive(Clone, Copy)]
struct Subject<'p> {
    path: &'p str,
    slash: bool,
}

impl<'p> Subject<'p> {
    fn exact(path: &'p str) -> Self {
        Self { path, slash: false }
    }

    fn with_slash(path: &'p str) -> Self {
        Self { path, slash: true }
    }

    #[inline]
    fn len(&self) -> usize {
        self.path.len() + usize::from(self.slash)
    }

    /// Byte at `i`, where `i < self.len()`.
    #[inline]
    fn byte(&self, i: usize) -> u8 {
        self.path.as_bytes().get(i).copied().unwrap_or(b'/')
    }

    fn starts_with_at(&self, pos: usize, prefix: &[u8]) -> bool {
        let Some((&last, head)) = prefix.split_last() else {
            return true;
        };

        let bytes = self.path.as_bytes();
        let end = pos + prefix.len();
        if end <= bytes.len() {
            return &bytes[pos..end] == prefix;
        }

        self.slash && end == bytes.len() + 1 && last == b'/' && &bytes[pos..] == head
    }

    /// End of the segment starting at `from`: the next `/` or the end.
    fn segment_end(&self, from: usize) -> usize {
        let bytes = self.path.as_bytes();
        bytes
            .get(from..)
            .and_then(|rest| rest.iter().position(|&c| c == b'/'))
            .map_or(bytes.len(), |offset| from + offset)
    }
}

/// Record `subject[start..end]` under the wildcard's name. Probes that
/// capture nothing never slice the path.
#[inline]
fn capture<T>(
    params: &mut Option<&mut Params>,
    node: &Node<T>,
    subject: Subject<'_>,
    start: usize,
    end: usize,
) -> Option<()> {
    if let (Some(params), Some(key)) = (params.as_deref_mut(), node.key.as_ref()) {
        params.push(key, subject.path.get(start..end)?);
    }
    Some(())
}
