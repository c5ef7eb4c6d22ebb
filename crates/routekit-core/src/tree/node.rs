//! Radix tree vertex and the insertion algorithm

use crate::error::{Result, RouteError};
use crate::path::{find_wildcard, longest_common_prefix};
use std::mem;
use std::sync::Arc;

/// Matching behavior of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    /// Root of a method tree. Its prefix is always empty.
    Root,
    /// Literal prefix.
    Static,
    /// `:name`, one segment.
    Param,
    /// `*name`, the rest of the path.
    CatchAll,
}

/// A registered handler bound to the node that terminates its pattern.
#[derive(Debug, Clone)]
pub(crate) struct Route<T> {
    pub(crate) value: T,
    pub(crate) name: String,
    pub(crate) full_path: String,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) kind: NodeKind,
    /// Static prefix, or the wildcard literal (`:id`, `*rest`).
    pub(crate) path: Vec<u8>,
    /// Parameter name for `Param` and `CatchAll` nodes.
    pub(crate) key: Option<Arc<str>>,
    /// `indices[i]` is the first byte of `children[i].path`.
    pub(crate) indices: Vec<u8>,
    pub(crate) children: Vec<Node<T>>,
    /// The only child is a `Param` or `CatchAll` node.
    pub(crate) wild_child: bool,
    pub(crate) priority: u32,
    pub(crate) route: Option<Route<T>>,
}

impl<T> Node<T> {
    pub(crate) fn root() -> Self {
        Self::with_kind(NodeKind::Root, Vec::new())
    }

    fn with_kind(kind: NodeKind, path: Vec<u8>) -> Self {
        Self {
            kind,
            path,
            key: None,
            indices: Vec::new(),
            children: Vec::new(),
            wild_child: false,
            priority: 0,
            route: None,
        }
    }

    fn wildcard(segment: &[u8]) -> Self {
        let kind = if segment[0] == b'*' {
            NodeKind::CatchAll
        } else {
            NodeKind::Param
        };
        let mut node = Self::with_kind(kind, segment.to_vec());
        node.key = Some(Arc::from(String::from_utf8_lossy(&segment[1..]).as_ref()));
        node.priority = 1;
        node
    }

    /// Register `route` below this node. `pattern` is what is left of the
    /// route's pattern once the path down to this node has been taken off.
    ///
    /// The pattern is checked against the existing routes first, so a
    /// rejected pattern leaves every node, priorities included, untouched.
    pub(crate) fn insert(&mut self, pattern: &[u8], route: Route<T>) -> Result<()> {
        self.check(pattern, &route.full_path)?;

        let mut node = self;
        let mut remaining = pattern;
        let mut consumed = 0;
        node.priority += 1;

        loop {
            let common = longest_common_prefix(remaining, &node.path);
            if common < node.path.len() {
                node.split(common);
            }

            remaining = &remaining[common..];
            consumed += common;

            if remaining.is_empty() {
                return node.set_route(route);
            }

            if node.wild_child {
                let wild = &mut node.children[0];
                if !wild.accepts(remaining) {
                    return Err(wild.conflict(&route.full_path, remaining, consumed));
                }

                wild.priority += 1;
                remaining = &remaining[wild.path.len()..];
                consumed += wild.path.len();

                if remaining.is_empty() {
                    return wild.set_route(route);
                }
                if wild.children.is_empty() {
                    return wild.insert_chain(remaining, route);
                }

                node = &mut wild.children[0];
                node.priority += 1;
                continue;
            }

            let next = remaining[0];
            if let Some(pos) = node.indices.iter().position(|&c| c == next) {
                let pos = node.bump_child_priority(pos);
                node = &mut node.children[pos];
                continue;
            }

            return node.insert_chain(remaining, route);
        }
    }

    /// Walk the path `insert` would take and report the fault it would hit,
    /// without modifying anything.
    fn check(&self, pattern: &[u8], full_path: &str) -> Result<()> {
        let mut node = self;
        let mut remaining = pattern;
        let mut consumed = 0;

        loop {
            let common = longest_common_prefix(remaining, &node.path);
            remaining = &remaining[common..];
            consumed += common;

            if common < node.path.len() {
                // After the split the node's only child is the static tail.
                return check_chain(true, remaining, full_path);
            }

            if remaining.is_empty() {
                return node.check_route(full_path);
            }

            if node.wild_child {
                let wild = &node.children[0];
                if !wild.accepts(remaining) {
                    return Err(wild.conflict(full_path, remaining, consumed));
                }

                remaining = &remaining[wild.path.len()..];
                consumed += wild.path.len();

                if remaining.is_empty() {
                    return wild.check_route(full_path);
                }
                match wild.children.first() {
                    Some(child) => node = child,
                    None => return Ok(()),
                }
                continue;
            }

            match node.indices.iter().position(|&c| c == remaining[0]) {
                Some(pos) => node = &node.children[pos],
                None => return check_chain(!node.children.is_empty(), remaining, full_path),
            }
        }
    }

    fn check_route(&self, full_path: &str) -> Result<()> {
        if self.route.is_some() {
            return Err(RouteError::DuplicateRoute {
                path: full_path.to_string(),
            });
        }
        Ok(())
    }

    /// Build the nodes for `pattern` below a node that has no child able to
    /// take it. Every node created here lies on the new route only.
    fn insert_chain(&mut self, pattern: &[u8], route: Route<T>) -> Result<()> {
        let mut node = self;
        let mut pattern = pattern;

        loop {
            let Some(wildcard) = find_wildcard(pattern) else {
                return node.add_static_child(pattern).set_route(route);
            };

            if wildcard.start > 0 {
                node = node.add_static_child(&pattern[..wildcard.start]);
                pattern = &pattern[wildcard.start..];
            }

            let segment = &pattern[..wildcard.end - wildcard.start];
            if !node.children.is_empty() {
                return Err(RouteError::WildcardConflictsWithChildren {
                    path: route.full_path,
                    wildcard: String::from_utf8_lossy(segment).into_owned(),
                });
            }

            node.wild_child = true;
            node.children.push(Node::wildcard(segment));
            node = &mut node.children[0];
            pattern = &pattern[segment.len()..];

            if pattern.is_empty() {
                return node.set_route(route);
            }
        }
    }

    /// Split this node so that its prefix becomes `path[..at]`. The tail,
    /// together with the route and children, moves into a single new child.
    fn split(&mut self, at: usize) {
        let child = Node {
            kind: NodeKind::Static,
            path: self.path.split_off(at),
            key: None,
            indices: mem::take(&mut self.indices),
            children: mem::take(&mut self.children),
            wild_child: mem::replace(&mut self.wild_child, false),
            priority: self.priority.saturating_sub(1),
            route: self.route.take(),
        };

        self.indices = vec![child.path[0]];
        self.children = vec![child];
    }

    fn add_static_child(&mut self, path: &[u8]) -> &mut Node<T> {
        self.indices.push(path[0]);
        self.children
            .push(Node::with_kind(NodeKind::Static, path.to_vec()));
        let pos = self.bump_child_priority(self.children.len() - 1);
        &mut self.children[pos]
    }

    /// Increment the priority of `children[pos]` and move it left past every
    /// sibling with a strictly lower priority. Returns the new position.
    pub(crate) fn bump_child_priority(&mut self, pos: usize) -> usize {
        self.children[pos].priority += 1;
        let priority = self.children[pos].priority;

        let mut new_pos = pos;
        while new_pos > 0 && self.children[new_pos - 1].priority < priority {
            self.children.swap(new_pos - 1, new_pos);
            self.indices.swap(new_pos - 1, new_pos);
            new_pos -= 1;
        }

        new_pos
    }

    fn set_route(&mut self, route: Route<T>) -> Result<()> {
        self.check_route(&route.full_path)?;
        self.route = Some(route);
        Ok(())
    }

    /// Whether `remaining` continues with exactly this wildcard.
    fn accepts(&self, remaining: &[u8]) -> bool {
        match self.kind {
            NodeKind::Param => {
                remaining.starts_with(&self.path)
                    && remaining
                        .get(self.path.len())
                        .map_or(true, |&c| c == b'/')
            }
            NodeKind::CatchAll => remaining == self.path.as_slice(),
            NodeKind::Root | NodeKind::Static => false,
        }
    }

    fn conflict(&self, full_path: &str, remaining: &[u8], consumed: usize) -> RouteError {
        let segment = match self.kind {
            NodeKind::CatchAll => remaining,
            _ => remaining
                .split(|&c| c == b'/')
                .next()
                .unwrap_or(remaining),
        };

        let mut prefix = String::from_utf8_lossy(&full_path.as_bytes()[..consumed]).into_owned();
        prefix.push_str(&String::from_utf8_lossy(&self.path));

        RouteError::WildcardConflict {
            path: full_path.to_string(),
            segment: String::from_utf8_lossy(segment).into_owned(),
            wildcard: String::from_utf8_lossy(&self.path).into_owned(),
            prefix,
        }
    }
}

/// A new chain can only clash when it starts with a wildcard below a node
/// that already has static children.
fn check_chain(has_children: bool, pattern: &[u8], full_path: &str) -> Result<()> {
    match find_wildcard(pattern) {
        Some(wildcard) if wildcard.start == 0 && has_children => {
            Err(RouteError::WildcardConflictsWithChildren {
                path: full_path.to_string(),
                wildcard: String::from_utf8_lossy(&pattern[..wildcard.end]).into_owned(),
            })
        }
        _ => Ok(()),
    }
}
