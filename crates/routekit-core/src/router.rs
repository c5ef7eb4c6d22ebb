//! Method registry
//!
//! [`Router`] keeps one [`Tree`] per HTTP method and is the surface the
//! HTTP layer talks to: [`Router::insert`] while the route table is being
//! built, [`Router::find`] for every request afterwards.
//!
//! # Example
//!
//! ```
//! use routekit_core::{Params, Router};
//!
//! let mut router = Router::new();
//! router.insert("GET", "/users/:id", "show_user", 1).unwrap();
//! router.insert("GET", "/files/*path", "serve_file", 2).unwrap();
//!
//! let mut params = router.params();
//! let matched = router.find("GET", "/users/7", &mut params);
//! assert_eq!(matched.value, Some(&1));
//! assert_eq!(params.get("id"), Some("7"));
//!
//! params.clear();
//! let missed = router.find("GET", "/users/7/", &mut params);
//! assert!(missed.value.is_none());
//! assert!(missed.tsr);
//! ```

use crate::error::{Result, RouteError};
use crate::params::Params;
use crate::path::count_params;
use crate::tree::{Match, Tree};
use crate::{trace_debug, trace_warn};
use serde::Serialize;

/// A registered route, as reported by [`Router::routes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    /// The HTTP method
    pub method: String,
    /// The pattern as registered (e.g., "/users/:id")
    pub path: String,
    /// The handler name given at registration
    pub name: String,
}

#[derive(Debug, Clone)]
struct MethodTree<T> {
    method: String,
    tree: Tree<T>,
}

/// Route table keyed by HTTP method.
#[derive(Debug, Clone)]
pub struct Router<T> {
    trees: Vec<MethodTree<T>>,
    max_params: usize,
    route_count: usize,
}

impl<T> Router<T> {
    /// Create an empty router.
    pub fn new() -> Self {
        Self {
            trees: Vec::new(),
            max_params: 0,
            route_count: 0,
        }
    }

    /// Register `value` for `method` and `pattern`.
    ///
    /// A fault means the route table is unusable as intended; the caller
    /// should stop registering and report it.
    pub fn insert(
        &mut self,
        method: &str,
        pattern: &str,
        name: impl Into<String>,
        value: T,
    ) -> Result<()> {
        let name = name.into();
        let result = self.insert_route(method, pattern, &name, value);

        match &result {
            Ok(()) => {
                trace_debug!(method, path = pattern, handler = %name, "route registered");
            }
            Err(_err) => {
                trace_warn!(method, path = pattern, error = %_err, "route registration failed");
            }
        }
        result
    }

    fn insert_route(&mut self, method: &str, pattern: &str, name: &str, value: T) -> Result<()> {
        if method.is_empty() {
            return Err(RouteError::EmptyMethod {
                path: pattern.to_string(),
            });
        }

        match self.trees.iter_mut().find(|t| t.method == method) {
            Some(entry) => entry.tree.insert(pattern, name, value)?,
            None => {
                let mut tree = Tree::new();
                tree.insert(pattern, name, value)?;
                self.trees.push(MethodTree {
                    method: method.to_string(),
                    tree,
                });
            }
        }

        self.max_params = self.max_params.max(count_params(pattern));
        self.route_count += 1;
        Ok(())
    }

    /// Look up `path` in the tree for `method`.
    ///
    /// Captured parameters are appended to `params`, which the caller
    /// clears between requests. An unknown method is an ordinary miss.
    pub fn find<'t>(&'t self, method: &str, path: &str, params: &mut Params) -> Match<'t, T> {
        match self.tree(method) {
            Some(tree) => tree.find(path, params),
            None => Match::miss(false),
        }
    }

    /// The tree registered for `method`.
    pub fn tree(&self, method: &str) -> Option<&Tree<T>> {
        self.trees
            .iter()
            .find(|t| t.method == method)
            .map(|t| &t.tree)
    }

    /// Methods whose tree matches `path` exactly, in registration order.
    pub fn allowed_methods(&self, path: &str) -> Vec<&str> {
        self.trees
            .iter()
            .filter(|t| t.tree.matches(path))
            .map(|t| t.method.as_str())
            .collect()
    }

    /// Methods with at least one route, in registration order.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.trees.iter().map(|t| t.method.as_str())
    }

    /// Check if any route is registered for `method`.
    pub fn has_method(&self, method: &str) -> bool {
        self.tree(method).is_some()
    }

    /// Every registered route, grouped by method.
    pub fn routes(&self) -> Vec<RouteInfo> {
        let mut routes = Vec::with_capacity(self.route_count);
        for entry in &self.trees {
            entry.tree.for_each_route(|path, name, _| {
                routes.push(RouteInfo {
                    method: entry.method.clone(),
                    path: path.to_string(),
                    name: name.to_string(),
                });
            });
        }
        routes
    }

    /// Largest number of parameters in any registered pattern.
    pub fn max_params(&self) -> usize {
        self.max_params
    }

    /// A parameter buffer sized for this router.
    pub fn params(&self) -> Params {
        Params::with_capacity(self.max_params)
    }

    /// Number of registered routes across all methods.
    pub fn len(&self) -> usize {
        self.route_count
    }

    /// Check if no route is registered.
    pub fn is_empty(&self) -> bool {
        self.route_count == 0
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}
