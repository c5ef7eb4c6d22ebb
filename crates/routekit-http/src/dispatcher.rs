//! Method-aware dispatch
//!
//! A [`DispatcherBuilder`] collects routes; [`DispatcherBuilder::build`]
//! freezes them into a [`Dispatcher`], which turns every request into a
//! [`Resolution`]: the matched handler, a trailing slash redirect, a 405
//! with the methods that would have matched, or a 404.
//!
//! # Example
//!
//! ```
//! use http::{Method, StatusCode};
//! use routekit_http::{Dispatcher, Resolution, Routing};
//!
//! let mut builder = Dispatcher::builder();
//! builder
//!     .get("/users", "list_users", 1)?
//!     .post("/users", "create_user", 2)?
//!     .get("/users/:id", "show_user", 3)?;
//! let dispatcher = builder.build();
//!
//! let mut params = dispatcher.params();
//! match dispatcher.resolve(&Method::GET, "/users/7", &mut params) {
//!     Resolution::Found { handler, .. } => assert_eq!(*handler, 3),
//!     _ => unreachable!(),
//! }
//! assert_eq!(params.get("id"), Some("7"));
//!
//! params.clear();
//! match dispatcher.resolve(&Method::GET, "/users/", &mut params) {
//!     Resolution::Redirect { location, status } => {
//!         assert_eq!(location, "/users");
//!         assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
//!     }
//!     _ => unreachable!(),
//! }
//!
//! assert_eq!(dispatcher.reverse("show_user", &[&7]).as_deref(), Some("/users/7"));
//! # Ok::<(), routekit_core::RouteError>(())
//! ```

use crate::config::RouterConfig;
use crate::group::Group;
use crate::reverse::fill_pattern;
use http::{Method, StatusCode};
use routekit_core::{trace_trace, Params, Result, RouteInfo, Router};
use std::collections::HashMap;
use std::fmt::Display;

/// The nine standard methods registered by [`Routing::any`].
pub const METHODS: [Method; 9] = [
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
    Method::CONNECT,
    Method::TRACE,
];

/// What a request resolves to.
#[derive(Debug)]
pub enum Resolution<'d, T> {
    /// A handler matched. Captured parameters are in the caller's buffer.
    Found {
        handler: &'d T,
        name: &'d str,
        full_path: &'d str,
    },
    /// The path matches with one trailing slash added or removed.
    Redirect {
        location: String,
        status: StatusCode,
    },
    /// The path matches, but only under other methods.
    MethodNotAllowed { allowed: Vec<Method> },
    NotFound,
}

impl<T> Resolution<'_, T> {
    /// The HTTP status a server would answer with.
    pub fn status(&self) -> StatusCode {
        match self {
            Resolution::Found { .. } => StatusCode::OK,
            Resolution::Redirect { status, .. } => *status,
            Resolution::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Resolution::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// The matched handler, if any.
    pub fn handler(&self) -> Option<&T> {
        match self {
            Resolution::Found { handler, .. } => Some(*handler),
            _ => None,
        }
    }
}

/// Registration surface shared by [`DispatcherBuilder`] and [`Group`].
///
/// Every method stops at the first fault and returns it.
pub trait Routing<T> {
    /// Register `handler` for `method` and `pattern`.
    fn route(&mut self, method: Method, pattern: &str, name: &str, handler: T) -> Result<&mut Self>;

    fn get(&mut self, pattern: &str, name: &str, handler: T) -> Result<&mut Self> {
        self.route(Method::GET, pattern, name, handler)
    }

    fn head(&mut self, pattern: &str, name: &str, handler: T) -> Result<&mut Self> {
        self.route(Method::HEAD, pattern, name, handler)
    }

    fn post(&mut self, pattern: &str, name: &str, handler: T) -> Result<&mut Self> {
        self.route(Method::POST, pattern, name, handler)
    }

    fn put(&mut self, pattern: &str, name: &str, handler: T) -> Result<&mut Self> {
        self.route(Method::PUT, pattern, name, handler)
    }

    fn patch(&mut self, pattern: &str, name: &str, handler: T) -> Result<&mut Self> {
        self.route(Method::PATCH, pattern, name, handler)
    }

    fn delete(&mut self, pattern: &str, name: &str, handler: T) -> Result<&mut Self> {
        self.route(Method::DELETE, pattern, name, handler)
    }

    fn options(&mut self, pattern: &str, name: &str, handler: T) -> Result<&mut Self> {
        self.route(Method::OPTIONS, pattern, name, handler)
    }

    /// Register `handler` for every method in [`METHODS`].
    fn any(&mut self, pattern: &str, name: &str, handler: T) -> Result<&mut Self>
    where
        T: Clone,
    {
        self.on_methods(&METHODS, pattern, name, handler)
    }

    /// Register `handler` for each of `methods`, in order.
    fn on_methods(
        &mut self,
        methods: &[Method],
        pattern: &str,
        name: &str,
        handler: T,
    ) -> Result<&mut Self>
    where
        T: Clone,
    {
        for method in methods {
            self.route(method.clone(), pattern, name, handler.clone())?;
        }
        Ok(self)
    }
}

/// Collects routes before serving starts.
#[derive(Debug)]
pub struct DispatcherBuilder<T> {
    router: Router<T>,
    config: RouterConfig,
    named: HashMap<String, String>,
}

impl<T> DispatcherBuilder<T> {
    /// Create an empty builder with the default configuration.
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            config: RouterConfig::default(),
            named: HashMap::new(),
        }
    }

    /// Replace the configuration.
    pub fn config(&mut self, config: RouterConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Start a group of routes sharing `prefix`.
    pub fn group(&mut self, prefix: &str) -> Group<'_, T> {
        Group::new(prefix, self)
    }

    /// Freeze the route table.
    pub fn build(self) -> Dispatcher<T> {
        Dispatcher {
            router: self.router,
            config: self.config,
            named: self.named,
        }
    }
}

impl<T> Routing<T> for DispatcherBuilder<T> {
    fn route(&mut self, method: Method, pattern: &str, name: &str, handler: T) -> Result<&mut Self> {
        self.router.insert(method.as_str(), pattern, name, handler)?;

        // The first pattern registered under a name is the one reversed.
        if !name.is_empty() && !self.named.contains_key(name) {
            self.named.insert(name.to_string(), pattern.to_string());
        }
        Ok(self)
    }
}

impl<T> Default for DispatcherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable route table. Share it between workers behind an `Arc`.
#[derive(Debug)]
pub struct Dispatcher<T> {
    router: Router<T>,
    config: RouterConfig,
    named: HashMap<String, String>,
}

impl<T> Dispatcher<T> {
    /// Start building a dispatcher.
    pub fn builder() -> DispatcherBuilder<T> {
        DispatcherBuilder::new()
    }

    /// Resolve a request.
    ///
    /// Captured parameters are appended to `params` when a handler is
    /// found; on any other outcome `params` is left as it was.
    pub fn resolve<'d>(
        &'d self,
        method: &Method,
        path: &str,
        params: &mut Params,
    ) -> Resolution<'d, T> {
        let matched = self.router.find(method.as_str(), path, params);
        if let Some(handler) = matched.value {
            return Resolution::Found {
                handler,
                name: matched.name,
                full_path: matched.full_path,
            };
        }

        if matched.tsr
            && self.config.redirect_trailing_slash
            && *method != Method::CONNECT
            && path != "/"
        {
            let location = toggle_trailing_slash(path);
            let status = if *method == Method::GET {
                StatusCode::MOVED_PERMANENTLY
            } else {
                StatusCode::TEMPORARY_REDIRECT
            };
            trace_trace!(method = %method, path, location = %location, "trailing slash redirect");
            return Resolution::Redirect { location, status };
        }

        if self.config.handle_method_not_allowed {
            let allowed: Vec<Method> = self
                .router
                .allowed_methods(path)
                .into_iter()
                .filter_map(|m| Method::from_bytes(m.as_bytes()).ok())
                .collect();
            if !allowed.is_empty() {
                trace_trace!(method = %method, path, ?allowed, "method not allowed");
                return Resolution::MethodNotAllowed { allowed };
            }
        }

        Resolution::NotFound
    }

    /// Build the path of the route registered under `name`, filling its
    /// wildcards with `args` in order.
    pub fn reverse(&self, name: &str, args: &[&dyn Display]) -> Option<String> {
        self.named
            .get(name)
            .map(|pattern| fill_pattern(pattern, args))
    }

    /// Every registered route.
    pub fn routes(&self) -> Vec<RouteInfo> {
        self.router.routes()
    }

    /// A parameter buffer sized for this route table.
    pub fn params(&self) -> Params {
        self.router.params()
    }

    /// The underlying method registry.
    pub fn router(&self) -> &Router<T> {
        &self.router
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}

fn toggle_trailing_slash(path: &str) -> String {
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => format!("{path}/"),
    }
}
