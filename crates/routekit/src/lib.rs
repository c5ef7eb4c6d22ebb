//! # routekit
//!
//! Radix tree request routing for HTTP servers.
//!
//! Routes are registered per method while the application starts up. After
//! that the route table is frozen and shared by every worker; each lookup
//! resolves a path to its handler, the captured path parameters and, on a
//! miss, whether the trailing-slash variant of the path would have matched.
//!
//! ## Quick Start
//!
//! ```rust
//! use routekit::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut builder = Dispatcher::builder();
//!     builder
//!         .get("/", "index", "index")?
//!         .get("/users/:id", "show_user", "show_user")?
//!         .get("/files/*path", "serve_file", "serve_file")?;
//!     {
//!         let mut admin = builder.group("/admin");
//!         admin.delete("/users/:id", "delete_user", "delete_user")?;
//!     }
//!     let dispatcher = builder.build();
//!
//!     let mut params = dispatcher.params();
//!     let resolution = dispatcher.resolve(&Method::GET, "/files/css/site.css", &mut params);
//!     assert_eq!(resolution.handler(), Some(&"serve_file"));
//!     assert_eq!(params.get("path"), Some("css/site.css"));
//!     Ok(())
//! }
//! ```
//!
//! ## Pattern syntax
//!
//! - `/users` matches literally
//! - `/users/:id` captures one non-empty segment as `id`
//! - `/files/*path` captures the rest of the path, slashes included; it
//!   must be the last segment
//!
//! Patterns that would make a lookup ambiguous are rejected at
//! registration with a [`RouteError`].
//!
//! ## Optional Features
//!
//! - `tracing` (default): emit registration and dispatch events through
//!   the `tracing` crate

// Re-export core functionality
pub use routekit_core::*;

// Re-export the HTTP layer
pub use routekit_http::*;

pub use http;

/// Prelude module - import everything you need with `use routekit::prelude::*`
pub mod prelude {
    pub use routekit_core::{Match, Params, Result, RouteError, RouteInfo, Router};
    pub use routekit_http::{
        Dispatcher, DispatcherBuilder, Group, Resolution, RouterConfig, Routing,
    };

    pub use http::{Method, StatusCode};
}
