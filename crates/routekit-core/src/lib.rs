//! # routekit core
//!
//! Radix tree routing for HTTP servers: register `(method, pattern)`
//! bindings, then resolve each request path to a handler, its captured
//! path parameters and a trailing slash redirect hint.
//!
//! This crate is not meant to be used directly. Use `routekit` instead.

mod error;
pub mod params;
pub mod path;
mod router;
mod tracing_macros;
pub mod tree;

// Public API
pub use error::{Result, RouteError};
pub use params::{Param, Params, STACK_PARAMS_CAPACITY};
pub use router::{RouteInfo, Router};
pub use tree::{Match, Tree};

#[doc(hidden)]
#[cfg(feature = "tracing")]
pub use tracing_macros::__private;
