//! # routekit http
//!
//! The HTTP-facing layer of routekit. It turns the core router's lookups
//! into decisions a server can act on: which handler runs, whether to
//! redirect to the trailing-slash variant, whether to answer 405.
//!
//! This crate is not meant to be used directly. Use `routekit` instead.

mod config;
mod dispatcher;
mod group;
mod reverse;

// Public API
pub use config::{ConfigError, RouterConfig};
pub use dispatcher::{Dispatcher, DispatcherBuilder, Resolution, Routing, METHODS};
pub use group::Group;
