//! Error types for route registration
//!
//! Every fault that can happen while building the route table is a
//! [`RouteError`]. Registration faults are fatal for the table being built:
//! callers are expected to stop registering routes at the first one.
//! A lookup that matches nothing is not an error and never produces one.

use thiserror::Error;

/// Result type alias for route registration.
pub type Result<T, E = RouteError> = std::result::Result<T, E>;

/// A fault raised while registering a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The HTTP method string was empty.
    #[error("method must not be empty (registering '{path}')")]
    EmptyMethod { path: String },

    /// The pattern was the empty string.
    #[error("path must not be empty")]
    EmptyPath,

    /// The pattern did not begin with `/`.
    #[error("path must begin with '/' in path '{path}'")]
    MissingLeadingSlash { path: String },

    /// A `:` or `*` marker without a name.
    #[error("wildcards must be named with a non-empty name in path '{path}'")]
    EmptyWildcardName { path: String },

    /// More than one wildcard marker inside a single segment.
    #[error("only one wildcard per path segment is allowed, has: '{segment}' in path '{path}'")]
    MultipleWildcards { path: String, segment: String },

    /// A catch-all that is followed by more path.
    #[error("catch-all routes are only allowed at the end of the path in path '{path}'")]
    CatchAllNotAtEnd { path: String },

    /// A catch-all whose marker is not directly preceded by `/`.
    #[error("no / before catch-all in path '{path}'")]
    CatchAllWithoutSlash { path: String },

    /// The exact same pattern was already registered for this method.
    #[error("a handler is already registered for path '{path}'")]
    DuplicateRoute { path: String },

    /// The new pattern disagrees with a wildcard already in the tree.
    #[error(
        "'{segment}' in new path '{path}' conflicts with existing wildcard '{wildcard}' in existing prefix '{prefix}'"
    )]
    WildcardConflict {
        path: String,
        segment: String,
        wildcard: String,
        prefix: String,
    },

    /// A wildcard was registered where static children already exist.
    #[error("wildcard segment '{wildcard}' conflicts with existing children in path '{path}'")]
    WildcardConflictsWithChildren { path: String, wildcard: String },
}

impl RouteError {
    /// The pattern whose registration failed, when the fault carries one.
    pub fn path(&self) -> Option<&str> {
        match self {
            RouteError::EmptyPath => None,
            RouteError::EmptyMethod { path }
            | RouteError::MissingLeadingSlash { path }
            | RouteError::EmptyWildcardName { path }
            | RouteError::MultipleWildcards { path, .. }
            | RouteError::CatchAllNotAtEnd { path }
            | RouteError::CatchAllWithoutSlash { path }
            | RouteError::DuplicateRoute { path }
            | RouteError::WildcardConflict { path, .. }
            | RouteError::WildcardConflictsWithChildren { path, .. } => Some(path),
        }
    }

    /// Whether this fault comes from the pattern's syntax alone, as opposed
    /// to a clash with a previously registered route.
    pub fn is_syntax_error(&self) -> bool {
        !matches!(
            self,
            RouteError::DuplicateRoute { .. }
                | RouteError::WildcardConflict { .. }
                | RouteError::WildcardConflictsWithChildren { .. }
        )
    }
}
