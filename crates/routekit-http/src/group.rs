//! Route groups sharing a path prefix

use crate::dispatcher::{DispatcherBuilder, Routing};
use http::Method;
use routekit_core::path::join_paths;
use routekit_core::Result;

/// Routes registered through a group have its prefix joined in front of
/// their pattern.
///
/// ```
/// use routekit_http::{Dispatcher, Routing};
///
/// let mut builder = Dispatcher::builder();
/// {
///     let mut api = builder.group("/api");
///     let mut v1 = api.group("v1");
///     v1.get("/users/:id", "show_user", ())?;
/// }
/// let dispatcher = builder.build();
/// assert_eq!(dispatcher.routes()[0].path, "/api/v1/users/:id");
/// # Ok::<(), routekit_core::RouteError>(())
/// ```
#[derive(Debug)]
pub struct Group<'b, T> {
    prefix: String,
    builder: &'b mut DispatcherBuilder<T>,
}

impl<'b, T> Group<'b, T> {
    pub(crate) fn new(prefix: &str, builder: &'b mut DispatcherBuilder<T>) -> Self {
        Self {
            prefix: join_paths("/", prefix),
            builder,
        }
    }

    /// The normalized prefix of this group.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// A nested group whose prefix extends this one.
    pub fn group(&mut self, prefix: &str) -> Group<'_, T> {
        Group {
            prefix: join_paths(&self.prefix, prefix),
            builder: &mut *self.builder,
        }
    }
}

impl<T> Routing<T> for Group<'_, T> {
    fn route(&mut self, method: Method, pattern: &str, name: &str, handler: T) -> Result<&mut Self> {
        let pattern = join_paths(&self.prefix, pattern);
        self.builder.route(method, &pattern, name, handler)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Dispatcher, Resolution};
    use crate::Routing;
    use http::Method;
    use routekit_core::Params;

    #[test]
    fn test_prefix_is_normalized() {
        let mut builder = Dispatcher::<()>::builder();
        assert_eq!(builder.group("api").prefix(), "/api");
        assert_eq!(builder.group("/api/").prefix(), "/api/");
        assert_eq!(builder.group("").prefix(), "/");
    }

    #[test]
    fn test_group_routes_get_prefix() {
        let mut builder = Dispatcher::builder();
        builder
            .group("/admin")
            .get("/users", "admin_users", 1)
            .unwrap()
            .post("/users/:id/ban", "ban_user", 2)
            .unwrap()
            .get("", "admin_index", 3)
            .unwrap();
        let d = builder.build();

        let mut params = d.params();
        match d.resolve(&Method::POST, "/admin/users/5/ban", &mut params) {
            Resolution::Found { handler, full_path, .. } => {
                assert_eq!(*handler, 2);
                assert_eq!(full_path, "/admin/users/:id/ban");
            }
            other => panic!("expected Found, got {:?}", other),
        }
        assert_eq!(params.get("id"), Some("5"));

        let index = d.resolve(&Method::GET, "/admin", &mut Params::new());
        assert_eq!(index.handler(), Some(&3));
    }

    #[test]
    fn test_nested_groups_compose() {
        let mut builder = Dispatcher::builder();
        {
            let mut api = builder.group("/api");
            api.get("/health", "health", "health").unwrap();

            let mut v2 = api.group("/v2/");
            v2.get("items/:id", "item", "item").unwrap();
            v2.any("/echo", "echo", "echo").unwrap();
        }
        builder.get("/", "index", "index").unwrap();
        let d = builder.build();

        let mut paths: Vec<_> = d.routes().into_iter().map(|r| r.path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths, vec!["/", "/api/health", "/api/v2/echo", "/api/v2/items/:id"]);
        assert_eq!(d.reverse("item", &[&"abc"]).as_deref(), Some("/api/v2/items/abc"));
    }

    #[test]
    fn test_group_fault_is_reported() {
        let mut builder = Dispatcher::builder();
        builder.get("/api/users/:id", "", ()).unwrap();

        let mut api = builder.group("/api");
        assert!(api.get("/users/:name", "", ()).is_err());
    }
}
