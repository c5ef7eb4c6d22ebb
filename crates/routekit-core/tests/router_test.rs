use routekit_core::{Params, RouteError, Router};

fn scenario() -> Router<&'static str> {
    let mut router = Router::new();
    router.insert("GET", "/", "index", "/").unwrap();
    router.insert("GET", "/users", "list_users", "/users").unwrap();
    router.insert("GET", "/users/:id", "show_user", "/users/:id").unwrap();
    router.insert("GET", "/files/*path", "serve_file", "/files/*path").unwrap();
    router
}

#[test]
fn test_concrete_scenario() {
    let router = scenario();
    let mut params = router.params();

    let m = router.find("GET", "/users/7", &mut params);
    assert_eq!(m.value, Some(&"/users/:id"));
    assert_eq!(params.iter().collect::<Vec<_>>(), vec![("id", "7")]);

    params.clear();
    let m = router.find("GET", "/missing", &mut params);
    assert!(!m.is_found());
    assert!(!m.tsr);

    params.clear();
    let m = router.find("GET", "/files/a/b", &mut params);
    assert_eq!(m.value, Some(&"/files/*path"));
    assert_eq!(params.iter().collect::<Vec<_>>(), vec![("path", "a/b")]);

    params.clear();
    assert_eq!(router.find("GET", "/", &mut params).value, Some(&"/"));
    assert!(params.is_empty());
}

#[test]
fn test_param_and_catch_all_capture() {
    let mut router = Router::new();
    router.insert("GET", "/users/:id", "", ()).unwrap();
    router.insert("GET", "/files/*rest", "", ()).unwrap();

    let mut params = router.params();
    assert!(router.find("GET", "/users/42", &mut params).is_found());
    assert_eq!(params.get("id"), Some("42"));

    params.clear();
    assert!(router.find("GET", "/files/a/b/c", &mut params).is_found());
    assert_eq!(params.get("rest"), Some("a/b/c"));
}

#[test]
fn test_registration_faults() {
    let mut router = Router::new();
    router.insert("GET", "/users/:id", "", ()).unwrap();

    let err = router.insert("GET", "/users/:name", "", ()).unwrap_err();
    assert!(matches!(err, RouteError::WildcardConflict { .. }));
    assert_eq!(err.path(), Some("/users/:name"));

    let err = router.insert("GET", "/users/:id", "", ()).unwrap_err();
    assert!(matches!(err, RouteError::DuplicateRoute { .. }));

    // Other methods are unaffected.
    router.insert("POST", "/users/:name", "", ()).unwrap();
}

#[test]
fn test_trailing_slash_hint() {
    let mut router = Router::new();
    router.insert("GET", "/users/", "", ()).unwrap();

    let mut params = Params::new();
    let m = router.find("GET", "/users", &mut params);
    assert!(m.value.is_none());
    assert!(m.tsr);
}

#[test]
fn test_params_buffer_is_reused_between_requests() {
    let mut router = Router::new();
    router.insert("GET", "/a/:x/b/:y", "", ()).unwrap();

    let mut params = router.params();
    let capacity = params.capacity();
    for i in 0..100 {
        params.clear();
        let path = format!("/a/{}/b/{}", i, i * 2);
        assert!(router.find("GET", &path, &mut params).is_found());
        assert_eq!(params.len(), 2);
    }
    assert_eq!(params.capacity(), capacity);
}
