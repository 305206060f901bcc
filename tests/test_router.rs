use std::path::PathBuf;

use webroot::http::request::{Method, Request, RequestBuilder};
use webroot::http::response::StatusCode;
use webroot::interfaces::Params;
use webroot::router::{RouteDecision, route};
use webroot::site::Site;

fn site() -> Site {
    Site::new("/srv/webroot", "index.html", "/srv/upload")
}

fn request(method: Method, target: &str) -> Request {
    RequestBuilder::new()
        .method(method)
        .target(target)
        .build()
        .unwrap()
}

#[test]
fn test_get_with_query_names_interface() {
    match route(request(Method::GET, "/calculate-area?height=4&width=3"), &site()) {
        RouteDecision::Dynamic { name, params } => {
            assert_eq!(name, "calculate_area");
            assert_eq!(params, Params::Query("height=4&width=3".to_string()));
        }
        other => panic!("unexpected decision {other:?}"),
    }
}

#[test]
fn test_every_dash_becomes_underscore() {
    match route(request(Method::GET, "/a-b-c-d?k=v"), &site()) {
        RouteDecision::Dynamic { name, .. } => assert_eq!(name, "a_b_c_d"),
        other => panic!("unexpected decision {other:?}"),
    }
}

#[test]
fn test_post_carries_query_and_body() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .target("/upload?file-name=duck.jpg")
        .body(vec![0xff, 0xd8])
        .build()
        .unwrap();

    match route(req, &site()) {
        RouteDecision::Dynamic { name, params } => {
            assert_eq!(name, "upload");
            assert_eq!(
                params,
                Params::WithBody {
                    query: "file-name=duck.jpg".to_string(),
                    body: vec![0xff, 0xd8],
                }
            );
        }
        other => panic!("unexpected decision {other:?}"),
    }
}

#[test]
fn test_post_without_query_is_rejected() {
    assert!(matches!(
        route(request(Method::POST, "/upload"), &site()),
        RouteDecision::Rejected(StatusCode::BadRequest)
    ));
}

#[test]
fn test_empty_interface_name() {
    match route(request(Method::GET, "?x=1"), &site()) {
        RouteDecision::Dynamic { name, .. } => assert_eq!(name, ""),
        other => panic!("unexpected decision {other:?}"),
    }
}

#[test]
fn test_root_maps_to_default_document() {
    match route(request(Method::GET, "/"), &site()) {
        RouteDecision::Static(path) => assert_eq!(path, PathBuf::from("/srv/webroot/index.html")),
        other => panic!("unexpected decision {other:?}"),
    }
}

#[test]
fn test_static_path_joins_webroot() {
    match route(request(Method::GET, "/imgs/duck.png"), &site()) {
        RouteDecision::Static(path) => assert_eq!(path, PathBuf::from("/srv/webroot/imgs/duck.png")),
        other => panic!("unexpected decision {other:?}"),
    }
}

#[test]
fn test_reserved_paths_are_fixed() {
    let cases = [
        ("/forbidden", StatusCode::Forbidden),
        ("/moved", StatusCode::MovedTemporarily),
        ("/error", StatusCode::InternalServerError),
        ("/legal", StatusCode::UnavailableForLegalReasons),
    ];

    for (target, status) in cases {
        match route(request(Method::GET, target), &site()) {
            RouteDecision::Fixed(resp) => assert_eq!(resp.status, status, "target {target}"),
            other => panic!("unexpected decision {other:?} for {target}"),
        }
    }
}

#[test]
fn test_moved_points_home() {
    let RouteDecision::Fixed(resp) = route(request(Method::GET, "/moved"), &site()) else {
        panic!("expected a fixed response");
    };
    assert_eq!(resp.headers.get("Location"), Some("/"));
}

#[test]
fn test_reserved_path_with_query_is_an_interface() {
    assert!(matches!(
        route(request(Method::GET, "/forbidden?x=1"), &site()),
        RouteDecision::Dynamic { .. }
    ));
}

#[test]
fn test_traversal_is_forbidden() {
    for target in ["/../etc/passwd", "/imgs/../../secret", "index.html"] {
        assert!(
            matches!(
                route(request(Method::GET, target), &site()),
                RouteDecision::Rejected(StatusCode::Forbidden)
            ),
            "target {target}"
        );
    }
}

#[test]
fn test_query_splits_on_first_question_mark() {
    match route(request(Method::GET, "/calculate-next?x=1?y"), &site()) {
        RouteDecision::Dynamic { name, params } => {
            assert_eq!(name, "calculate_next");
            assert_eq!(params, Params::Query("x=1?y".to_string()));
        }
        other => panic!("unexpected decision {other:?}"),
    }
}
