use webroot::http::headers::Headers;
use webroot::http::request::{Method, Request, RequestBuilder};

#[test]
fn test_request_header_retrieval() {
    let mut headers = Headers::new();
    headers.insert("Host", "example.com");
    headers.insert("Content-Type", "application/json");

    let req = Request {
        method: Method::GET,
        target: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        body: vec![],
    };

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_path_and_query() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/calculate-area?height=4&width=3")
        .build()
        .unwrap();

    assert_eq!(req.path(), "/calculate-area");
    assert_eq!(req.query(), Some("height=4&width=3"));
}

#[test]
fn test_request_without_query() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/index.html")
        .build()
        .unwrap();

    assert_eq!(req.path(), "/index.html");
    assert_eq!(req.query(), None);
}

#[test]
fn test_request_query_split_on_first_question_mark() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/a?b=1?c")
        .build()
        .unwrap();

    assert_eq!(req.path(), "/a");
    assert_eq!(req.query(), Some("b=1?c"));
}

#[test]
fn test_request_builder_defaults_version() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .target("/upload?file-name=a.png")
        .body(vec![1, 2, 3])
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.body, vec![1, 2, 3]);
}

#[test]
fn test_request_builder_requires_method_and_target() {
    assert!(RequestBuilder::new().target("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_method_tokens() {
    assert_eq!(Method::from_token("GET"), Some(Method::GET));
    assert_eq!(Method::from_token("POST"), Some(Method::POST));
    for token in ["get", "post", "HEAD", "PUT", "DELETE", ""] {
        assert_eq!(Method::from_token(token), None, "token {token:?}");
    }
    assert_eq!(Method::POST.to_string(), "POST");
}
