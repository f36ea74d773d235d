use webworker::http::request::{Method, ParseError, Request, parse_request_line};

#[test]
fn test_method_from_str() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("POST"), Some(Method::POST));
    assert_eq!(Method::from_str("HEAD"), Some(Method::HEAD));
    assert_eq!(Method::from_str("get"), None);
    assert_eq!(Method::from_str("Host:"), None);
}

#[test]
fn test_parse_get_line() {
    let req = parse_request_line("GET /index.html HTTP/1.1").unwrap();

    assert_eq!(
        req,
        Request {
            method: Method::GET,
            path: "/index.html".to_string(),
        }
    );
}

#[test]
fn test_parse_root_target() {
    let req = parse_request_line("GET / HTTP/1.1").unwrap();
    assert_eq!(req.path, "/");
}

#[test]
fn test_parse_get_without_version() {
    let req = parse_request_line("GET /page.html").unwrap();
    assert_eq!(req.path, "/page.html");
}

#[test]
fn test_parse_extra_whitespace_between_tokens() {
    let req = parse_request_line("GET   /spaced.html   HTTP/1.1").unwrap();
    assert_eq!(req.path, "/spaced.html");
}

#[test]
fn test_parse_other_verbs_rejected() {
    for line in ["POST / HTTP/1.1", "HEAD / HTTP/1.1", "PUT /x HTTP/1.1"] {
        assert_eq!(parse_request_line(line), Err(ParseError::NotGet));
    }
}

#[test]
fn test_parse_prefix_is_case_sensitive() {
    assert_eq!(parse_request_line("get / HTTP/1.1"), Err(ParseError::NotGet));
    assert_eq!(parse_request_line("Get / HTTP/1.1"), Err(ParseError::NotGet));
}

#[test]
fn test_parse_prefix_requires_space() {
    assert_eq!(parse_request_line("GETX / HTTP/1.1"), Err(ParseError::NotGet));
    assert_eq!(parse_request_line("GET\t/ HTTP/1.1"), Err(ParseError::NotGet));
}

#[test]
fn test_parse_short_lines() {
    for line in ["", "G", "GE", "GET"] {
        assert_eq!(parse_request_line(line), Err(ParseError::NotGet));
    }
}

#[test]
fn test_parse_get_without_target() {
    assert_eq!(parse_request_line("GET "), Err(ParseError::MissingTarget));
    assert_eq!(parse_request_line("GET    "), Err(ParseError::MissingTarget));
}

#[test]
fn test_parse_header_line_is_not_get() {
    assert_eq!(
        parse_request_line("Host: example.com"),
        Err(ParseError::NotGet)
    );
}
