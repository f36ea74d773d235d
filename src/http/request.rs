/// HTTP request methods.
///
/// All common verbs are recognized so they can be logged, but only GET is
/// ever served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// Matching is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use webworker::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// A recognized request line.
///
/// `path` is the raw request target (e.g. `/index.html`); mapping it onto the
/// filesystem is the job of [`crate::http::resource::Resource::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
}

/// Why a line read during the request phase produced no request.
///
/// None of these are fatal; the line is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line does not start with the exact prefix `GET `
    NotGet,
    /// `GET ` with no target token after it
    MissingTarget,
}

const GET_PREFIX: &str = "GET ";

/// Parses one request line.
///
/// A line is a GET request only if it starts with exactly `GET ` (so lines
/// shorter than four characters are never GET). The target is the second
/// whitespace-separated token.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    if !line.starts_with(GET_PREFIX) {
        return Err(ParseError::NotGet);
    }

    let target = line
        .split_whitespace()
        .nth(1)
        .ok_or(ParseError::MissingTarget)?;

    Ok(Request {
        method: Method::GET,
        path: target.to_string(),
    })
}
