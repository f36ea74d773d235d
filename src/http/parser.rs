use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::http::request::{Method, ParseError, Request, parse_request_line};

/// Reads the request header block and returns the last recognized GET request.
///
/// Lines are read until an empty line or end of stream. Non-GET lines are
/// skipped. A read error (including non-UTF-8 input) ends the read phase
/// quietly; whatever was recognized up to then is returned.
pub async fn read_request<R>(reader: &mut R) -> Option<Request>
where
    R: AsyncBufRead + Unpin,
{
    let mut request = None;
    let mut line = String::new();

    loop {
        line.clear();

        match reader.read_line(&mut line).await {
            Ok(0) => {
                tracing::debug!("Client closed input before end of headers");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Request read error");
                break;
            }
        }

        let trimmed = line.trim_end_matches(['\r', '\n']);
        tracing::debug!(line = trimmed, "Request line");

        if trimmed.is_empty() {
            break;
        }

        match parse_request_line(trimmed) {
            Ok(req) => {
                tracing::debug!(path = %req.path, "GET target");
                request = Some(req);
            }
            Err(ParseError::NotGet) => {
                let verb = trimmed.split_whitespace().next().unwrap_or_default();
                if let Some(method) = Method::from_str(verb) {
                    tracing::debug!(method = ?method, "Unsupported request method");
                }
            }
            Err(ParseError::MissingTarget) => {
                tracing::warn!(line = trimmed, "GET line without a target");
            }
        }
    }

    request
}
