use anyhow::{Context, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::SERVER_NAME;
use crate::http::date::{Clock, current_date};
use crate::http::resource::Resource;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Builds the fixed header set for a resolved resource.
///
/// Order: `Date`, `Server`, `Connection`, `Content-Type`.
pub fn build_head(resource: &Resource, content_type: &str, clock: &dyn Clock) -> Response {
    ResponseBuilder::new(StatusCode::from_resource(resource))
        .header("Date", current_date(clock))
        .header("Server", SERVER_NAME)
        .header("Connection", "close")
        .header("Content-Type", content_type)
        .build()
}

/// Serializes the status line and headers, each ending in a single `\n`,
/// followed by the blank line that ends the block.
pub fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\n");
    }

    buf.extend_from_slice(b"\n");

    buf
}

/// Writes the response preamble for `resource` to `out`.
pub async fn write_header<W>(
    out: &mut W,
    resource: &Resource,
    content_type: &str,
    clock: &dyn Clock,
) -> Result<StatusCode>
where
    W: AsyncWrite + Unpin,
{
    let head = build_head(resource, content_type, clock);
    out.write_all(&serialize_head(&head))
        .await
        .context("Failed to write response header")?;
    Ok(head.status)
}
