use anyhow::{Context, Result};
use memchr::memmem;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::SERVER_NAME;
use crate::http::date::{Clock, current_date};
use crate::http::resource::Resource;

pub const DATE_TAG: &str = "<cs371date>";
pub const SERVER_TAG: &str = "<cs371server>";

/// Body sent when the resource is missing or not a regular file.
pub const NOT_FOUND_BODY: &str =
    "<html><head></head><body><h1>Error 404 Page Not Found</h1></html>\n";

/// Replaces every occurrence of both placeholder tags in `line`.
///
/// Works on raw bytes so lines in any ASCII-compatible encoding are
/// substituted; all other bytes pass through unchanged. No escaping, and
/// tag-like text other than the two known tags is left alone.
pub fn substitute_tags(line: &[u8], date: &str, server: &str) -> Vec<u8> {
    let line = replace_all(line, DATE_TAG.as_bytes(), date.as_bytes());
    replace_all(&line, SERVER_TAG.as_bytes(), server.as_bytes())
}

fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut last = 0;

    for start in memmem::find_iter(haystack, needle) {
        out.extend_from_slice(&haystack[last..start]);
        out.extend_from_slice(replacement);
        last = start + needle.len();
    }

    out.extend_from_slice(&haystack[last..]);
    out
}

/// Writes the response body for `resource`.
///
/// A found resource is streamed line by line with tags substituted; line
/// terminators are kept as they appear in the file. The date is read once
/// for the whole body. The file handle is dropped on every return path.
pub async fn write_content<W>(out: &mut W, resource: &Resource, clock: &dyn Clock) -> Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let path = match (&resource.path, resource.is_found()) {
        (Some(path), true) => path,
        _ => {
            out.write_all(NOT_FOUND_BODY.as_bytes())
                .await
                .context("Failed to write 404 body")?;
            return Ok(NOT_FOUND_BODY.len() as u64);
        }
    };

    let file = File::open(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let date = current_date(clock);
    let mut line = Vec::new();
    let mut written = 0u64;

    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if n == 0 {
            break;
        }

        let chunk = substitute_tags(&line, &date, SERVER_NAME);

        out.write_all(&chunk)
            .await
            .context("Failed to write response body")?;
        written += chunk.len() as u64;
    }

    tracing::debug!(path = %path.display(), bytes = written, "Streamed resource");
    Ok(written)
}
