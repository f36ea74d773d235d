use chrono::{TimeZone, Utc};
use std::io::Write;
use webworker::http::SERVER_NAME;
use webworker::http::content::{NOT_FOUND_BODY, substitute_tags, write_content};
use webworker::http::date::{FixedClock, format_date};
use webworker::http::resource::{Resource, ResourceStatus};

fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 3, 9, 17, 5, 0).unwrap())
}

fn found(file: &tempfile::NamedTempFile) -> Resource {
    Resource {
        path: Some(file.path().to_path_buf()),
        status: ResourceStatus::Found,
    }
}

#[test]
fn test_substitute_both_tags() {
    let out = substitute_tags(b"Hello <cs371server> on <cs371date>", "DATE", "SRV");
    assert_eq!(out, b"Hello SRV on DATE");
}

#[test]
fn test_substitute_all_occurrences() {
    let out = substitute_tags(b"<cs371date><cs371date> <cs371server><cs371server>", "d", "s");
    assert_eq!(out, b"dd ss");
}

#[test]
fn test_substitute_leaves_other_tags() {
    let line = b"<cs371> <cs371Date> <b>bold</b> <cs371serverx";
    assert_eq!(substitute_tags(line, "d", "s"), line);
}

#[test]
fn test_substitute_line_without_tags() {
    assert_eq!(substitute_tags(b"", "d", "s"), b"");
    assert_eq!(substitute_tags(b"plain text\n", "d", "s"), b"plain text\n");
}

#[test]
fn test_substitute_non_utf8_line() {
    let out = substitute_tags(b"<p>caf\xe9 by <cs371server> at <cs371date></p>\n", "D", "S");
    assert_eq!(out, b"<p>caf\xe9 by S at D</p>\n");
}

#[test]
fn test_substitute_is_idempotent() {
    let date = format_date(fixed_clock().0);
    let once = substitute_tags(b"<p><cs371date> / <cs371server></p>", &date, SERVER_NAME);
    let twice = substitute_tags(&once, &date, SERVER_NAME);
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_write_content_missing_resource() {
    let mut out = Vec::new();
    let n = write_content(&mut out, &Resource::missing(), &fixed_clock())
        .await
        .unwrap();

    assert_eq!(out, NOT_FOUND_BODY.as_bytes());
    assert_eq!(n, NOT_FOUND_BODY.len() as u64);
}

#[tokio::test]
async fn test_write_content_substitutes_and_keeps_lines() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "<h1><cs371server></h1>\r\n<p>Now: <cs371date></p>\nlast line").unwrap();

    let mut out = Vec::new();
    write_content(&mut out, &found(&file), &fixed_clock())
        .await
        .unwrap();

    let expected = format!(
        "<h1>{}</h1>\r\n<p>Now: Sat, 09 Mar 2024 17:05:00 GMT</p>\nlast line",
        SERVER_NAME
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[tokio::test]
async fn test_write_content_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();

    let mut out = Vec::new();
    let n = write_content(&mut out, &found(&file), &fixed_clock())
        .await
        .unwrap();

    assert_eq!(n, 0);
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_write_content_substitutes_latin1_lines() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"<p>caf\xe9 by <cs371server> at <cs371date></p>\n\xff<cs371date>\n")
        .unwrap();

    let mut out = Vec::new();
    write_content(&mut out, &found(&file), &fixed_clock())
        .await
        .unwrap();

    let mut expected = b"<p>caf\xe9 by ".to_vec();
    expected.extend_from_slice(SERVER_NAME.as_bytes());
    expected.extend_from_slice(b" at Sat, 09 Mar 2024 17:05:00 GMT</p>\n\xff");
    expected.extend_from_slice(b"Sat, 09 Mar 2024 17:05:00 GMT\n");
    assert_eq!(out, expected);
}

#[tokio::test]
async fn test_write_content_file_removed_after_check() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let resource = found(&file);
    drop(file);

    let mut out = Vec::new();
    let result = write_content(&mut out, &resource, &fixed_clock()).await;

    assert!(result.is_err());
    assert!(out.is_empty());
}
