//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 responder that handles exactly one
//! request per connection and always closes afterwards.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler implementing the request-response state machine
//! - **`parser`**: Reads request lines from the connection and extracts the GET target
//! - **`request`**: HTTP request representation and request-line parsing
//! - **`resource`**: Resolves a request target to a local file and checks it once
//! - **`response`**: Status codes and the response head with its ordered headers
//! - **`writer`**: Serializes and writes the status line and header block
//! - **`content`**: Streams the file body with placeholder tag substitution
//! - **`date`**: Clock abstraction and the date format shared by header and body
//!
//! # Connection State Machine
//!
//! Each client connection goes through a linear state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read request lines until a blank line
//!        └──────┬──────┘
//!               │ Request (or none)
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolved      │ ← Resource checked once: Found / Missing
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │  WritingHeader   │ ← Status line + Date/Server/Connection/Content-Type
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   WritingBody    │ ← File with tags replaced, or the 404 fragment
//!        └──────┬───────────┘
//!               ▼
//!             Done            ← flush + shutdown, on success and on failure
//! ```
//!
//! # Example
//!
//! ```ignore
//! use webworker::http::connection::Connection;
//! use webworker::http::resource::Site;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, Site::new(".", "text.html"));
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod content;
pub mod date;
pub mod parser;
pub mod request;
pub mod resource;
pub mod response;
pub mod writer;

/// Product identifier used by the `Server` header and the `<cs371server>` tag.
pub const SERVER_NAME: &str = "cs371-webworker/0.1";

/// MIME type passed to the header writer for served content.
pub const CONTENT_TYPE_HTML: &str = "text/html";
