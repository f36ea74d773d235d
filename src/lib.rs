//! Webworker - per-connection static HTML responder
//!
//! Core library: request reading, resource resolution, response writing
//! and tag substitution for a single HTTP connection.

pub mod config;
pub mod http;
pub mod server;
