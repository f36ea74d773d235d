//! Accept loop: one task per incoming connection.

pub mod listener;
