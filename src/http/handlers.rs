//! Axum HTTP handlers for the web server
//!
//! Provides the fixed plain-text responder served for every request,
//! regardless of method, path, headers, or body.

/// Exact bytes served to every client, trailing newline included.
pub const GREETING: &str = "Hello, Worllld! I MADE A CHANGE : )\n";

pub async fn greeting() -> &'static str {
    GREETING
}
