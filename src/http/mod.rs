//! HTTP transport layer for the greeting server
//!
//! Provides the fallback responder that every request dispatches to.

pub mod handlers;
