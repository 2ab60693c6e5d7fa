//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! The activation client builds an `HttpRequest` and parses an `HttpResponse`
//! without touching the network. Executing the POST is the job of a
//! `Transport` implementation supplied by the caller, so the build, parse and
//! map steps stay deterministic and can be tested without a socket.

/// An activation POST described as plain data.
///
/// The southbound system only exposes a single POST endpoint, so the method
/// is implied and not carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// An HTTP response described as plain data.
///
/// Built by the transport for every status code it receives, including 4xx
/// and 5xx, and handed to `ActivationClient::parse_activate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
