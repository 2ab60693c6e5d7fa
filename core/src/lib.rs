//! Synchronous PIN terminal activation core.
//!
//! # Overview
//! Builds the southbound activation request, parses whatever response comes
//! back, maps the HTTP status to an `ActivationStatus` and reports it to the
//! orchestrator. The network round-trip is delegated to a `Transport` (the
//! host-does-IO pattern), so everything here is deterministic under test.
//!
//! # Design
//! - `ActivationClient` is stateless; it holds only the endpoint URL.
//! - `ActivationStatus::from_http_status` is the whole mapping table: 201,
//!   404 and 409 are named, everything else is `Unknown`.
//! - `PinTerminalActivator` never returns an error. Transport failures are
//!   logged and recorded as the `-1` sentinel status.

pub mod activator;
pub mod client;
pub mod error;
pub mod http;
pub mod reporter;
pub mod transport;
pub mod types;

pub use activator::PinTerminalActivator;
pub use client::ActivationClient;
pub use error::ActivationError;
pub use http::{HttpRequest, HttpResponse};
pub use reporter::{LoggingReporter, OrchestratorReporter};
pub use transport::Transport;
pub use types::{ActivationRequest, ActivationResult, ActivationStatus, TRANSPORT_FAILURE_STATUS};
