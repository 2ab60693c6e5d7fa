//! Console front end for PIN terminal activation.
//!
//! # Overview
//! Wires `activation-core` to a real network: a ureq-backed `Transport`,
//! environment configuration, tracing setup and the interactive menu that
//! picks which preset terminal to activate.

pub mod config;
pub mod menu;
pub mod telemetry;
pub mod transport;

use activation_core::{
    ActivationClient, ActivationRequest, ActivationStatus, LoggingReporter, PinTerminalActivator,
};

pub use config::ActivatorConfig;
pub use transport::UreqTransport;

/// Run one activation with a fresh activator, as each menu selection does.
pub fn activate_once(config: &ActivatorConfig, request: &ActivationRequest) -> ActivationStatus {
    let mut activator = PinTerminalActivator::new(
        ActivationClient::new(&config.southbound_url),
        UreqTransport::new(),
        LoggingReporter::new(),
    )
    .with_distinguish_transport_errors(config.distinguish_transport_errors);
    activator.activate(request)
}
