//! Domain types for PIN terminal activation.
//!
//! # Design
//! `ActivationRequest` is the only payload sent southbound; its serde names
//! match the southbound schema (`customerId`, `macAddress`). The mock server
//! defines its own copy of the schema independently and the integration tests
//! catch any drift.

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP status recorded when the southbound request produced no response.
pub const TRANSPORT_FAILURE_STATUS: i32 = -1;

/// Identifies the terminal to activate and the customer it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRequest {
    customer_id: String,
    mac_address: String,
}

impl ActivationRequest {
    pub fn new(customer_id: impl Into<String>, mac_address: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            mac_address: mac_address.into(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn mac_address(&self) -> &str {
        &self.mac_address
    }
}

/// Raw outcome of one southbound call.
///
/// `http_status` is a signed integer so the transport-failure sentinel fits
/// alongside real status codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationResult {
    pub http_status: i32,
    pub response_body: String,
}

impl ActivationResult {
    pub fn transport_failure() -> Self {
        Self {
            http_status: TRANSPORT_FAILURE_STATUS,
            response_body: String::new(),
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        self.http_status == TRANSPORT_FAILURE_STATUS
    }
}

/// Coarse activation outcome reported to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivationStatus {
    Active,
    Inactive,
    Conflict,
    Unknown,
    Error,
}

impl ActivationStatus {
    /// Map a southbound status code to an activation status.
    ///
    /// Only 201, 404 and 409 carry meaning. Every other value, the
    /// transport-failure sentinel included, is `Unknown`.
    pub fn from_http_status(status: i32) -> Self {
        match status {
            201 => ActivationStatus::Active,
            404 => ActivationStatus::Inactive,
            409 => ActivationStatus::Conflict,
            _ => ActivationStatus::Unknown,
        }
    }

    /// Label sent to the orchestrator.
    pub fn label(self) -> &'static str {
        match self {
            ActivationStatus::Active => "ACTIVE",
            ActivationStatus::Inactive => "INACTIVE",
            ActivationStatus::Conflict => "CONFLICT",
            ActivationStatus::Unknown => "UNKNOWN",
            ActivationStatus::Error => "ERROR",
        }
    }
}

impl fmt::Display for ActivationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
