//! Stateless request builder and response parser for the southbound
//! activation endpoint.
//!
//! # Design
//! `ActivationClient` holds only the endpoint URL. `build_activate` produces
//! an `HttpRequest` and `parse_activate` consumes an `HttpResponse`; the
//! round-trip in between belongs to a `Transport`. Neither step can fail: the
//! body is a JSON object of two strings and any status is a result.

use crate::http::{HttpRequest, HttpResponse};
use crate::types::{ActivationRequest, ActivationResult};

#[derive(Debug, Clone)]
pub struct ActivationClient {
    url: String,
}

impl ActivationClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim().to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn build_activate(&self, input: &ActivationRequest) -> HttpRequest {
        let body = serde_json::json!({
            "customerId": input.customer_id(),
            "macAddress": input.mac_address(),
        });
        HttpRequest {
            url: self.url.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    /// Every received status is a result; the body is kept verbatim whether
    /// it came with a 2xx or an error status.
    pub fn parse_activate(&self, response: HttpResponse) -> ActivationResult {
        ActivationResult {
            http_status: i32::from(response.status),
            response_body: response.body,
        }
    }
}
