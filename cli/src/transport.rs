//! Blocking southbound transport backed by ureq.

use activation_core::{ActivationError, HttpRequest, HttpResponse, Transport};
use tracing::debug;

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// An agent that returns 4xx/5xx responses as data rather than `Err`, so
    /// the body of an error response reaches the activator. Bodies are read
    /// without ureq's default size cap; any response is a result.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ActivationError> {
        debug!(url = %req.url, body = %req.body, "posting activation");

        let mut builder = self.agent.post(&req.url);
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }
        let mut response = builder
            .send(req.body.as_bytes())
            .map_err(|e| ActivationError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_string()
            .map_err(|e| ActivationError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
