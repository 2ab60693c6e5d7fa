use std::sync::Arc;

pub use axum::http::StatusCode;
use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

pub const UNMATCHED_BODY: &str = "Request was not matched";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Activation {
    pub customer_id: String,
    pub mac_address: String,
}

/// A canned reply for one exact activation payload.
#[derive(Clone, Debug)]
pub struct Stub {
    pub activation: Activation,
    pub status: StatusCode,
    pub body: String,
}

impl Stub {
    pub fn new(customer_id: &str, mac_address: &str, status: StatusCode) -> Self {
        Self {
            activation: Activation {
                customer_id: customer_id.to_string(),
                mac_address: mac_address.to_string(),
            },
            status,
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// Stubs in registration order. The last matching stub wins.
pub type Stubs = Arc<Vec<Stub>>;

/// The southbound behaviour the activator is exercised against: a known
/// terminal, one that does not exist, and one already attached elsewhere.
pub fn default_stubs() -> Vec<Stub> {
    vec![
        Stub::new("12345", "AA:BB:CC:DD:EE:FF", StatusCode::CREATED),
        Stub::new("12345", "AA:BB:CC:DD:EE:AA", StatusCode::NOT_FOUND),
        Stub::new("11111", "AA:BB:CC:DD:EE:FF", StatusCode::CONFLICT),
    ]
}

pub fn app() -> Router {
    app_with_stubs(default_stubs())
}

pub fn app_with_stubs(stubs: Vec<Stub>) -> Router {
    let stubs: Stubs = Arc::new(stubs);
    Router::new()
        .route("/activate", post(activate))
        .with_state(stubs)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_stubs(listener: TcpListener, stubs: Vec<Stub>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_stubs(stubs)).await
}

/// The body is taken as raw text so a payload that is not the expected JSON
/// falls through to the unmatched reply instead of an extractor rejection.
async fn activate(State(stubs): State<Stubs>, body: String) -> (StatusCode, String) {
    let Ok(activation) = serde_json::from_str::<Activation>(&body) else {
        debug!(%body, "activation body is not a southbound payload");
        return (StatusCode::NOT_FOUND, UNMATCHED_BODY.to_string());
    };

    match find_stub(&stubs, &activation) {
        Some(stub) => (stub.status, stub.body.clone()),
        None => (StatusCode::NOT_FOUND, UNMATCHED_BODY.to_string()),
    }
}

fn find_stub<'a>(stubs: &'a [Stub], activation: &Activation) -> Option<&'a Stub> {
    stubs.iter().rev().find(|stub| stub.activation == *activation)
}
