//! One PIN terminal activation, end to end.
//!
//! # Design
//! `PinTerminalActivator` wires the pieces together: build the request, hand
//! it to the `Transport`, parse whatever comes back, map the status and report
//! it. No step returns an error to the caller. A request that never produced a
//! response becomes an `ActivationResult` carrying the `-1` sentinel.

use tracing::{error, info, info_span};
use uuid::Uuid;

use crate::client::ActivationClient;
use crate::reporter::OrchestratorReporter;
use crate::transport::Transport;
use crate::types::{ActivationRequest, ActivationResult, ActivationStatus};

pub struct PinTerminalActivator<T, R> {
    client: ActivationClient,
    transport: T,
    reporter: R,
    distinguish_transport_errors: bool,
}

impl<T: Transport, R: OrchestratorReporter> PinTerminalActivator<T, R> {
    pub fn new(client: ActivationClient, transport: T, reporter: R) -> Self {
        Self {
            client,
            transport,
            reporter,
            distinguish_transport_errors: false,
        }
    }

    /// Report `ERROR` rather than `UNKNOWN` when the southbound request never
    /// produced a response. Off by default.
    pub fn with_distinguish_transport_errors(mut self, enabled: bool) -> Self {
        self.distinguish_transport_errors = enabled;
        self
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    pub fn activate(&mut self, request: &ActivationRequest) -> ActivationStatus {
        let span = info_span!(
            "activation",
            attempt_id = %Uuid::new_v4(),
            customer_id = request.customer_id(),
            mac_address = request.mac_address()
        );
        let _guard = span.enter();

        let result = self.send(request);
        let status = self.resolve(&result);
        let detail = format!(
            "customer {} terminal {} southbound status {}",
            request.customer_id(),
            request.mac_address(),
            result.http_status
        );
        self.reporter.report(status, &detail);
        status
    }

    /// Perform the southbound call. Never fails: transport errors are logged
    /// and turned into the sentinel result.
    pub fn send(&self, request: &ActivationRequest) -> ActivationResult {
        let http_request = self.client.build_activate(request);

        match self.transport.execute(&http_request) {
            Ok(response) => {
                let result = self.client.parse_activate(response);
                info!("Response from southbound system: {}", result.response_body);
                result
            }
            Err(e) => {
                error!(error = %e, url = %http_request.url, "Error during southbound system request");
                ActivationResult::transport_failure()
            }
        }
    }

    fn resolve(&self, result: &ActivationResult) -> ActivationStatus {
        if self.distinguish_transport_errors && result.is_transport_failure() {
            return ActivationStatus::Error;
        }
        ActivationStatus::from_http_status(result.http_status)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::{ActivationError, Result};
    use crate::http::{HttpRequest, HttpResponse};

    struct FakeTransport {
        reply: Option<(u16, &'static str)>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        fn responding(status: u16, body: &'static str) -> Self {
            Self {
                reply: Some((status, body)),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                reply: None,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for FakeTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
            self.seen.borrow_mut().push(request.clone());
            match self.reply {
                Some((status, body)) => Ok(HttpResponse {
                    status,
                    headers: Vec::new(),
                    body: body.to_string(),
                }),
                None => Err(ActivationError::Transport("connection refused".to_string())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        reports: Vec<(ActivationStatus, String)>,
    }

    impl OrchestratorReporter for RecordingReporter {
        fn report(&mut self, status: ActivationStatus, detail: &str) {
            self.reports.push((status, detail.to_string()));
        }
    }

    fn activator(transport: FakeTransport) -> PinTerminalActivator<FakeTransport, RecordingReporter> {
        PinTerminalActivator::new(
            ActivationClient::new("http://southbound.test/activate"),
            transport,
            RecordingReporter::default(),
        )
    }

    fn request() -> ActivationRequest {
        ActivationRequest::new("12345", "AA:BB:CC:DD:EE:FF")
    }

    #[test]
    fn created_is_reported_active() {
        let mut activator = activator(FakeTransport::responding(201, ""));
        assert_eq!(activator.activate(&request()), ActivationStatus::Active);
        assert_eq!(activator.reporter().reports.len(), 1);
        assert_eq!(activator.reporter().reports[0].0, ActivationStatus::Active);
    }

    #[test]
    fn not_found_is_reported_inactive() {
        let mut activator = activator(FakeTransport::responding(404, "no such terminal"));
        assert_eq!(activator.activate(&request()), ActivationStatus::Inactive);
    }

    #[test]
    fn conflict_is_reported_conflict() {
        let mut activator = activator(FakeTransport::responding(409, "attached elsewhere"));
        assert_eq!(activator.activate(&request()), ActivationStatus::Conflict);
    }

    #[test]
    fn server_error_is_reported_unknown() {
        let mut activator = activator(FakeTransport::responding(500, "boom"));
        assert_eq!(activator.activate(&request()), ActivationStatus::Unknown);
    }

    #[test]
    fn transport_failure_is_unknown_by_default() {
        let mut activator = activator(FakeTransport::unreachable());
        assert_eq!(activator.activate(&request()), ActivationStatus::Unknown);
        let (status, detail) = &activator.reporter().reports[0];
        assert_eq!(*status, ActivationStatus::Unknown);
        assert!(detail.ends_with("southbound status -1"), "{detail}");
    }

    #[test]
    fn transport_failure_is_error_when_distinguished() {
        let mut activator =
            activator(FakeTransport::unreachable()).with_distinguish_transport_errors(true);
        assert_eq!(activator.activate(&request()), ActivationStatus::Error);
    }

    #[test]
    fn distinguishing_does_not_touch_real_statuses() {
        let mut activator =
            activator(FakeTransport::responding(503, "")).with_distinguish_transport_errors(true);
        assert_eq!(activator.activate(&request()), ActivationStatus::Unknown);
    }

    #[test]
    fn send_returns_sentinel_on_transport_failure() {
        let activator = activator(FakeTransport::unreachable());
        let result = activator.send(&request());
        assert_eq!(result, ActivationResult::transport_failure());
    }

    #[test]
    fn send_posts_exactly_the_two_fields() {
        let activator = activator(FakeTransport::responding(201, "ok"));
        let result = activator.send(&ActivationRequest::new("11111", "AA:BB:CC:DD:EE:FF"));
        assert_eq!(result.http_status, 201);
        assert_eq!(result.response_body, "ok");

        let seen = activator.transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].url, "http://southbound.test/activate");
        let body: serde_json::Value = serde_json::from_str(&seen[0].body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"customerId": "11111", "macAddress": "AA:BB:CC:DD:EE:FF"})
        );
    }

    #[test]
    fn each_activation_reports_once() {
        let mut activator = activator(FakeTransport::responding(409, ""));
        activator.activate(&request());
        activator.activate(&request());
        let reporter = activator.into_reporter();
        assert_eq!(reporter.reports.len(), 2);
    }

    mod logging {
        use std::collections::HashMap;
        use std::fmt;
        use std::sync::{Arc, Mutex};

        use tracing::field::{Field, Visit};
        use tracing::span::{Attributes, Id};
        use tracing::{Event, Level, Subscriber};
        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
        use tracing_subscriber::registry::LookupSpan;

        use super::{request, FakeTransport};
        use crate::activator::PinTerminalActivator;
        use crate::client::ActivationClient;
        use crate::reporter::LoggingReporter;

        #[derive(Debug, Clone)]
        struct Captured {
            level: Level,
            fields: HashMap<String, String>,
            span_fields: HashMap<String, String>,
        }

        impl Captured {
            fn message(&self) -> &str {
                self.fields.get("message").map(String::as_str).unwrap_or("")
            }
        }

        #[derive(Default)]
        struct Fields(HashMap<String, String>);

        impl Visit for Fields {
            fn record_str(&mut self, field: &Field, value: &str) {
                self.0.insert(field.name().to_string(), value.to_string());
            }

            fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
                self.0.insert(field.name().to_string(), format!("{value:?}"));
            }
        }

        #[derive(Clone, Default)]
        struct CaptureLayer {
            events: Arc<Mutex<Vec<Captured>>>,
        }

        impl<S> Layer<S> for CaptureLayer
        where
            S: Subscriber + for<'a> LookupSpan<'a>,
        {
            fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
                let mut fields = Fields::default();
                attrs.record(&mut fields);
                if let Some(span) = ctx.span(id) {
                    span.extensions_mut().insert(fields);
                }
            }

            fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
                let mut fields = Fields::default();
                event.record(&mut fields);

                let mut span_fields = HashMap::new();
                if let Some(scope) = ctx.event_scope(event) {
                    for span in scope.from_root() {
                        if let Some(recorded) = span.extensions().get::<Fields>() {
                            span_fields.extend(recorded.0.clone());
                        }
                    }
                }

                self.events.lock().unwrap().push(Captured {
                    level: *event.metadata().level(),
                    fields: fields.0,
                    span_fields,
                });
            }
        }

        fn capture(transport: FakeTransport, attempts: usize) -> Vec<Captured> {
            let layer = CaptureLayer::default();
            let events = layer.events.clone();
            let subscriber = tracing_subscriber::registry().with(layer);

            tracing::subscriber::with_default(subscriber, || {
                let mut activator = PinTerminalActivator::new(
                    ActivationClient::new("http://southbound.test/activate"),
                    transport,
                    LoggingReporter::new(),
                );
                for _ in 0..attempts {
                    activator.activate(&request());
                }
            });

            let captured = events.lock().unwrap().clone();
            captured
        }

        fn find<'a>(events: &'a [Captured], prefix: &str) -> Vec<&'a Captured> {
            events.iter().filter(|e| e.message().starts_with(prefix)).collect()
        }

        #[test]
        fn response_and_status_lines_are_logged_at_info() {
            let events = capture(FakeTransport::responding(201, "activated"), 1);

            let response = find(&events, "Response from southbound system");
            assert_eq!(response.len(), 1);
            assert_eq!(response[0].level, Level::INFO);
            assert_eq!(response[0].message(), "Response from southbound system: activated");

            let status = find(&events, "Status sent to orchestrator");
            assert_eq!(status.len(), 1);
            assert_eq!(status[0].level, Level::INFO);
            assert_eq!(status[0].message(), "Status sent to orchestrator: ACTIVE");
        }

        #[test]
        fn transport_failure_is_logged_at_error() {
            let events = capture(FakeTransport::unreachable(), 1);

            let errors: Vec<_> = events.iter().filter(|e| e.level == Level::ERROR).collect();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].message(), "Error during southbound system request");
            assert_eq!(errors[0].fields["error"], "southbound transport failed: connection refused");
            assert!(find(&events, "Response from southbound system").is_empty());

            let status = find(&events, "Status sent to orchestrator");
            assert_eq!(status[0].message(), "Status sent to orchestrator: UNKNOWN");
        }

        #[test]
        fn events_carry_activation_span_fields() {
            let events = capture(FakeTransport::responding(409, ""), 1);

            let status = find(&events, "Status sent to orchestrator");
            let span = &status[0].span_fields;
            assert_eq!(span["customer_id"], "12345");
            assert_eq!(span["mac_address"], "AA:BB:CC:DD:EE:FF");
            assert_eq!(span["attempt_id"].len(), 36);
        }

        #[test]
        fn one_attempt_shares_an_id_and_attempts_differ() {
            let events = capture(FakeTransport::responding(404, ""), 2);

            let responses = find(&events, "Response from southbound system");
            let statuses = find(&events, "Status sent to orchestrator");
            assert_eq!(responses.len(), 2);
            assert_eq!(statuses.len(), 2);

            for (response, status) in responses.iter().zip(&statuses) {
                assert_eq!(response.span_fields["attempt_id"], status.span_fields["attempt_id"]);
            }
            assert_ne!(
                statuses[0].span_fields["attempt_id"],
                statuses[1].span_fields["attempt_id"]
            );
        }
    }
}
