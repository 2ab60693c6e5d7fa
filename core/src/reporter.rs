//! Sinks that receive the final activation status.

use tracing::{debug, info};

use crate::types::ActivationStatus;

/// Receives the terminal status of an activation attempt.
///
/// Reporting cannot fail; a sink that needs to talk to a remote orchestrator
/// is expected to swallow and log its own errors.
pub trait OrchestratorReporter {
    fn report(&mut self, status: ActivationStatus, detail: &str);
}

impl<R: OrchestratorReporter + ?Sized> OrchestratorReporter for &mut R {
    fn report(&mut self, status: ActivationStatus, detail: &str) {
        (**self).report(status, detail)
    }
}

/// Logs every status and remembers the latest one.
#[derive(Debug, Default)]
pub struct LoggingReporter {
    last: Option<ActivationStatus>,
}

impl LoggingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_status(&self) -> Option<ActivationStatus> {
        self.last
    }
}

impl OrchestratorReporter for LoggingReporter {
    fn report(&mut self, status: ActivationStatus, detail: &str) {
        info!("Status sent to orchestrator: {}", status);
        debug!(%status, detail);
        self.last = Some(status);
    }
}
