//! Client-side orchestrator for a single predictive form: collects raw
//! numeric fields, submits them to a prediction endpoint, and drives a
//! render surface through a pending → resolved lifecycle.

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use shared::{
    domain::{RawFieldValues, Resolution, SubmissionId, UiState},
    error::PredictionError,
    protocol::{PredictRequest, PredictResponse},
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, error, info};

pub mod endpoint;
pub mod format;
pub mod surface;

pub use endpoint::{HttpPredictionEndpoint, PredictionEndpoint};
pub use format::format_usd;
pub use surface::{NullRenderSurface, Region, RenderSurface, ResultColor};

/// Control label shown while a request is in flight.
pub const PENDING_CONTROL_LABEL: &str = "Calculating...";
/// Literal marker written to the result display on any failure.
pub const ERROR_RESULT_TEXT: &str = "Error";

const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(600);
const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub server_url: String,
    /// Cosmetic delay before a successful result is revealed. UX polish
    /// only; the failure path never waits.
    pub settle_delay: Duration,
}

impl OrchestratorConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

/// Interaction trigger for one submission cycle. Carries the raw field
/// values and whether its default action has been suppressed.
#[derive(Debug)]
pub struct SubmitTrigger {
    fields: RawFieldValues,
    default_prevented: bool,
}

impl SubmitTrigger {
    pub fn new(fields: RawFieldValues) -> Self {
        Self {
            fields,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn fields(&self) -> &RawFieldValues {
        &self.fields
    }
}

#[derive(Debug, Clone)]
pub enum ClientEvent {
    SubmissionStarted {
        submission_id: SubmissionId,
    },
    PredictionResolved {
        submission_id: SubmissionId,
        price: f64,
        formatted_price: String,
        resolved_at: DateTime<Utc>,
    },
    PredictionFailed {
        submission_id: SubmissionId,
        error: PredictionError,
        resolved_at: DateTime<Utc>,
    },
}

struct OrchestratorState {
    ui_state: UiState,
    original_label: Option<String>,
}

/// Owns the submit-to-render lifecycle. One spawned task per accepted
/// trigger; the pending state is the sole concurrency control, so a second
/// trigger while a request is in flight is rejected without a request.
pub struct RequestOrchestrator {
    endpoint: Arc<dyn PredictionEndpoint>,
    surface: Arc<dyn RenderSurface>,
    settle_delay: Duration,
    inner: Mutex<OrchestratorState>,
    events: broadcast::Sender<ClientEvent>,
}

impl RequestOrchestrator {
    pub fn new(config: OrchestratorConfig) -> Arc<Self> {
        let endpoint = Arc::new(HttpPredictionEndpoint::new(&config.server_url));
        Self::new_with_dependencies(config, Arc::new(NullRenderSurface), endpoint)
    }

    pub fn new_with_surface(
        config: OrchestratorConfig,
        surface: Arc<dyn RenderSurface>,
    ) -> Arc<Self> {
        let endpoint = Arc::new(HttpPredictionEndpoint::new(&config.server_url));
        Self::new_with_dependencies(config, surface, endpoint)
    }

    pub fn new_with_dependencies(
        config: OrchestratorConfig,
        surface: Arc<dyn RenderSurface>,
        endpoint: Arc<dyn PredictionEndpoint>,
    ) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            endpoint,
            surface,
            settle_delay: config.settle_delay,
            inner: Mutex::new(OrchestratorState {
                ui_state: UiState::Idle,
                original_label: None,
            }),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    pub async fn ui_state(&self) -> UiState {
        self.inner.lock().await.ui_state
    }

    /// Entry point for one submission cycle. Fire-and-forget from the
    /// caller's perspective: the request runs on a dedicated task and the
    /// outcome is reported through the render surface and the event stream.
    pub async fn handle_submit(self: &Arc<Self>, trigger: &mut SubmitTrigger) {
        trigger.prevent_default();

        let submission_id = SubmissionId::new();
        {
            let mut inner = self.inner.lock().await;
            if !inner.ui_state.accepts_trigger() {
                debug!("predict: trigger ignored while a request is in flight");
                return;
            }
            inner.ui_state = UiState::Pending;
            inner.original_label = Some(self.surface.control_label());
        }

        // Pending entry. Every mutation lands before the request task can
        // run, so a partially entered state is never observable.
        self.surface.set_control_label(PENDING_CONTROL_LABEL);
        self.surface.set_control_enabled(false);
        self.surface.set_visibility(Region::ResultContainer, true);
        self.surface.set_visibility(Region::Loader, true);
        self.surface.set_visibility(Region::Content, false);

        let request = PredictRequest::from_raw(trigger.fields());
        info!(submission_id = %submission_id, "predict: submission accepted");
        let _ = self
            .events
            .send(ClientEvent::SubmissionStarted { submission_id });

        let orchestrator = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = orchestrator.endpoint.predict(&request).await;
            orchestrator.resolve(submission_id, outcome).await;
        });
    }

    async fn resolve(
        &self,
        submission_id: SubmissionId,
        outcome: Result<PredictResponse, PredictionError>,
    ) {
        match outcome {
            Ok(response) => {
                let formatted_price = format_usd(response.price);
                tokio::time::sleep(self.settle_delay).await;

                let original_label = self.finish_cycle(Resolution::Success).await;
                self.surface.set_visibility(Region::Loader, false);
                self.surface.set_visibility(Region::Content, true);
                self.surface.set_result_text(&formatted_price);
                self.surface.set_control_label(&original_label);
                self.surface.set_control_enabled(true);

                info!(
                    submission_id = %submission_id,
                    price = response.price,
                    formatted = %formatted_price,
                    "predict: prediction resolved"
                );
                let _ = self.events.send(ClientEvent::PredictionResolved {
                    submission_id,
                    price: response.price,
                    formatted_price,
                    resolved_at: Utc::now(),
                });
            }
            Err(err) => {
                let original_label = self.finish_cycle(Resolution::Error).await;
                self.surface.set_visibility(Region::Loader, false);
                self.surface.set_visibility(Region::Content, true);
                self.surface.set_result_text(ERROR_RESULT_TEXT);
                self.surface.set_result_color(ResultColor::Error);
                self.surface.set_control_label(&original_label);
                self.surface.set_control_enabled(true);

                error!(
                    submission_id = %submission_id,
                    kind = err.kind(),
                    error = %err,
                    "predict: prediction failed"
                );
                let _ = self.events.send(ClientEvent::PredictionFailed {
                    submission_id,
                    error: err,
                    resolved_at: Utc::now(),
                });
            }
        }
    }

    /// Transitions out of pending and hands back the label recorded at
    /// trigger time so the control can be restored regardless of outcome.
    async fn finish_cycle(&self, resolution: Resolution) -> String {
        let mut inner = self.inner.lock().await;
        inner.ui_state = UiState::Resolved(resolution);
        inner.original_label.take().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
