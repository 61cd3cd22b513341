use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::PredictionError,
    protocol::{PredictRequest, PredictResponse},
};

/// Seam over the prediction endpoint so the orchestrator can be exercised
/// without a live service.
#[async_trait]
pub trait PredictionEndpoint: Send + Sync {
    async fn predict(&self, request: &PredictRequest)
        -> Result<PredictResponse, PredictionError>;
}

/// POSTs the JSON request body to `{server_url}/predict` and classifies the
/// outcome into the shared failure taxonomy.
pub struct HttpPredictionEndpoint {
    http: Client,
    server_url: String,
}

impl HttpPredictionEndpoint {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url: String = server_url.into();
        Self {
            http: Client::new(),
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.server_url)
    }
}

#[async_trait]
impl PredictionEndpoint for HttpPredictionEndpoint {
    async fn predict(
        &self,
        request: &PredictRequest,
    ) -> Result<PredictResponse, PredictionError> {
        let response = self
            .http
            .post(self.predict_url())
            .json(request)
            .send()
            .await
            .map_err(|err| PredictionError::Transport {
                reason: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::RejectedStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<PredictResponse>()
            .await
            .map_err(|err| PredictionError::MalformedResponse {
                reason: err.to_string(),
            })
    }
}
