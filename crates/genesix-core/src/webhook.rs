use crate::config::WebhookEndpoint;
use crate::error::{GenesixError, Result};
use crate::payload::Payload;
use tracing::{debug, info, warn};

/// Message used when the webhook rejects a request without a readable body.
pub const SERVER_ERROR_FALLBACK: &str = "Falha ao enviar dados para o webhook do n8n";

/// One-shot JSON POST client for the step-1 webhook.
///
/// No timeout is configured: a request that never completes keeps the caller
/// waiting.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    endpoint: WebhookEndpoint,
}

impl WebhookClient {
    pub fn new(endpoint: WebhookEndpoint) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &WebhookEndpoint {
        &self.endpoint
    }

    /// POST `payload` as JSON.
    ///
    /// Returns the response body parsed as JSON, or `None` when the body is
    /// empty or not JSON. Fails before any I/O when the endpoint is not
    /// configured.
    pub async fn send(&self, payload: &Payload) -> Result<Option<serde_json::Value>> {
        if !self.endpoint.is_configured() {
            return Err(GenesixError::WebhookNotConfigured);
        }

        info!(url = self.endpoint.url(), "posting step-1 payload");
        let response = self
            .http
            .post(self.endpoint.url())
            .json(payload)
            .send()
            .await
            .map_err(|e| GenesixError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok().filter(|b| !b.is_empty());
            warn!(%status, "webhook rejected payload");
            return Err(GenesixError::Server(
                body.unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string()),
            ));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!("unreadable webhook response body: {e}");
                return Ok(None);
            }
        };
        match serde_json::from_str(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                debug!("webhook response is not JSON: {e}");
                Ok(None)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormState, TextField};
    use crate::payload::build_payload;
    use mockito::Matcher;
    use serde_json::json;

    fn payload() -> Payload {
        let mut state = FormState::new();
        state.set_text(TextField::NomeProduto, "Pix Facil");
        state.stakeholders = vec!["  ".into(), "Alice".into(), "".into()];
        build_payload(&state)
    }

    fn client_for(server: &mockito::ServerGuard) -> WebhookClient {
        WebhookClient::new(WebhookEndpoint::from_url(format!(
            "{}/webhook/etapa1",
            server.url()
        )))
    }

    #[tokio::test]
    async fn posts_json_and_parses_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/webhook/etapa1")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "nomeProduto": "Pix Facil",
                "stakeholders": ["Alice"],
                "5whys": [],
            })))
            .with_status(200)
            .with_body(r#"{"received":true}"#)
            .expect(1)
            .create_async()
            .await;

        let response = client_for(&server).send(&payload()).await.unwrap();
        assert_eq!(response, Some(json!({"received": true})));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn malformed_success_body_is_tolerated() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/webhook/etapa1")
            .with_status(200)
            .with_body("Workflow was started")
            .create_async()
            .await;

        let response = client_for(&server).send(&payload()).await.unwrap();
        assert_eq!(response, None);
    }

    #[tokio::test]
    async fn empty_success_body_yields_none() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/webhook/etapa1")
            .with_status(204)
            .create_async()
            .await;

        assert_eq!(client_for(&server).send(&payload()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn server_error_uses_body_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/webhook/etapa1")
            .with_status(500)
            .with_body("server error")
            .create_async()
            .await;

        let err = client_for(&server).send(&payload()).await.unwrap_err();
        assert!(matches!(err, GenesixError::Server(ref m) if m == "server error"));
        assert_eq!(err.to_string(), "server error");
    }

    #[tokio::test]
    async fn server_error_without_body_uses_fallback() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/webhook/etapa1")
            .with_status(404)
            .create_async()
            .await;

        let err = client_for(&server).send(&payload()).await.unwrap_err();
        assert_eq!(err.to_string(), SERVER_ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn unconfigured_endpoint_fails_before_io() {
        let client = WebhookClient::new(WebhookEndpoint::placeholder());
        let err = client.send(&payload()).await.unwrap_err();
        assert!(matches!(err, GenesixError::WebhookNotConfigured));
        assert!(err.to_string().contains("N8N_WEBHOOK_ETAPA1_URL"));
    }

    #[tokio::test]
    async fn connection_failure_is_transport_error() {
        let client = WebhookClient::new(WebhookEndpoint::from_url("http://127.0.0.1:1/webhook"));
        let err = client.send(&payload()).await.unwrap_err();
        assert!(matches!(err, GenesixError::Transport(ref m) if !m.is_empty()));
    }
}
