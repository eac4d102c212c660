use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Build-time variable consulted first (`option_env!`).
pub const BUILD_TIME_VAR: &str = "GENESIX_N8N_WEBHOOK_ETAPA1_URL";

/// Runtime environment variable consulted when the build-time one is unset.
pub const RUNTIME_VAR: &str = "N8N_WEBHOOK_ETAPA1_URL";

/// Value used when nothing is configured.
pub const PLACEHOLDER_URL: &str = "<SUBSTITUIR_PELA_URL_DO_WEBHOOK>";

const BUILD_TIME_URL: Option<&str> = option_env!("GENESIX_N8N_WEBHOOK_ETAPA1_URL");

// ---------------------------------------------------------------------------
// EndpointSource
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointSource {
    Explicit,
    BuildTime,
    Environment,
    Placeholder,
}

impl fmt::Display for EndpointSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EndpointSource::Explicit => "explicit",
            EndpointSource::BuildTime => "build_time",
            EndpointSource::Environment => "environment",
            EndpointSource::Placeholder => "placeholder",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// WebhookEndpoint
// ---------------------------------------------------------------------------

/// The resolved step-1 webhook URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookEndpoint {
    url: String,
    source: EndpointSource,
}

impl WebhookEndpoint {
    /// Resolve the endpoint.
    ///
    /// Priority:
    /// 1. `explicit` (e.g. `--webhook-url`)
    /// 2. `GENESIX_N8N_WEBHOOK_ETAPA1_URL` baked in at build time
    /// 3. `N8N_WEBHOOK_ETAPA1_URL` from the process environment
    /// 4. the placeholder sentinel
    ///
    /// Empty values are skipped at every level.
    pub fn resolve(explicit: Option<&str>) -> Self {
        let runtime = std::env::var(RUNTIME_VAR).ok();
        Self::resolve_from(explicit, BUILD_TIME_URL, runtime.as_deref())
    }

    fn resolve_from(
        explicit: Option<&str>,
        build_time: Option<&str>,
        runtime: Option<&str>,
    ) -> Self {
        let candidates = [
            (explicit, EndpointSource::Explicit),
            (build_time, EndpointSource::BuildTime),
            (runtime, EndpointSource::Environment),
        ];
        for (value, source) in candidates {
            if let Some(url) = value.filter(|v| !v.is_empty()) {
                debug!(%source, "webhook endpoint resolved");
                return Self {
                    url: url.to_string(),
                    source,
                };
            }
        }
        warn!("{BUILD_TIME_VAR} and {RUNTIME_VAR} unset, webhook not configured");
        Self::placeholder()
    }

    pub fn placeholder() -> Self {
        Self {
            url: PLACEHOLDER_URL.to_string(),
            source: EndpointSource::Placeholder,
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source: EndpointSource::Explicit,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn source(&self) -> EndpointSource {
        self.source
    }

    /// False for an empty URL or the placeholder sentinel.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && self.url != PLACEHOLDER_URL
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_wins() {
        let ep = WebhookEndpoint::resolve_from(
            Some("https://n8n.local/a"),
            Some("https://n8n.local/b"),
            Some("https://n8n.local/c"),
        );
        assert_eq!(ep.url(), "https://n8n.local/a");
        assert_eq!(ep.source(), EndpointSource::Explicit);
    }

    #[test]
    fn build_time_before_environment() {
        let ep = WebhookEndpoint::resolve_from(
            None,
            Some("https://n8n.local/b"),
            Some("https://n8n.local/c"),
        );
        assert_eq!(ep.url(), "https://n8n.local/b");
        assert_eq!(ep.source(), EndpointSource::BuildTime);
    }

    #[test]
    fn environment_fallback_skips_empty_values() {
        let ep = WebhookEndpoint::resolve_from(Some(""), Some(""), Some("https://n8n.local/c"));
        assert_eq!(ep.url(), "https://n8n.local/c");
        assert_eq!(ep.source(), EndpointSource::Environment);
        assert!(ep.is_configured());
    }

    #[test]
    fn nothing_set_yields_placeholder() {
        let ep = WebhookEndpoint::resolve_from(None, None, None);
        assert_eq!(ep.url(), PLACEHOLDER_URL);
        assert_eq!(ep.source(), EndpointSource::Placeholder);
        assert!(!ep.is_configured());
    }

    #[test]
    fn placeholder_or_empty_is_not_configured() {
        assert!(!WebhookEndpoint::from_url(PLACEHOLDER_URL).is_configured());
        assert!(!WebhookEndpoint::from_url("").is_configured());
        assert!(WebhookEndpoint::from_url("http://127.0.0.1:5678/webhook/etapa1").is_configured());
    }
}
