use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenesixError {
    #[error("unknown wizard step: {0}")]
    UnknownStep(String),

    #[error("index {index} out of range for '{field}' (len {len})")]
    IndexOutOfRange {
        field: String,
        index: usize,
        len: usize,
    },

    #[error("'{field}' holds at most {max} items, got {got}")]
    ListCapExceeded { field: String, max: usize, got: usize },

    #[error("unsupported draft format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error(
        "URL do webhook n8n nao configurada (defina N8N_WEBHOOK_ETAPA1_URL ou GENESIX_N8N_WEBHOOK_ETAPA1_URL)."
    )]
    WebhookNotConfigured,

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Server(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("account already exists: {0}")]
    AccountExists(String),

    #[error("invalid registration: {0}")]
    InvalidRegistration(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GenesixError>;
