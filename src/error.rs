use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("missing secret: set the {var} environment variable")]
    MissingSecret { var: &'static str },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Document store errors, raised at the adapter boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("store rejected the request: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("malformed store response: {0}")]
    Malformed(String),
}

/// Remote console errors, raised at the adapter boundary.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("console connection failed: {0}")]
    Connect(String),

    #[error("console authentication failed")]
    Auth,

    #[error("console command failed: {0}")]
    Command(String),

    #[error("console timed out after {seconds}s")]
    Timeout { seconds: u64 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
