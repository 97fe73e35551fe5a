pub mod aggregate;
pub mod cli;
pub mod config;
pub mod load;
pub mod path;
pub mod report;
pub mod run;
pub mod source;

#[derive(Debug)]
pub enum RoundscoreError {
    Hub(hf_hub::api::sync::ApiError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Eval { path: String, reason: String },
    Config(String),
}

impl std::fmt::Display for RoundscoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundscoreError::Hub(e) => write!(f, "hub: {e}"),
            RoundscoreError::Io(e) => write!(f, "io: {e}"),
            RoundscoreError::Json(e) => write!(f, "json: {e}"),
            RoundscoreError::Eval { path, reason } => write!(f, "eval {path}: {reason}"),
            RoundscoreError::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for RoundscoreError {}

impl From<hf_hub::api::sync::ApiError> for RoundscoreError {
    fn from(e: hf_hub::api::sync::ApiError) -> Self {
        RoundscoreError::Hub(e)
    }
}

impl From<std::io::Error> for RoundscoreError {
    fn from(e: std::io::Error) -> Self {
        RoundscoreError::Io(e)
    }
}

impl From<serde_json::Error> for RoundscoreError {
    fn from(e: serde_json::Error) -> Self {
        RoundscoreError::Json(e)
    }
}
