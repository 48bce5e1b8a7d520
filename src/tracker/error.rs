use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("poller already running")]
    AlreadyPolling,
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("position source returned status {0}")]
    Status(u16),
    #[error("malformed position response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
