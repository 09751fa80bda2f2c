use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FxError {
    #[error("asset preload failed: {0}")]
    PreloadFailed(String),
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
