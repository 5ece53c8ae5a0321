use super::hotspot::Anchor;

/// Failures the scene can observe. None of them are fatal: layout misses are
/// retried, asset failures count as resolved, blocked playback asks the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("layout not ready for {0:?}")]
    LayoutNotReady(Anchor),
    #[error("asset failed to load: {0}")]
    AssetFailed(String),
    #[error("playback denied: {0}")]
    PlaybackDenied(String),
    #[error("missing element #{0}")]
    MissingElement(&'static str),
}
