use thiserror::Error;

/// Failure reported by the external render engine's draw call, such as a
/// lost rendering surface.
#[derive(Debug, Clone, Error)]
#[error("render engine failure: {reason}")]
pub struct EngineFailure {
    pub reason: String,
}

impl EngineFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Fatal errors surfaced by the scene core.
///
/// Both classes end the render loop; neither is retried.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene was assembled with a missing or invalid resource.
    #[error("scene misconfigured: {0}")]
    Configuration(String),

    /// The external engine failed to draw a frame.
    #[error(transparent)]
    RenderEngine(#[from] EngineFailure),
}
