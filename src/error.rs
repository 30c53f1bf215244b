use thiserror::Error;

/// Errors surfaced by the editor core.
///
/// Not-found ids and out-of-range reorders are not errors: the store absorbs
/// them and reports through its return values. Everything here is either a
/// broken type tag at the parse boundary or a failed external collaborator.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    #[error("Unknown slide type: {0}")]
    UnknownSlideType(String),

    #[error("Fullscreen is not supported on this platform")]
    FullscreenUnsupported,

    #[error("Could not enter fullscreen mode: {0}")]
    FullscreenDenied(String),

    #[error("Could not exit fullscreen mode: {0}")]
    FullscreenExit(String),

    #[error("Presentation {0} not found")]
    PresentationNotFound(String),

    #[error("No presentation is loaded")]
    NoPresentation,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EditorError>;
