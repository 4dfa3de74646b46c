// ═══════════════════════════════════════════════════════════════════════
// Errors raised while decoding engine messages
// ═══════════════════════════════════════════════════════════════════════

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config lists {0} unit descriptors, expected at least 8")]
    MissingUnitInfo(usize),

    #[error("frame field `{0}` is missing or malformed")]
    MissingField(&'static str),

    #[error("malformed unit record in {list}[{index}]")]
    MalformedUnit { list: &'static str, index: usize },

    #[error("malformed {kind} event record: {detail}")]
    MalformedEvent { kind: &'static str, detail: String },
}

pub type Result<T> = std::result::Result<T, FrameError>;
