use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Unit tag that does not name any supported unit of the family.
    /// This is a caller programming error, not a runtime data error.
    #[error("unsupported unit \"{0}\"")]
    UnsupportedUnit(String),

    /// The host storage backend failed on get/set. The core never
    /// performs I/O itself, this only surfaces backend failures.
    #[error("storage backend error: {0}")]
    Storage(String),

    /// Flight path (de)serialization error, when loading or saving
    /// through a key-value store.
    #[error("flight path codec error: {0}")]
    Codec(#[from] serde_json::Error),
}
