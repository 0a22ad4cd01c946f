#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed chain {chain:?}: {reason}")]
    MalformedChain { chain: String, reason: String },

    #[error("Index {index} is out of range for a chain of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("Invalid file format: expected to find an end-of-data {sentinel:?} line")]
    MissingSentinel { sentinel: char },

    #[error("Invalid file format: expected groups of 4 chains, found {count} chains")]
    IncompleteDataset { count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
