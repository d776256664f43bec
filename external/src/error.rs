use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExternalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dictionary file {0} contains no word in the required length range")]
    EmptyDictionary(String),

    #[error("output directory {0} could not be created")]
    OutputDirectory(String),
}
