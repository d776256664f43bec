use thiserror::Error;

#[derive(Error, Debug)]
pub enum HintError {
    #[error("request to hint model failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("hint model response was not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hint model never returned a well-formed hint for \"{word}\" within {attempts} attempts")]
    NonConvergent { word: String, attempts: u32 },
}
