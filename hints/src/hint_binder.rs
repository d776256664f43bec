use cruciverbal_core::{HintedWord, WordRecord};
use serde::{Deserialize, Serialize};

use crate::errors::HintError;
use crate::util::http_client;

const GENERATION_BUDGET: u32 = 20;
const DEFAULT_ATTEMPT_CAP: u32 = 8;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prefix: &'a str,
    length: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: String,
}

/// Client for the external hint-generating language model.
///
/// Sends `<WORD_UPPERCASE>\t` as the prefix and accepts a response only if,
/// after splitting on newline (keeping the first line) and then on tab, it
/// yields exactly two fields whose first matches the requested word
/// case-insensitively. Unlike the source this binder is modeled on, retries
/// are capped rather than unbounded — §9's design note calls out indefinite
/// retry as a termination hazard.
pub struct HintBinder {
    endpoint: String,
    client: reqwest::Client,
    attempt_cap: u32,
}

impl HintBinder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: http_client(),
            attempt_cap: DEFAULT_ATTEMPT_CAP,
        }
    }

    pub fn with_attempt_cap(mut self, attempt_cap: u32) -> Self {
        self.attempt_cap = attempt_cap;
        self
    }

    /// Request a hint for a single word, retrying malformed responses up to
    /// the attempt cap.
    pub async fn generate(&self, word: &str) -> Result<String, HintError> {
        let prefix = format!("{}\t", word.to_uppercase());

        for attempt in 1..=self.attempt_cap {
            let response = self
                .client
                .post(&self.endpoint)
                .json(&GenerateRequest {
                    prefix: &prefix,
                    length: GENERATION_BUDGET,
                })
                .send()
                .await?
                .json::<GenerateResponse>()
                .await?;

            if let Some(hint) = parse_response(&response.text, word) {
                return Ok(hint);
            }
            log::trace!("hint model gave a malformed response for \"{word}\" on attempt {attempt}");
        }

        Err(HintError::NonConvergent {
            word: word.to_string(),
            attempts: self.attempt_cap,
        })
    }

    /// Request hints for every word record produced by the final scanner
    /// pass, in order. Fails the whole batch on the first non-convergent
    /// word, per §7's "no partial output" policy for setup/collaborator
    /// failures.
    pub async fn bind_all(&self, words: &[WordRecord]) -> Result<Vec<HintedWord>, HintError> {
        let mut hinted = Vec::with_capacity(words.len());
        for record in words {
            let hint = self.generate(&record.word).await?;
            hinted.push(HintedWord::new(record.clone(), hint));
        }
        Ok(hinted)
    }
}

/// Split on newline (keep the first line), then on tab; accept only an
/// exact two-field result whose first field matches `word` case-insensitively.
fn parse_response(raw: &str, word: &str) -> Option<String> {
    let first_line = raw.lines().next().unwrap_or("");
    let mut fields = first_line.split('\t');
    let candidate = fields.next()?;
    let hint = fields.next()?;

    if fields.next().is_some() {
        return None;
    }
    if !candidate.eq_ignore_ascii_case(word) {
        return None;
    }
    if hint.is_empty() {
        return None;
    }
    Some(hint.to_string())
}
