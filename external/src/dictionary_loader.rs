use std::fs;
use std::path::Path;

use cruciverbal_core::Dictionary;

use crate::error::ExternalError;

/// Load a dictionary from a UTF-8 text file, one word per line.
///
/// Each line is trimmed and lowercased; lines outside `[2, grid_len - 6]`
/// letters, or containing whitespace after trimming, are discarded rather
/// than treated as an error — a malformed wordlist is just a smaller one.
pub fn load<P: AsRef<Path>>(path: P, grid_len: usize) -> Result<Dictionary, ExternalError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let max_len = grid_len.saturating_sub(6);

    let dictionary: Dictionary = contents
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| {
            let len = word.chars().count();
            (2..=max_len).contains(&len) && !word.chars().any(char::is_whitespace)
        })
        .collect();

    if dictionary.is_empty() {
        return Err(ExternalError::EmptyDictionary(path.display().to_string()));
    }

    log::info!(
        "loaded {} words from {} (length window 2..={})",
        dictionary.len(),
        path.display(),
        max_len
    );
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn filters_by_length_window_and_case() {
        let file = write_temp("Anchor\nA\nratatouille\nrope\n  CAT  \n");
        let dictionary = load(file.path(), 15).unwrap();
        assert!(dictionary.contains("anchor"));
        assert!(dictionary.contains("rope"));
        assert!(dictionary.contains("cat"));
        assert!(!dictionary.contains("a"));
        assert!(!dictionary.contains("ratatouille"));
    }

    #[test]
    fn empty_result_is_an_error() {
        let file = write_temp("a\nbb\n");
        let err = load(file.path(), 15).unwrap_err();
        assert!(matches!(err, ExternalError::EmptyDictionary(_)));
    }
}
