use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use super::error::DictionaryError;

//─────────────────────────────────────────────────────────────────────────────

/// Loads the words of a given character length from a word file.
///
/// The file holds one word per line. Lines are trimmed before their length is
/// checked, and duplicates collapse into one entry. Lines that are not valid
/// UTF-8 are skipped, so only a failure to open or read the file is an error.
pub fn load_words_from_file(
    file_path: &Path,
    length: usize,
) -> Result<BTreeSet<String>, DictionaryError> {
    let file_bytes = fs::read(file_path)
        .map_err(|e| DictionaryError::ReadFile(file_path.display().to_string(), e))?;

    Ok(file_bytes
        .split(|&b| b == b'\n')
        .filter_map(|line| std::str::from_utf8(line).ok())
        .flat_map(|line| parse_words(line, length))
        .collect())
}

/// Returns every trimmed line of `content` that is exactly `length` characters
/// long.
pub fn parse_words(content: &str, length: usize) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() == length)
        .map(str::to_string)
        .collect()
}
