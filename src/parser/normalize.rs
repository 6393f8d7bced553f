//! Line normalization: paragraphs in, trimmed non-empty lines out.

use unicode_normalization::UnicodeNormalization;

/// Flatten document paragraphs into the line sequence the scanner walks.
///
/// Paragraphs containing soft line breaks contribute one line per break.
/// Text is NFC-composed so precomposed marker keywords match decomposed input.
pub fn normalize_lines<S: AsRef<str>>(paragraphs: &[S]) -> Vec<String> {
    paragraphs
        .iter()
        .flat_map(|p| p.as_ref().lines())
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.nfc().collect())
        .collect()
}
