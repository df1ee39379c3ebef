//! LanguageTool autocorrection
//!
//! Normalized text is checked against a LanguageTool instance configured for
//! automatic language detection, and the first suggested replacement of each
//! match is applied. Offsets and lengths in the response are UTF-16 code
//! units, so replacement works on the UTF-16 encoding of the original text
//! and decodes back at the end.
//!
//! This step never blocks the pipeline: any network or parse failure, and an
//! empty match list, return the input unchanged.

use serde::Deserialize;

use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::translate::http_client;

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<CorrectionMatch>,
}

/// One replacement suggestion span from the proofreading service.
#[derive(Debug, Clone, Deserialize)]
pub struct CorrectionMatch {
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub length: usize,
    #[serde(default)]
    pub replacements: Vec<Replacement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Replacement {
    pub value: String,
}

/// Client for the LanguageTool check endpoint.
pub struct Autocorrector {
    check_url: String,
}

impl Autocorrector {
    pub fn new() -> Self {
        Self::with_url(config::LANGUAGETOOL_URL.clone())
    }

    /// Uses a custom check endpoint (tests point this at a mock server).
    pub fn with_url(check_url: String) -> Self {
        Self { check_url }
    }

    /// Returns the corrected text, or the input unchanged on any failure.
    pub async fn correct(&self, text: &str) -> String {
        match self.request_matches(text).await {
            Ok(matches) if !matches.is_empty() => apply_matches(text, &matches),
            Ok(_) => text.to_string(),
            Err(e) => {
                log::warn!("LanguageTool check failed: {}", e);
                text.to_string()
            }
        }
    }

    async fn request_matches(&self, text: &str) -> AppResult<Vec<CorrectionMatch>> {
        let client = http_client(config::network::autocorrect_timeout())?;
        let response = client
            .post(&self.check_url)
            .form(&[("text", text), ("language", "auto")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::HttpStatus(response.status()));
        }

        let parsed: CheckResponse = response.json().await?;
        Ok(parsed.matches)
    }
}

impl Default for Autocorrector {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies replacement matches to the original text.
///
/// Matches are applied in ascending offset order with a walking cursor. A
/// match starting before the cursor overlaps an already-applied one and is
/// dropped (first-applied wins). A match without replacements keeps the
/// original substring; a zero-length match is a pure insertion.
pub fn apply_matches(original: &str, matches: &[CorrectionMatch]) -> String {
    let units: Vec<u16> = original.encode_utf16().collect();

    let mut sorted: Vec<&CorrectionMatch> = matches.iter().collect();
    sorted.sort_by_key(|m| m.offset);

    let mut out: Vec<u16> = Vec::with_capacity(units.len());
    let mut cursor = 0usize;

    for m in sorted {
        if m.offset < cursor || m.offset > units.len() {
            continue;
        }
        let end = (m.offset + m.length).min(units.len());

        out.extend_from_slice(&units[cursor..m.offset]);
        match m.replacements.first() {
            Some(replacement) => out.extend(replacement.value.encode_utf16()),
            None => out.extend_from_slice(&units[m.offset..end]),
        }
        cursor = end;
    }
    out.extend_from_slice(&units[cursor..]);

    String::from_utf16_lossy(&out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn m(offset: usize, length: usize, replacement: Option<&str>) -> CorrectionMatch {
        CorrectionMatch {
            offset,
            length,
            replacements: replacement
                .map(|value| {
                    vec![Replacement {
                        value: value.to_string(),
                    }]
                })
                .unwrap_or_default(),
        }
    }

    #[test]
    fn applies_single_replacement() {
        let out = apply_matches("helo world", &[m(0, 4, Some("hello"))]);
        assert_eq!(out, "hello world");
    }

    #[test]
    fn applies_matches_in_offset_order() {
        let out = apply_matches("aa bb cc", &[m(6, 2, Some("C")), m(0, 2, Some("A"))]);
        assert_eq!(out, "A bb C");
    }

    #[test]
    fn drops_overlapping_matches_after_the_first() {
        // Second match starts inside the span covered by the first.
        let out = apply_matches("abcdef", &[m(0, 4, Some("X")), m(2, 2, Some("Y"))]);
        assert_eq!(out, "Xef");
    }

    #[test]
    fn zero_length_match_is_an_insertion() {
        let out = apply_matches("ab", &[m(1, 0, Some("-"))]);
        assert_eq!(out, "a-b");
    }

    #[test]
    fn match_without_replacements_keeps_original_span() {
        let out = apply_matches("abc def", &[m(0, 3, None), m(4, 3, Some("xyz"))]);
        assert_eq!(out, "abc xyz");
    }

    #[test]
    fn offsets_are_utf16_code_units() {
        // Each Cyrillic letter is one UTF-16 unit but two UTF-8 bytes.
        let out = apply_matches("привыт світ", &[m(0, 6, Some("привіт"))]);
        assert_eq!(out, "привіт світ");
    }

    #[test]
    fn out_of_range_matches_are_skipped() {
        let out = apply_matches("ab", &[m(10, 2, Some("X"))]);
        assert_eq!(out, "ab");
    }

    #[test]
    fn empty_match_list_returns_original() {
        assert_eq!(apply_matches("як справи", &[]), "як справи");
    }
}
