//! Source-language detection
//!
//! Cyrillic text is classified locally by letters specific to Ukrainian or
//! Russian; everything else goes to the remote detect endpoint, with `en`
//! as the final fallback. Text that is Cyrillic but carries no
//! language-specific letters defaults to `uk`. The whole default behavior
//! of the bot hangs on this tie-break, so it must stay as is.

use serde::Deserialize;

use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::translate::http_client;

/// True when the text contains any Cyrillic letter, including the
/// Ukrainian- and Russian-specific ones outside the base range.
pub fn has_cyrillic(text: &str) -> bool {
    text.chars().any(|c| {
        ('А'..='я').contains(&c)
            || matches!(
                c,
                'І' | 'і' | 'Ї' | 'ї' | 'Є' | 'є' | 'Ґ' | 'ґ' | 'Ё' | 'ё' | 'Ъ' | 'ъ' | 'Ы' | 'ы' | 'Э' | 'э'
            )
    })
}

/// Letters used by Ukrainian but not Russian.
fn looks_ukrainian(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, 'І' | 'і' | 'Ї' | 'ї' | 'Є' | 'є' | 'Ґ' | 'ґ'))
}

/// Letters used by Russian but not Ukrainian.
fn looks_russian(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, 'Ё' | 'ё' | 'Ъ' | 'ъ' | 'Ы' | 'ы' | 'Э' | 'э'))
}

#[derive(Debug, Deserialize)]
struct Detection {
    language: String,
}

/// Detects the source language of a message.
pub struct LanguageDetector {
    detect_url: String,
}

impl LanguageDetector {
    pub fn new() -> Self {
        let base = config::LIBRETRANSLATE_URLS
            .first()
            .map(String::as_str)
            .unwrap_or("https://libretranslate.de");
        Self::with_url(format!("{}/detect", base))
    }

    /// Uses a custom detect endpoint (tests point this at a mock server).
    pub fn with_url(detect_url: String) -> Self {
        Self { detect_url }
    }

    /// Returns a lower-cased two-letter-ish language code.
    ///
    /// Local Cyrillic heuristics run first; the remote service is only
    /// consulted for non-Cyrillic text, and `en` is the fallback when it
    /// fails or returns nothing usable.
    pub async fn detect(&self, text: &str) -> String {
        if has_cyrillic(text) {
            if looks_ukrainian(text) {
                return "uk".to_string();
            }
            if looks_russian(text) {
                return "ru".to_string();
            }
            // Only letters shared by both alphabets: default to Ukrainian.
            return "uk".to_string();
        }

        match self.detect_remote(text).await {
            Ok(Some(lang)) => lang,
            Ok(None) => "en".to_string(),
            Err(e) => {
                log::debug!("remote language detection failed: {}", e);
                "en".to_string()
            }
        }
    }

    async fn detect_remote(&self, text: &str) -> AppResult<Option<String>> {
        let client = http_client(config::network::detect_timeout())?;
        let response = client
            .post(&self.detect_url)
            .json(&serde_json::json!({ "q": text }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::HttpStatus(response.status()));
        }

        let detections: Vec<Detection> = response.json().await?;
        Ok(detections
            .into_iter()
            .next()
            .map(|d| d.language)
            .filter(|lang| lang.len() == 2)
            .map(|lang| lang.to_lowercase()))
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}
