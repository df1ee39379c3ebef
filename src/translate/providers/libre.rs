//! LibreTranslate fallback provider
//!
//! Tries a fixed ordered list of mirror endpoints. The mirrors do not agree
//! on a response shape, so three variants are accepted: a `translatedText`
//! field, a `translated_text` field, or an array whose first element has a
//! `translatedText` field.

use async_trait::async_trait;

use crate::core::config;
use crate::translate::http_client;

use super::TranslationProvider;

pub struct LibreProvider {
    bases: Vec<String>,
}

impl LibreProvider {
    pub fn new() -> Self {
        Self::with_bases(config::LIBRETRANSLATE_URLS.clone())
    }

    /// Uses custom mirror bases (tests point these at mock servers).
    pub fn with_bases(bases: Vec<String>) -> Self {
        Self { bases }
    }
}

impl Default for LibreProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Pulls the translated text out of any of the known response shapes.
fn extract_translated_text(value: &serde_json::Value) -> Option<String> {
    let text = value
        .get("translatedText")
        .and_then(|v| v.as_str())
        .or_else(|| value.get("translated_text").and_then(|v| v.as_str()))
        .or_else(|| {
            value
                .get(0)
                .and_then(|first| first.get("translatedText"))
                .and_then(|v| v.as_str())
        })?;

    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[async_trait]
impl TranslationProvider for LibreProvider {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Option<String> {
        let client = http_client(config::network::translate_timeout()).ok()?;

        let body = serde_json::json!({
            "q": text,
            "source": source,
            "target": target,
            "format": "text",
        });

        for base in &self.bases {
            let url = format!("{}/translate", base);
            match client.post(&url).json(&body).send().await {
                Ok(response) if response.status().is_success() => {
                    match response.json::<serde_json::Value>().await {
                        Ok(value) => {
                            if let Some(out) = extract_translated_text(&value) {
                                return Some(out);
                            }
                            log::debug!("LibreTranslate @ {}: unrecognized response shape", base);
                        }
                        Err(e) => log::debug!("LibreTranslate @ {}: bad JSON: {}", base, e),
                    }
                }
                Ok(response) => {
                    log::debug!("LibreTranslate @ {}: status {}", base, response.status());
                }
                Err(e) => log::debug!("LibreTranslate @ {}: {}", base, e),
            }
        }
        None
    }

    fn name(&self) -> &'static str {
        "LibreTranslate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_camel_case_field() {
        let value = json!({"translatedText": "cześć"});
        assert_eq!(extract_translated_text(&value).as_deref(), Some("cześć"));
    }

    #[test]
    fn extracts_snake_case_field() {
        let value = json!({"translated_text": " hola "});
        assert_eq!(extract_translated_text(&value).as_deref(), Some("hola"));
    }

    #[test]
    fn extracts_array_shape() {
        let value = json!([{"translatedText": "hej"}]);
        assert_eq!(extract_translated_text(&value).as_deref(), Some("hej"));
    }

    #[test]
    fn rejects_empty_and_unknown_shapes() {
        assert_eq!(extract_translated_text(&json!({"translatedText": "  "})), None);
        assert_eq!(extract_translated_text(&json!({"detail": "error"})), None);
        assert_eq!(extract_translated_text(&json!([])), None);
    }
}
