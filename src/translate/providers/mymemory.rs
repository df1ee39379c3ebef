//! MyMemory translation provider
//!
//! Free API, no key required. Takes the language pair as a single
//! `langpair=SRC|TGT` parameter; only the regioned Chinese codes need a
//! special spelling (see `lang::pair_code`).

use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config;
use crate::translate::http_client;
use crate::translate::lang;

use super::TranslationProvider;

pub struct MyMemoryProvider {
    base_url: String,
}

impl MyMemoryProvider {
    pub fn new() -> Self {
        Self::with_base_url(config::MYMEMORY_URL.clone())
    }

    /// Uses a custom API base (tests point this at a mock server).
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }
}

impl Default for MyMemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Option<String> {
        let client = http_client(config::network::translate_timeout()).ok()?;

        let pair = format!("{}|{}", lang::pair_code(source), lang::pair_code(target));
        let url = format!("{}/get", self.base_url);

        let response = client
            .get(&url)
            .query(&[("q", text), ("langpair", pair.as_str())])
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            log::debug!("MyMemory returned status {}", response.status());
            return None;
        }

        let data: MyMemoryResponse = response.json().await.ok()?;
        let out = data.response_data?.translated_text?;
        let out = out.trim();
        if out.is_empty() {
            None
        } else {
            Some(out.to_string())
        }
    }

    fn name(&self) -> &'static str {
        "MyMemory"
    }
}
