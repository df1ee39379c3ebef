//! Translation provider chain
//!
//! Providers share one contract: given text and a language pair, return an
//! optional translated string. Network errors, bad responses, and empty
//! output are all "no result from this provider", never an error the
//! caller has to handle. The chain folds over an ordered provider list and
//! stops at the first usable result.

mod libre;
mod mymemory;

pub use libre::LibreProvider;
pub use mymemory::MyMemoryProvider;

use async_trait::async_trait;

/// A single translation backend.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translates `text` from `source` to `target`.
    ///
    /// Failures of any kind surface as `None`; the chain falls through to
    /// the next provider.
    async fn translate(&self, text: &str, source: &str, target: &str) -> Option<String>;

    /// Provider name for log lines.
    fn name(&self) -> &'static str;
}

/// Ordered list of providers tried until one produces a usable result.
pub struct ProviderChain {
    providers: Vec<Box<dyn TranslationProvider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Box<dyn TranslationProvider>>) -> Self {
        Self { providers }
    }

    /// The production chain: MyMemory first, LibreTranslate mirrors second.
    pub fn default_chain() -> Self {
        Self::new(vec![
            Box::new(MyMemoryProvider::new()),
            Box::new(LibreProvider::new()),
        ])
    }

    /// Returns the first usable translation, or `None` when every provider
    /// fails.
    ///
    /// A result is usable when it is non-empty after trimming and differs
    /// from the input text: a provider echoing its input back did not
    /// actually translate. Identical source and target codes short-circuit
    /// to `None` before any provider is called.
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> Option<String> {
        if source.eq_ignore_ascii_case(target) {
            return None;
        }

        for provider in &self.providers {
            match provider.translate(text, source, target).await {
                Some(out) => {
                    let out = out.trim();
                    if out.is_empty() {
                        log::debug!("{}: empty result, trying next provider", provider.name());
                    } else if out == text {
                        log::debug!("{}: result identical to input, trying next provider", provider.name());
                    } else {
                        log::info!("translated {}→{} via {}", source, target, provider.name());
                        return Some(out.to_string());
                    }
                }
                None => log::debug!("{}: no result", provider.name()),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubProvider {
        result: Option<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    impl StubProvider {
        fn new(result: Option<&'static str>) -> (Box<dyn TranslationProvider>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Box::new(Self {
                    result,
                    calls: Arc::clone(&calls),
                }),
                calls,
            )
        }
    }

    #[async_trait]
    impl TranslationProvider for StubProvider {
        async fn translate(&self, _text: &str, _source: &str, _target: &str) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.map(str::to_string)
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    #[tokio::test]
    async fn identical_codes_skip_all_providers() {
        let (provider, calls) = StubProvider::new(Some("out"));
        let chain = ProviderChain::new(vec![provider]);

        assert_eq!(chain.translate("text", "uk", "UK").await, None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn first_usable_result_stops_the_chain() {
        let (first, _) = StubProvider::new(Some("cześć"));
        let (second, second_calls) = StubProvider::new(Some("unused"));
        let chain = ProviderChain::new(vec![first, second]);

        assert_eq!(chain.translate("привіт", "uk", "pl").await.as_deref(), Some("cześć"));
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_and_echoed_results_fall_through() {
        let (empty, _) = StubProvider::new(Some("   "));
        let (echo, _) = StubProvider::new(Some("привіт"));
        let (good, _) = StubProvider::new(Some("cześć"));
        let chain = ProviderChain::new(vec![empty, echo, good]);

        assert_eq!(chain.translate("привіт", "uk", "pl").await.as_deref(), Some("cześć"));
    }

    #[tokio::test]
    async fn all_failures_yield_none() {
        let (first, _) = StubProvider::new(None);
        let (second, _) = StubProvider::new(None);
        let chain = ProviderChain::new(vec![first, second]);

        assert_eq!(chain.translate("привіт", "uk", "pl").await, None);
    }
}
