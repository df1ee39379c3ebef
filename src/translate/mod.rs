//! The translation pipeline
//!
//! One incoming message flows through a fixed sequence of stages:
//! mixed-script normalization, LanguageTool autocorrection, language
//! detection, target selection (consulting per-user preferences), and the
//! translation provider chain. Every stage degrades gracefully: a failed
//! external call yields the stage's safe default (original text, `en`, or
//! "no translation"), and the pipeline as a whole answers with `None`
//! whenever there is nothing worth replying with.

pub mod autocorrect;
pub mod detect;
pub mod lang;
pub mod normalize;
pub mod providers;
pub mod target;

use std::sync::Arc;
use std::time::Duration;

use crate::core::error::AppResult;
use crate::storage::prefs::PrefStore;

use autocorrect::Autocorrector;
use detect::LanguageDetector;
use providers::ProviderChain;

/// A finished translation together with the language pair that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub source: String,
    pub target: String,
}

/// Builds an HTTP client with a per-stage timeout.
pub(crate) fn http_client(timeout: Duration) -> AppResult<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// The per-message translation pipeline.
///
/// Holds no cross-message state of its own; the only shared state is the
/// injected preference store. Messages may be processed concurrently with
/// no ordering guarantee between them.
pub struct Pipeline {
    autocorrector: Autocorrector,
    detector: LanguageDetector,
    chain: ProviderChain,
    prefs: Arc<PrefStore>,
}

impl Pipeline {
    /// Creates a pipeline against the configured external services.
    pub fn new(prefs: Arc<PrefStore>) -> Self {
        Self {
            autocorrector: Autocorrector::new(),
            detector: LanguageDetector::new(),
            chain: ProviderChain::default_chain(),
            prefs,
        }
    }

    /// Assembles a pipeline from explicit stages.
    ///
    /// Integration tests use this to point every stage at a mock server.
    pub fn with_parts(
        autocorrector: Autocorrector,
        detector: LanguageDetector,
        chain: ProviderChain,
        prefs: Arc<PrefStore>,
    ) -> Self {
        Self {
            autocorrector,
            detector,
            chain,
            prefs,
        }
    }

    /// Runs one message through the pipeline.
    ///
    /// Returns `None` when no reply should be sent: the selected target
    /// equals the detected source, or no provider produced a usable
    /// translation. Both outcomes are indistinguishable to the caller;
    /// silence is the contract for "nothing to translate".
    pub async fn process(&self, user_id: u64, raw_text: &str) -> Option<Translation> {
        let normalized = normalize::normalize_mixed(raw_text);
        let corrected = self.autocorrector.correct(&normalized).await;
        let source = self.detector.detect(&corrected).await;

        let pref = self.prefs.get(user_id);
        let target = target::select_target(&source, pref.as_deref());

        if source.eq_ignore_ascii_case(&target) {
            log::debug!("source {} equals target {}, nothing to translate", source, target);
            return None;
        }

        let text = self.chain.translate(&corrected, &source, &target).await?;

        Some(Translation { text, source, target })
    }
}
