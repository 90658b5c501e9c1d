//! Provider interface and ordered fallback.

use tracing::{debug, warn};

use crate::error::PassageError;
use crate::request::{PassageOutcome, PassageRequest};
use crate::translation::DEFAULT_TRANSLATION;

/// A source of passage text.
///
/// Implementations report every failure as [`PassageOutcome::Failure`]
/// rather than panicking, so a [`FallbackChain`] can move on.
pub trait PassageProvider: Send + Sync {
    /// Short name used in logs and error reports.
    fn name(&self) -> &str;

    /// Looks up the text of one request.
    fn fetch(&self, request: &PassageRequest) -> PassageOutcome;
}

/// A passage returned by a [`FallbackChain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPassage {
    /// Displayable text.
    pub text: String,
    /// Reference as reported by the provider.
    pub reference: String,
    /// Name of the provider that served it.
    pub provider: String,
    /// Translation it was served in.
    pub translation: String,
}

/// Providers tried in order until one succeeds.
///
/// When every provider fails for a non-default translation, the whole
/// chain is retried once in the fallback translation (KJV unless
/// changed with [`FallbackChain::with_fallback_translation`]).
pub struct FallbackChain {
    providers: Vec<Box<dyn PassageProvider>>,
    fallback_translation: Option<String>,
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackChain {
    /// Creates an empty chain that falls back to the default translation.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            fallback_translation: Some(DEFAULT_TRANSLATION.to_string()),
        }
    }

    /// Appends a provider to the end of the chain.
    pub fn with_provider(mut self, provider: impl PassageProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Sets the translation retried after a full failure, or disables the
    /// retry with `None`.
    pub fn with_fallback_translation(mut self, translation: Option<String>) -> Self {
        self.fallback_translation = translation;
        self
    }

    /// Returns the provider names in order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Returns the first successful passage for `request`.
    #[tracing::instrument(skip_all, fields(reference = %request.reference(), translation = request.translation()))]
    pub fn fetch(&self, request: &PassageRequest) -> Result<FetchedPassage, PassageError> {
        if self.providers.is_empty() {
            return Err(PassageError::NoProviders);
        }

        let mut failures = Vec::new();
        if let Some(found) = self.try_all(request, &mut failures) {
            return Ok(found);
        }

        if let Some(fallback) = &self.fallback_translation {
            if !request.translation().eq_ignore_ascii_case(fallback) {
                warn!(%fallback, "all providers failed, retrying in fallback translation");
                let retry = request.in_translation(fallback.clone());
                if let Some(found) = self.try_all(&retry, &mut failures) {
                    return Ok(found);
                }
            }
        }

        Err(PassageError::AllProvidersFailed {
            reference: request.reference(),
            failures,
        })
    }

    fn try_all(
        &self,
        request: &PassageRequest,
        failures: &mut Vec<(String, String)>,
    ) -> Option<FetchedPassage> {
        for provider in &self.providers {
            match provider.fetch(request) {
                PassageOutcome::Success { text, reference } => {
                    debug!(provider = provider.name(), "passage found");
                    return Some(FetchedPassage {
                        text,
                        reference,
                        provider: provider.name().to_string(),
                        translation: request.translation().to_string(),
                    });
                }
                PassageOutcome::Failure { reason } => {
                    debug!(provider = provider.name(), %reason, "provider failed");
                    failures.push((provider.name().to_string(), reason));
                }
            }
        }
        None
    }
}

impl std::fmt::Debug for FallbackChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackChain")
            .field("providers", &self.provider_names())
            .field("fallback_translation", &self.fallback_translation)
            .finish()
    }
}
