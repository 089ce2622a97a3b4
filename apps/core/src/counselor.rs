use crate::brain::{
    render_conversational, render_sectioned, ClassificationResult, ContentLibrary, RandomSelector,
    RenderMode, ResponseBundle, ResponseComposer, Selector,
};
use crate::config::RemoteSettings;
use crate::error::AppError;
use crate::models::{GenerationRequest, ModelConfig};
use crate::remote::{LlmActor, OpenAiClient};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The core entry point of Heartwell.
///
/// Wraps the local [`ResponseComposer`] and, optionally, a remote [`LlmActor`].
/// Holds no mutable state, so one instance can serve any number of sessions.
pub struct Counselor<L: LlmActor = OpenAiClient> {
    composer: ResponseComposer,
    config: ModelConfig,
    llm: Option<Arc<L>>,
}

impl Counselor<OpenAiClient> {
    /// A counselor that never leaves the machine.
    pub fn local_only() -> Self {
        Self::new(ContentLibrary::shared(), ModelConfig::default(), None)
    }

    /// Production constructor: attaches an [`OpenAiClient`] iff an API key was resolved.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the resolved model configuration is invalid.
    pub fn from_settings(settings: &RemoteSettings) -> Result<Self, AppError> {
        let config = settings.model_config().validated()?;
        let llm = OpenAiClient::from_settings(settings).map(Arc::new);
        if llm.is_some() {
            info!(model = %config.model_id, "Remote generation enabled");
        } else {
            info!("No API key found, remote generation disabled");
        }
        Ok(Self::new(ContentLibrary::shared(), config, llm))
    }
}

impl<L: LlmActor> Counselor<L> {
    pub fn new(library: Arc<ContentLibrary>, config: ModelConfig, llm: Option<Arc<L>>) -> Self {
        Self {
            composer: ResponseComposer::new(library),
            config,
            llm,
        }
    }

    /// Whether a remote backend is attached.
    pub fn has_remote(&self) -> bool {
        self.llm.is_some()
    }

    /// Per-category keyword scores for one input.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.composer.classify(text)
    }

    /// Structured local result for one input.
    pub fn analyze(&self, text: &str) -> ResponseBundle {
        self.composer.compose(text, &mut RandomSelector::new())
    }

    /// Local rendering in either mode.
    pub fn render_local(&self, text: &str, mode: RenderMode) -> String {
        self.render_local_with(text, mode, &mut RandomSelector::new())
    }

    /// Local rendering with an explicit phrase selector.
    pub fn render_local_with(
        &self,
        text: &str,
        mode: RenderMode,
        selector: &mut dyn Selector,
    ) -> String {
        let bundle = self.composer.compose(text, selector);
        match mode {
            RenderMode::Sectioned => render_sectioned(&bundle),
            RenderMode::Conversational => {
                render_conversational(&bundle, self.composer.library(), selector)
            }
        }
    }

    /// Chat-style reply: one remote attempt, then the local composer.
    ///
    /// 1. If a remote backend is attached, send exactly one request.
    /// 2. A non-blank reply is returned as-is. Anything else (error, blank
    ///    text, no backend) yields the local conversational rendering.
    ///
    /// Never fails and never retries.
    #[instrument(skip(self, text))]
    pub async fn chat_reply(&self, text: &str) -> String {
        match &self.llm {
            Some(llm) => {
                let request = GenerationRequest::from_config(&self.config, text);
                match llm.generate(&request).await {
                    Ok(reply) if !reply.trim().is_empty() => return reply,
                    Ok(_) => warn!("Remote generation returned blank text, using local composer"),
                    Err(e) => warn!(error = %e, "Remote generation failed, using local composer"),
                }
            }
            None => debug!("Remote generation disabled, using local composer"),
        }

        self.render_local(text, RenderMode::Conversational)
    }

    /// Single entry point: text plus rendering mode in, rendered text out.
    ///
    /// Sectioned output is always local; conversational output goes through
    /// [`Counselor::chat_reply`].
    #[instrument(skip(self, text))]
    pub async fn respond(&self, text: &str, mode: RenderMode) -> String {
        match mode {
            RenderMode::Sectioned => self.render_local(text, RenderMode::Sectioned),
            RenderMode::Conversational => self.chat_reply(text).await,
        }
    }
}
