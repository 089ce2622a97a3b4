//! Response Composer - main orchestrator of the brain module.
//!
//! Runs the classifier and the crisis detector over the raw text, looks up
//! the matching library entries and assembles a [`ResponseBundle`].

use std::sync::Arc;
use tracing::{debug, warn};

use super::bundle::ResponseBundle;
use super::crisis::CrisisDetector;
use super::emotion::{ClassificationResult, EmotionClassifier};
use super::library::ContentLibrary;
use super::phrasing::{pick, Selector};

/// Main composer that turns raw text into a response bundle
#[derive(Clone)]
pub struct ResponseComposer {
    library: Arc<ContentLibrary>,
    classifier: EmotionClassifier,
    crisis: CrisisDetector,
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::new(ContentLibrary::shared())
    }
}

impl ResponseComposer {
    /// Create a composer over the given content library
    pub fn new(library: Arc<ContentLibrary>) -> Self {
        Self {
            classifier: EmotionClassifier::new(Arc::clone(&library)),
            crisis: CrisisDetector::new(),
            library,
        }
    }

    /// The library this composer reads from
    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    /// Classification only, without assembling text
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.classifier.classify(text)
    }

    /// Compose the full response for one input.
    ///
    /// Deterministic except for the encouragement variant, which comes from
    /// `selector`.
    pub fn compose(&self, text: &str, selector: &mut dyn Selector) -> ResponseBundle {
        // 1. Classify
        let classification = self.classifier.classify(text);
        let emotion = classification.emotion;

        // 2. Look up content for the label
        let definition = self.library.category(emotion);
        let encouragement = pick(definition.encouragements, selector)
            .copied()
            .unwrap_or_default();

        // 3. Reminder follows the crisis flag, never the label
        let crisis = self.crisis.detect(text);
        if crisis {
            warn!(
                emotion = ?emotion,
                phrases = ?self.crisis.matched_phrases(text),
                "Crisis language detected, escalating reminder"
            );
        }

        // 4. Assemble
        let bundle = ResponseBundle {
            emotion,
            emotion_label: emotion.label().to_string(),
            analysis: definition.analysis.clone(),
            steps: definition.steps.iter().map(|s| s.to_string()).collect(),
            encouragement: encouragement.to_string(),
            professional_reminder: self.library.reminder(crisis).to_string(),
            crisis,
        };

        debug!("{}", bundle.summary());
        bundle
    }
}
