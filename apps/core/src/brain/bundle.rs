//! Response Bundle - output structure of the composer.
//!
//! Everything one request produces, before rendering.

use serde::{Deserialize, Serialize};

use super::emotion::Emotion;

/// How a bundle is turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Headed Markdown blocks (form-style display)
    Sectioned,
    /// One flowing passage (chat-style display)
    #[default]
    Conversational,
}

/// Complete response for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBundle {
    /// Detected category
    pub emotion: Emotion,

    /// User-facing label of the category
    pub emotion_label: String,

    /// Psychological explanation paragraph
    pub analysis: String,

    /// Action items, display order = execution order
    pub steps: Vec<String>,

    /// Encouragement message
    pub encouragement: String,

    /// Crisis or standard reminder
    pub professional_reminder: String,

    /// Whether crisis language was detected
    pub crisis: bool,
}

impl ResponseBundle {
    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Emotion: {:?}, Steps: {}, Crisis: {}",
            self.emotion,
            self.steps.len(),
            if self.crisis { "yes" } else { "no" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let bundle = ResponseBundle {
            emotion: Emotion::Stress,
            emotion_label: Emotion::Stress.label().to_string(),
            analysis: "analysis".to_string(),
            steps: vec!["one".to_string(), "two".to_string()],
            encouragement: "encouragement".to_string(),
            professional_reminder: "reminder".to_string(),
            crisis: false,
        };
        let summary = bundle.summary();

        assert!(summary.contains("Stress"));
        assert!(summary.contains("Steps: 2"));
        assert!(summary.contains("Crisis: no"));
    }

    #[test]
    fn test_render_mode_serde() {
        let json = serde_json::to_string(&RenderMode::Sectioned).unwrap();
        assert_eq!(json, "\"sectioned\"");
        assert_eq!(RenderMode::default(), RenderMode::Conversational);
    }
}
