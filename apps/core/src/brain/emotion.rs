//! Emotion Classification using keyword presence.
//!
//! Fast keyword scoring over the four emotional categories.
//! No ML model required - plain substring matching against the content library.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::library::ContentLibrary;

/// Detected emotional category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    /// Anxiety, tension, fear
    Anxiety,
    /// Depression, low mood, loneliness
    Depression,
    /// Stress, exhaustion
    Stress,
    /// Mixed feelings or confusion (also the default)
    Confusion,
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Emotion {
    /// Tie-break order: on equal scores the earlier category wins.
    pub const PRIORITY: [Emotion; 4] = [
        Emotion::Anxiety,
        Emotion::Depression,
        Emotion::Stress,
        Emotion::Confusion,
    ];

    /// Returns the user-facing label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Anxiety => "焦虑、紧张、恐惧",
            Emotion::Depression => "抑郁、低落、孤独",
            Emotion::Stress => "压力大、疲惫",
            Emotion::Confusion => "情绪混合或困惑",
        }
    }

    /// Position of the category in [`Emotion::PRIORITY`]
    pub fn index(&self) -> usize {
        match self {
            Emotion::Anxiety => 0,
            Emotion::Depression => 1,
            Emotion::Stress => 2,
            Emotion::Confusion => 3,
        }
    }
}

/// Result of emotion classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Detected category
    pub emotion: Emotion,
    /// Keyword hits per category, in [`Emotion::PRIORITY`] order
    pub scores: [u32; 4],
    /// Keywords that matched, in scan order
    pub matched_keywords: Vec<String>,
}

impl ClassificationResult {
    fn fallback() -> Self {
        Self {
            emotion: Emotion::Confusion,
            scores: [0; 4],
            matched_keywords: vec![],
        }
    }

    /// Hit count for one category
    pub fn score(&self, emotion: Emotion) -> u32 {
        self.scores[emotion.index()]
    }
}

/// Emotion classifier scoring text against the library's keyword sets
#[derive(Clone)]
pub struct EmotionClassifier {
    library: Arc<ContentLibrary>,
}

impl Default for EmotionClassifier {
    fn default() -> Self {
        Self::new(ContentLibrary::shared())
    }
}

impl EmotionClassifier {
    /// Create a classifier over the given content library
    pub fn new(library: Arc<ContentLibrary>) -> Self {
        Self { library }
    }

    /// Classify the dominant emotion of a text
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let text = text.trim();

        if text.is_empty() {
            return ClassificationResult::fallback();
        }

        let lowered = text.to_lowercase();
        let mut scores = [0u32; 4];
        let mut matched_keywords = Vec::new();

        for emotion in Emotion::PRIORITY {
            for keyword in self.library.category(emotion).keywords {
                // Presence, not frequency: each keyword counts once.
                if lowered.contains(keyword) {
                    scores[emotion.index()] += 1;
                    matched_keywords.push(keyword.to_string());
                }
            }
        }

        let mut best = Emotion::Confusion;
        let mut best_score = 0;
        for emotion in Emotion::PRIORITY {
            let score = scores[emotion.index()];
            if score > best_score {
                best_score = score;
                best = emotion;
            }
        }

        debug!(emotion = ?best, ?scores, "Emotion classified");

        ClassificationResult {
            emotion: best,
            scores,
            matched_keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anxiety_detection() {
        let classifier = EmotionClassifier::default();

        let result = classifier.classify("最近总是焦虑，晚上睡不着");
        assert_eq!(result.emotion, Emotion::Anxiety);
        assert_eq!(result.score(Emotion::Anxiety), 1);

        let result = classifier.classify("面试前特别紧张，心慌得厉害");
        assert_eq!(result.emotion, Emotion::Anxiety);
    }

    #[test]
    fn test_stress_detection() {
        let classifier = EmotionClassifier::default();

        let result = classifier.classify("工作压力太大，每天都很疲惫");
        assert_eq!(result.emotion, Emotion::Stress);
        assert_eq!(result.score(Emotion::Stress), 2);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let classifier = EmotionClassifier::default();

        let result = classifier.classify("孤独，孤独，还是孤独");
        assert_eq!(result.emotion, Emotion::Depression);
        assert_eq!(result.score(Emotion::Depression), 1);
    }

    #[test]
    fn test_empty_defaults_to_confusion() {
        let classifier = EmotionClassifier::default();

        let result = classifier.classify("");
        assert_eq!(result.emotion, Emotion::Confusion);
        assert_eq!(result.scores, [0; 4]);

        let result = classifier.classify("   \n\t ");
        assert_eq!(result.emotion, Emotion::Confusion);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Emotion::Anxiety.label(), "焦虑、紧张、恐惧");
        assert_eq!(Emotion::Confusion.to_string(), "情绪混合或困惑");
        for (i, emotion) in Emotion::PRIORITY.iter().enumerate() {
            assert_eq!(emotion.index(), i);
        }
    }
}
