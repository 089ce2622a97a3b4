//! Crisis phrase detection.
//!
//! Exact phrase list, substring match, no stemming. A phrase missing from the
//! list is a content gap, not a runtime fault.

/// Self-harm and suicide-risk phrases, already lower-cased
const CRISIS_PHRASES: &[&str] = &[
    // Chinese
    "自杀",
    "轻生",
    "活不下去",
    "结束生命",
    "伤害自己",
    "割腕",
    "跳楼",
    "想死",
    "杀了我",
    "不想活",
    "毁灭自己",
    // English
    "suicide",
    "kill myself",
    "end my life",
    "hurt myself",
    "can't go on",
    "want to die",
];

/// Stateless detector for high-risk language
#[derive(Debug, Clone, Copy, Default)]
pub struct CrisisDetector;

impl CrisisDetector {
    pub fn new() -> Self {
        Self
    }

    /// True iff the text contains any crisis phrase (case-insensitive)
    pub fn detect(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let lowered = text.to_lowercase();
        CRISIS_PHRASES.iter().any(|phrase| lowered.contains(phrase))
    }

    /// Every crisis phrase found in the text
    pub fn matched_phrases(&self, text: &str) -> Vec<&'static str> {
        let lowered = text.to_lowercase();
        CRISIS_PHRASES
            .iter()
            .copied()
            .filter(|phrase| lowered.contains(phrase))
            .collect()
    }
}
