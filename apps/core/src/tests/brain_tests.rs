//! Brain Module Tests
//!
//! End-to-end checks over the classifier, crisis detector, composer and
//! both renderers, using the built-in content library.

use crate::brain::{
    render_conversational, render_sectioned, ContentLibrary, CrisisDetector, Emotion,
    EmotionClassifier, FixedSelector, RandomSelector, ResponseComposer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn composer() -> ResponseComposer {
    ResponseComposer::new(ContentLibrary::shared())
}

#[cfg(test)]
mod classification_tests {
    use super::*;

    #[test]
    fn test_anxiety_sleep_complaint() {
        let result = EmotionClassifier::default().classify("最近总是焦虑，晚上睡不着");
        assert_eq!(result.emotion, Emotion::Anxiety);
        assert_eq!(result.score(Emotion::Anxiety), 1);
        assert_eq!(result.matched_keywords, vec!["焦虑".to_string()]);
    }

    #[test]
    fn test_ties_follow_priority_order() {
        let classifier = EmotionClassifier::default();

        let cases = vec![
            ("我很焦虑，也很低落", Emotion::Anxiety),
            ("心情低落，工作压力也大", Emotion::Depression),
            ("压力太大了，我很迷茫", Emotion::Stress),
        ];

        for (text, expected) in cases {
            let result = classifier.classify(text);
            assert_eq!(result.emotion, expected, "Unexpected label for '{}'", text);
        }
    }

    #[test]
    fn test_higher_score_beats_priority() {
        // One anxiety hit against two depression hits.
        let result = EmotionClassifier::default().classify("有点担心，但更多是孤独和空虚");
        assert_eq!(result.emotion, Emotion::Depression);
        assert_eq!(result.score(Emotion::Depression), 2);
    }

    #[test]
    fn test_no_keywords_defaults_to_confusion() {
        let classifier = EmotionClassifier::default();
        for text in ["", "   ", "今天天气不错", "hello there"] {
            let result = classifier.classify(text);
            assert_eq!(result.emotion, Emotion::Confusion, "for '{}'", text);
            assert_eq!(result.scores, [0; 4]);
        }
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let result = EmotionClassifier::default().classify("焦虑焦虑焦虑，低落，孤独");
        assert_eq!(result.score(Emotion::Anxiety), 1);
        assert_eq!(result.emotion, Emotion::Depression);
    }
}

#[cfg(test)]
mod crisis_tests {
    use super::*;

    #[test]
    fn test_crisis_phrase_escalates_reminder() {
        let library = ContentLibrary::shared();
        let bundle = composer().compose("我想死", &mut FixedSelector(0));

        assert!(bundle.crisis);
        assert_eq!(bundle.professional_reminder, library.crisis_reminder);
        // Classification is unaffected by the crisis flag.
        assert_eq!(bundle.emotion, Emotion::Confusion);
    }

    #[test]
    fn test_crisis_overrides_any_label() {
        let library = ContentLibrary::shared();
        let bundle = composer().compose("压力太大，我真的不想活了", &mut FixedSelector(0));

        assert_eq!(bundle.emotion, Emotion::Stress);
        assert!(bundle.crisis);
        assert_eq!(bundle.professional_reminder, library.crisis_reminder);
    }

    #[test]
    fn test_crisis_detection_ignores_case() {
        let detector = CrisisDetector::new();
        assert!(detector.detect("Sometimes I Want To DIE"));
        assert!(!detector.detect("I want to dine out"));
    }

    #[test]
    fn test_no_crisis_uses_standard_reminder() {
        let library = ContentLibrary::shared();
        let bundle = composer().compose("最近总是焦虑，晚上睡不着", &mut FixedSelector(0));
        assert!(!bundle.crisis);
        assert_eq!(bundle.professional_reminder, library.standard_reminder);
    }
}

#[cfg(test)]
mod composer_tests {
    use super::*;

    #[test]
    fn test_anxiety_bundle_contents() {
        let bundle = composer().compose("最近总是焦虑，晚上睡不着", &mut FixedSelector(0));

        assert_eq!(bundle.emotion_label, "焦虑、紧张、恐惧");
        assert_eq!(bundle.steps.len(), 5);
        assert!(bundle.steps[0].starts_with("呼吸练习"));
        assert!(!bundle.analysis.is_empty());
        assert!(!bundle.encouragement.is_empty());
    }

    #[test]
    fn test_empty_input_bundle() {
        let library = ContentLibrary::shared();
        let bundle = composer().compose("", &mut FixedSelector(0));

        assert_eq!(bundle.emotion, Emotion::Confusion);
        assert_eq!(bundle.steps.len(), 4);
        assert_eq!(bundle.professional_reminder, library.standard_reminder);
    }

    #[test]
    fn test_compose_is_idempotent() {
        let composer = composer();
        let text = "工作压力很大，每天都很疲惫";

        let first = composer.compose(text, &mut FixedSelector(1));
        let second = composer.compose(text, &mut FixedSelector(1));
        assert_eq!(first, second);
    }

    #[test]
    fn test_only_encouragement_varies() {
        let composer = composer();
        let text = "我感到很孤独";
        let baseline = composer.compose(text, &mut FixedSelector(0));
        let pool = ContentLibrary::shared()
            .category(Emotion::Depression)
            .encouragements;

        let mut selector = RandomSelector::with_rng(StdRng::seed_from_u64(7));
        for _ in 0..20 {
            let bundle = composer.compose(text, &mut selector);
            assert_eq!(bundle.emotion, baseline.emotion);
            assert_eq!(bundle.analysis, baseline.analysis);
            assert_eq!(bundle.steps, baseline.steps);
            assert_eq!(bundle.professional_reminder, baseline.professional_reminder);
            assert!(pool.contains(&bundle.encouragement.as_str()));
        }
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn test_sectioned_headings_in_order() {
        let bundle = composer().compose("最近总是焦虑，晚上睡不着", &mut FixedSelector(0));
        let text = render_sectioned(&bundle);

        let headings = ["### 情绪识别", "### 心理分析", "### 分步骤建议", "### 温暖鼓励", "### 专业提醒"];
        let positions: Vec<usize> = headings
            .iter()
            .map(|h| text.find(h).unwrap_or_else(|| panic!("missing heading {}", h)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(text.contains("1. 呼吸练习"));
        assert!(text.contains("5. 正念练习"));
        assert!(text.ends_with(bundle.professional_reminder.as_str()));
    }

    #[test]
    fn test_sectioned_is_deterministic_for_a_bundle() {
        let bundle = composer().compose("迷茫", &mut FixedSelector(0));
        assert_eq!(render_sectioned(&bundle), render_sectioned(&bundle));
    }

    #[test]
    fn test_conversational_structure() {
        let library = ContentLibrary::shared();
        let bundle = composer().compose("最近总是焦虑，晚上睡不着", &mut FixedSelector(0));
        let text = render_conversational(&bundle, &library, &mut FixedSelector(0));

        let sections: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[0], library.category(Emotion::Anxiety).openings[0]);
        assert!(sections[2].starts_with(library.step_connectives.lead_in));
        assert!(sections[2].contains("首先，呼吸练习"));
        assert!(sections[2].contains("最后，正念练习"));
        assert_eq!(sections[4], library.standard_reminder);
        assert!(!text.contains("###"));
    }

    #[test]
    fn test_conversational_keeps_crisis_reminder() {
        let library = ContentLibrary::shared();
        let bundle = composer().compose("活不下去了，很绝望", &mut FixedSelector(0));
        let mut selector = RandomSelector::with_rng(StdRng::seed_from_u64(42));

        for _ in 0..10 {
            let text = render_conversational(&bundle, &library, &mut selector);
            assert!(text.ends_with(library.crisis_reminder));
        }
    }
}
