//! Renderers turning a [`ResponseBundle`] into display text.
//!
//! - `render_sectioned`: headed Markdown blocks, fully deterministic
//! - `render_conversational`: one flowing passage with pooled phrasings

use regex::Regex;
use std::sync::LazyLock;

use super::bundle::ResponseBundle;
use super::library::{ContentLibrary, StepConnectives};
use super::phrasing::{pick, Selector};

/// Characters that end the first clause of the analysis
const FULL_STOPS: [char; 4] = ['。', '.', '！', '!'];

// NOTE: expect() is acceptable here: the pattern is a compile-time constant
static ORDINAL_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:\d+\s*[.、:：)）]|[(（]\d+[)）]|第[一二三四五六七八九十\d]+步\s*[:：，,、]?|[一二三四五六七八九十]+\s*[、.．])\s*",
    )
    .expect("Invalid regex: step ordinal marker")
});

/// Render headed blocks in fixed order: label, analysis, steps, encouragement, reminder
pub fn render_sectioned(bundle: &ResponseBundle) -> String {
    let steps = bundle
        .steps
        .iter()
        .enumerate()
        .map(|(idx, step)| format!("{}. {}", idx + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    [
        format!("### 情绪识别\n你当前可能的情绪类型：{}", bundle.emotion_label),
        format!("### 心理分析\n{}", bundle.analysis),
        format!("### 分步骤建议\n{}", steps),
        format!("### 温暖鼓励\n{}", bundle.encouragement),
        format!("### 专业提醒\n{}", bundle.professional_reminder),
    ]
    .join("\n\n")
}

/// Render one flowing passage: opening, analysis, steps, encouragement, reminder.
///
/// Surface phrasing varies with `selector`; label substance and the reminder
/// do not.
pub fn render_conversational(
    bundle: &ResponseBundle,
    library: &ContentLibrary,
    selector: &mut dyn Selector,
) -> String {
    let definition = library.category(bundle.emotion);
    let mut sections: Vec<String> = Vec::with_capacity(5);

    if let Some(opening) = pick(definition.openings, selector) {
        sections.push(opening.to_string());
    }

    let clause = first_clause(&bundle.analysis);
    if !clause.is_empty() {
        match pick(library.analysis_connectives, selector) {
            Some(template) => sections.push(template.replace("{clause}", clause)),
            None => sections.push(format!("{}。", clause)),
        }
    }

    if let Some(narrative) = narrate_steps(&bundle.steps, &library.step_connectives) {
        sections.push(narrative);
    }

    let encouragement = pick(definition.encouragements, selector)
        .copied()
        .unwrap_or(bundle.encouragement.as_str());
    sections.push(encouragement.to_string());

    sections.push(bundle.professional_reminder.clone());

    sections.join("\n\n")
}

/// Text up to (not including) the first full stop
pub fn first_clause(text: &str) -> &str {
    let end = text.find(FULL_STOPS).unwrap_or(text.len());
    text[..end].trim()
}

/// Step text without its leading ordinal marker or trailing full stop
pub fn strip_step(step: &str) -> &str {
    let start = ORDINAL_MARKER.find(step).map(|m| m.end()).unwrap_or(0);
    step[start..].trim().trim_end_matches(FULL_STOPS).trim_end()
}

/// Restate steps as one connected sentence; `None` when there are no steps
fn narrate_steps(steps: &[String], connectives: &StepConnectives) -> Option<String> {
    let cleaned: Vec<&str> = steps
        .iter()
        .map(|s| strip_step(s))
        .filter(|s| !s.is_empty())
        .collect();

    let count = cleaned.len();
    if count == 0 {
        return None;
    }

    let parts: Vec<String> = cleaned
        .iter()
        .enumerate()
        .map(|(i, step)| {
            if count == 1 {
                return step.to_string();
            }
            let word = if i == 0 {
                connectives.first
            } else if i == count - 1 {
                connectives.last
            } else {
                connectives
                    .middle
                    .get((i - 1) % connectives.middle.len().max(1))
                    .copied()
                    .unwrap_or(connectives.first)
            };
            format!("{}，{}", word, step)
        })
        .collect();

    Some(format!("{}{}。", connectives.lead_in, parts.join("；")))
}
