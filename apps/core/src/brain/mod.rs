//! # Brain Module
//!
//! Rule-based emotion triage for Heartwell. Everything here runs locally,
//! synchronously, and without any model.
//!
//! ## Components
//! - `crisis`: fixed-phrase detection of self-harm risk
//! - `emotion`: keyword scoring over the four emotional categories
//! - `library`: static per-category content (analysis, steps, pools, reminders)
//! - `phrasing`: pluggable selection over interchangeable phrasings
//! - `bundle`: output data structure
//! - `composer`: main orchestrator producing a bundle
//! - `render`: sectioned and conversational renderers

pub mod bundle;
pub mod composer;
pub mod crisis;
pub mod emotion;
pub mod library;
pub mod phrasing;
pub mod render;

// Re-export main types for convenience
pub use bundle::{RenderMode, ResponseBundle};
pub use composer::ResponseComposer;
pub use crisis::CrisisDetector;
pub use emotion::{ClassificationResult, Emotion, EmotionClassifier};
pub use library::{CategoryDefinition, ContentLibrary, StepConnectives};
pub use phrasing::{pick, FixedSelector, RandomSelector, Selector};
pub use render::{render_conversational, render_sectioned};
