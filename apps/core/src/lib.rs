// Heartwell Core
// Rule-based emotional triage with optional remote generation

pub mod brain;
pub mod config;
pub mod counselor;
pub mod error;
pub mod fs_manager;
pub mod models;
pub mod remote;
pub mod transcript;

pub use brain::{Emotion, RenderMode, ResponseBundle};
pub use config::{RemoteSettings, SecretStore};
pub use counselor::Counselor;
pub use error::AppError;
pub use transcript::{ChatTranscript, Role};

#[cfg(test)]
mod tests;
