use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Persona instruction sent with every remote generation request.
pub const COUNSELOR_SYSTEM_PROMPT: &str = "你是一名温暖、鼓励、专业的中文心理咨询助理。\
目标：帮助用户缓解心理困扰、提供心理学建议。\
要求：共情、自然对话风格；不做医疗诊断；发现风险要提醒求助；\
尽量给出具体、可执行的小步骤建议（但以对话口吻表达，而非清单）。";

/// Represents the configuration for the remote language model.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct ModelConfig {
    /// The API identifier of the model (e.g., `gpt-4o-mini`).
    #[validate(length(min = 1))]
    pub model_id: String,
    /// Controls the creativity of the model's responses. Value between 0.0 and 2.0.
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: f32,
    /// Upper bound on generated tokens.
    #[validate(range(min = 1, max = 4096))]
    pub max_tokens: u32,
    /// The system-level instructions provided to the model for context.
    #[validate(length(min = 1))]
    pub system_prompt: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_id: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 700,
            system_prompt: COUNSELOR_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl ModelConfig {
    /// Default parameters for the given model identifier.
    pub fn for_model(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            ..Self::default()
        }
    }

    /// Run the validation rules, returning the config unchanged on success.
    pub fn validated(self) -> Result<Self, AppError> {
        self.validate()?;
        Ok(self)
    }
}

/// One request to the remote generation service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_text: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GenerationRequest {
    /// Build a request for `user_text` from a model configuration.
    pub fn from_config(config: &ModelConfig, user_text: &str) -> Self {
        Self {
            model: config.model_id.clone(),
            system_prompt: config.system_prompt.clone(),
            user_text: user_text.to_string(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}
