use crate::error::AppError;
use crate::models::GenerationRequest;
use async_trait::async_trait;

/// Defines the public interface for a remote LLM (Large Language Model) backend.
///
/// This trait abstracts the specific implementation of the LLM, allowing the
/// hosted service to be swapped for a test double.
#[async_trait]
pub trait LlmActor: Send + Sync + 'static {
    /// Generates a complete text response for one request.
    ///
    /// Implementations must report blank output as an error rather than `Ok("")`.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, AppError>;
}
