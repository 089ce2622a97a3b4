//! Remote generation adapter.
//!
//! The counselor only ever talks to the [`LlmActor`] trait; [`OpenAiClient`]
//! is the production implementation.

pub mod openai;
pub mod traits;

pub use openai::OpenAiClient;
pub use traits::LlmActor;
