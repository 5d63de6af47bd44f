//! Seam between the orchestrator and the generative-text service.

use async_trait::async_trait;
use lagoon_core::config::GenerationParams;
use lagoon_core::error::Result;

/// The classified outcome of one generation request.
///
/// The orchestrator applies a fixed priority order to these variants;
/// the agent only reports what the service said, it never phrases
/// user-facing text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The service produced text; used verbatim as the assistant reply.
    Text(String),
    /// The service reported a structured error with this message.
    ServiceError(String),
    /// The response was blocked by safety settings.
    SafetyBlocked,
    /// No usable text; carries the termination reason when supplied.
    Invalid { finish_reason: Option<String> },
}

/// An opaque generative-text collaborator.
///
/// Implementations return `Err` only for transport or decode failures;
/// everything the service itself reported, including its errors, comes
/// back as a [`GenerationOutcome`].
#[async_trait]
pub trait GenerativeAgent: Send + Sync {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<GenerationOutcome>;
}
