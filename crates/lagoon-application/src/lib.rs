//! Application layer: the assistant orchestrator and prompt assembly.

pub mod orchestrator;
pub mod prompt;

pub use orchestrator::Assistant;
