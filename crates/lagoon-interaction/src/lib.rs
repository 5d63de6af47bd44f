//! External collaborators: the generative-text service, the device
//! location provider, and the link opener.

pub mod agent;
pub mod gemini;
pub mod link;
pub mod location;

pub use agent::{GenerationOutcome, GenerativeAgent};
pub use gemini::GeminiApiAgent;
pub use link::{LinkOpener, TerminalLinkOpener};
pub use location::{ConfiguredLocationProvider, LocationOutcome, LocationProvider};
