//! The assistant orchestrator.
//!
//! Owns the conversation transcript and the send-message state machine:
//! classify the question, scope the dataset, assemble the prompt, call
//! the generative agent, and map every outcome (including failures)
//! into an ordinary transcript entry. The session stays usable after
//! any failure; the in-flight flag is cleared on every path.

use crate::prompt::build_prompt;
use lagoon_core::LagoonError;
use lagoon_core::classify::is_proximity_query;
use lagoon_core::config::AppConfig;
use lagoon_core::error::Result;
use lagoon_core::keywords::extract_keywords;
use lagoon_core::model::Dataset;
use lagoon_core::scope::{scope_by_keywords, scope_by_proximity};
use lagoon_core::session::{ConversationMessage, Transcript};
use lagoon_interaction::{GenerationOutcome, GenerativeAgent, LocationOutcome, LocationProvider};
use std::sync::Arc;
use tracing::{debug, warn};

/// The conversational assistant over one session.
pub struct Assistant {
    config: AppConfig,
    agent: Arc<dyn GenerativeAgent>,
    location: Arc<dyn LocationProvider>,
    dataset: Option<Dataset>,
    transcript: Transcript,
    in_flight: bool,
}

impl Assistant {
    pub fn new(
        config: AppConfig,
        agent: Arc<dyn GenerativeAgent>,
        location: Arc<dyn LocationProvider>,
    ) -> Self {
        Self {
            config,
            agent,
            location,
            dataset: None,
            transcript: Transcript::new(),
            in_flight: false,
        }
    }

    /// Attaches the loaded dataset; sending stays disabled until then.
    pub fn attach_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
    }

    /// True when the dataset is loaded and no request is outstanding.
    pub fn is_ready(&self) -> bool {
        self.dataset.is_some() && !self.in_flight
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Processes one user message end to end.
    ///
    /// A no-op (no transcript mutation) when the trimmed input is empty,
    /// a request is already in flight, or the dataset is not loaded.
    /// Returns true when the message was processed.
    pub async fn send_message(&mut self, input: &str) -> bool {
        let trimmed = input.trim();
        if trimmed.is_empty() || self.in_flight || self.dataset.is_none() {
            debug!(in_flight = self.in_flight, "send ignored");
            return false;
        }

        self.in_flight = true;
        self.transcript.push(ConversationMessage::user(trimmed));

        let reply = match self.respond(trimmed).await {
            Ok(message) => message,
            Err(err) => {
                warn!(error = %err, "send failed");
                ConversationMessage::assistant(format!(
                    "Sorry, something went wrong while answering: {err}"
                ))
            }
        };

        self.transcript.push(reply);
        self.in_flight = false;
        true
    }

    async fn respond(&self, question: &str) -> Result<ConversationMessage> {
        let dataset = self.dataset.as_ref().ok_or(LagoonError::DatasetUnavailable)?;

        let proximity = self.config.location_aware && is_proximity_query(question);
        let context = if proximity {
            match self.location.acquire().await? {
                LocationOutcome::Fix(origin) => {
                    scope_by_proximity(dataset, origin, self.config.scoping.proximity_count)
                }
                LocationOutcome::Denied => {
                    return Ok(ConversationMessage::notice(
                        "Location permission was denied, so I can't find jetties near you. \
                         You can still ask about any jetty or route by name.",
                    ));
                }
                LocationOutcome::Unavailable => {
                    return Ok(ConversationMessage::notice(
                        "Your location isn't available right now, so I can't find jetties \
                         near you. You can still ask about any jetty or route by name.",
                    ));
                }
            }
        } else {
            let keywords = extract_keywords(question);
            debug!(?keywords, "scoping by keywords");
            scope_by_keywords(dataset, &keywords, self.config.scoping.filter_cap)
        };

        let prompt = build_prompt(&context, question, self.config.prompt_variant)?;
        let outcome = self.agent.generate(&prompt, &self.config.generation).await?;

        Ok(match outcome {
            GenerationOutcome::Text(text) => ConversationMessage::assistant(text),
            GenerationOutcome::ServiceError(message) => ConversationMessage::assistant(format!(
                "Sorry, the assistant service reported an error: {message}"
            )),
            GenerationOutcome::SafetyBlocked => ConversationMessage::assistant(
                "Sorry, that response was blocked by safety settings. Try rephrasing your \
                 question.",
            ),
            GenerationOutcome::Invalid { finish_reason } => {
                ConversationMessage::assistant(format!(
                    "Sorry, I received an invalid or incomplete response (reason: {}).",
                    finish_reason.unwrap_or_else(|| "unknown".to_string())
                ))
            }
        })
    }

    #[cfg(test)]
    fn force_in_flight(&mut self) {
        self.in_flight = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lagoon_core::config::{AppConfig, GenerationParams, PromptVariant, ScopingConfig};
    use lagoon_core::geo::Coordinate;
    use lagoon_core::model::{Jetty, Route};
    use lagoon_core::session::MessageAuthor;
    use std::sync::Mutex;

    struct MockAgent {
        outcome: GenerationOutcome,
        seen_prompt: Mutex<Option<String>>,
        calls: Mutex<usize>,
    }

    impl MockAgent {
        fn returning(outcome: GenerationOutcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                seen_prompt: Mutex::new(None),
                calls: Mutex::new(0),
            })
        }
    }

    #[async_trait]
    impl GenerativeAgent for MockAgent {
        async fn generate(
            &self,
            prompt: &str,
            _params: &GenerationParams,
        ) -> Result<GenerationOutcome> {
            *self.seen_prompt.lock().unwrap() = Some(prompt.to_string());
            *self.calls.lock().unwrap() += 1;
            Ok(self.outcome.clone())
        }
    }

    struct FailingAgent;

    #[async_trait]
    impl GenerativeAgent for FailingAgent {
        async fn generate(
            &self,
            _prompt: &str,
            _params: &GenerationParams,
        ) -> Result<GenerationOutcome> {
            Err(LagoonError::transport("connection reset"))
        }
    }

    struct StubLocation(LocationOutcome);

    #[async_trait]
    impl LocationProvider for StubLocation {
        async fn acquire(&self) -> Result<LocationOutcome> {
            Ok(self.0)
        }
    }

    fn config() -> AppConfig {
        AppConfig {
            api_key: "test-key".to_string(),
            model: "gemini-2.5-flash".to_string(),
            jetty_source_url: "https://data.test/jetties.json".to_string(),
            route_source_url: "https://data.test/routes.json".to_string(),
            scoping: ScopingConfig::default(),
            generation: GenerationParams::default(),
            location_aware: true,
            prompt_variant: PromptVariant::LocationAware,
            device_location: None,
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                Jetty {
                    id: "j-01".to_string(),
                    name: "Falomo Jetty".to_string(),
                    area: "Eti-Osa".to_string(),
                    status: "Operational".to_string(),
                    ownership: "State".to_string(),
                    condition: "Good".to_string(),
                    offers_charter: false,
                    location: Coordinate::new(6.4420, 3.4226),
                    description: None,
                    landmark: None,
                },
                Jetty {
                    id: "j-02".to_string(),
                    name: "Badore Jetty".to_string(),
                    area: "Eti-Osa".to_string(),
                    status: "Operational".to_string(),
                    ownership: "State".to_string(),
                    condition: "Fair".to_string(),
                    offers_charter: true,
                    location: Coordinate::new(6.4816, 3.5787),
                    description: None,
                    landmark: None,
                },
            ],
            Vec::<Route>::new(),
        )
    }

    fn assistant_with(
        agent: Arc<dyn GenerativeAgent>,
        location: LocationOutcome,
    ) -> Assistant {
        let mut assistant = Assistant::new(config(), agent, Arc::new(StubLocation(location)));
        assistant.attach_dataset(dataset());
        assistant
    }

    #[tokio::test]
    async fn reply_text_lands_in_transcript() {
        let agent = MockAgent::returning(GenerationOutcome::Text("**Falomo** is open.".into()));
        let mut assistant = assistant_with(agent, LocationOutcome::Unavailable);

        assert!(assistant.send_message("Tell me about Falomo").await);

        let messages = assistant.transcript().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].author, MessageAuthor::User);
        assert_eq!(messages[1].content, "**Falomo** is open.");
        assert!(assistant.is_ready());
    }

    #[tokio::test]
    async fn empty_input_is_a_no_op() {
        let agent = MockAgent::returning(GenerationOutcome::Text("unused".into()));
        let mut assistant = assistant_with(agent.clone(), LocationOutcome::Unavailable);

        assert!(!assistant.send_message("   ").await);
        assert!(assistant.transcript().is_empty());
        assert_eq!(*agent.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn missing_dataset_is_a_no_op() {
        let agent = MockAgent::returning(GenerationOutcome::Text("unused".into()));
        let mut assistant = Assistant::new(
            config(),
            agent.clone(),
            Arc::new(StubLocation(LocationOutcome::Unavailable)),
        );

        assert!(!assistant.send_message("hello").await);
        assert!(assistant.transcript().is_empty());
    }

    #[tokio::test]
    async fn outstanding_request_blocks_sending() {
        let agent = MockAgent::returning(GenerationOutcome::Text("unused".into()));
        let mut assistant = assistant_with(agent, LocationOutcome::Unavailable);
        assistant.force_in_flight();

        assert!(!assistant.send_message("hello").await);
        assert!(assistant.transcript().is_empty());
    }

    #[tokio::test]
    async fn service_error_is_embedded_and_in_flight_cleared() {
        let agent = MockAgent::returning(GenerationOutcome::ServiceError("quota exceeded".into()));
        let mut assistant = assistant_with(agent, LocationOutcome::Unavailable);

        assistant.send_message("What's the fare to CMS?").await;

        let last = assistant.transcript().last().unwrap();
        assert!(last.content.contains("quota exceeded"));
        assert!(assistant.is_ready());
    }

    #[tokio::test]
    async fn safety_block_yields_fixed_message() {
        let agent = MockAgent::returning(GenerationOutcome::SafetyBlocked);
        let mut assistant = assistant_with(agent, LocationOutcome::Unavailable);

        assistant.send_message("something spicy").await;

        let last = assistant.transcript().last().unwrap();
        assert!(last.content.contains("blocked by safety settings"));
    }

    #[tokio::test]
    async fn invalid_response_reports_finish_reason() {
        let agent = MockAgent::returning(GenerationOutcome::Invalid {
            finish_reason: Some("MAX_TOKENS".into()),
        });
        let mut assistant = assistant_with(agent, LocationOutcome::Unavailable);

        assistant.send_message("long question").await;
        assert!(assistant.transcript().last().unwrap().content.contains("MAX_TOKENS"));
    }

    #[tokio::test]
    async fn invalid_response_without_reason_says_unknown() {
        let agent = MockAgent::returning(GenerationOutcome::Invalid { finish_reason: None });
        let mut assistant = assistant_with(agent, LocationOutcome::Unavailable);

        assistant.send_message("question").await;
        assert!(assistant.transcript().last().unwrap().content.contains("unknown"));
    }

    #[tokio::test]
    async fn transport_failure_becomes_failure_message() {
        let mut assistant =
            assistant_with(Arc::new(FailingAgent), LocationOutcome::Unavailable);

        assistant.send_message("hello ferry").await;

        let last = assistant.transcript().last().unwrap();
        assert!(last.content.contains("something went wrong"));
        assert!(last.content.contains("connection reset"));
        assert!(assistant.is_ready());
    }

    #[tokio::test]
    async fn proximity_query_uses_ranked_context() {
        let agent = MockAgent::returning(GenerationOutcome::Text("Badore is closest.".into()));
        let mut assistant = assistant_with(
            agent.clone(),
            LocationOutcome::Fix(Coordinate::new(6.48, 3.57)),
        );

        assistant.send_message("What's the nearest jetty to me?").await;

        let prompt = agent.seen_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("distance_km"));
        assert!(prompt.contains("ranked by distance"));
    }

    #[tokio::test]
    async fn denied_location_emits_system_notice_without_calling_agent() {
        let agent = MockAgent::returning(GenerationOutcome::Text("unused".into()));
        let mut assistant = assistant_with(agent.clone(), LocationOutcome::Denied);

        assistant.send_message("Which jetty is closest to me?").await;

        let last = assistant.transcript().last().unwrap();
        assert!(last.system_notice);
        assert!(last.content.contains("permission"));
        assert_eq!(*agent.calls.lock().unwrap(), 0);
        assert!(assistant.is_ready());
    }

    #[tokio::test]
    async fn location_flag_off_keeps_keyword_path() {
        let agent = MockAgent::returning(GenerationOutcome::Text("keyword reply".into()));
        let mut cfg = config();
        cfg.location_aware = false;
        let mut assistant = Assistant::new(
            cfg,
            agent.clone(),
            Arc::new(StubLocation(LocationOutcome::Denied)),
        );
        assistant.attach_dataset(dataset());

        assistant.send_message("What's the nearest jetty to me?").await;

        let prompt = agent.seen_prompt.lock().unwrap().clone().unwrap();
        assert!(!prompt.contains("ranked by distance"));
        assert_eq!(assistant.transcript().last().unwrap().content, "keyword reply");
    }
}
