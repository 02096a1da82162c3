//! One interactive conversation

use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use banking_agent_core::Transcript;
use banking_agent_llm::{build_system_prompt, ModelGateway};
use banking_agent_prefilter::{Classification, Classifier};

use crate::responses;

/// One conversation with one user.
///
/// The session owns the transcript for its lifetime; nothing is
/// persisted when it is dropped. Every user turn produces exactly one
/// assistant turn, including gateway failures, which become an
/// error-worded assistant reply rather than a propagated error.
pub struct Session {
    id: Uuid,
    system_prompt: String,
    classifier: Classifier,
    gateway: Arc<dyn ModelGateway>,
    transcript: Transcript,
}

impl Session {
    pub fn new(classifier: Classifier, gateway: Arc<dyn ModelGateway>) -> Self {
        Self {
            id: Uuid::new_v4(),
            system_prompt: build_system_prompt(),
            classifier,
            gateway,
            transcript: Transcript::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Handle one user message and return the assistant reply.
    ///
    /// The pre-filter runs first; the model gateway is called only when
    /// no shortcut applies.
    pub async fn respond(&mut self, input: &str) -> String {
        self.transcript.push_user(input);
        let started = Instant::now();

        let classification = self.classifier.classify(input);
        let reply = match &classification {
            Classification::NamedGreeting(name) => responses::named_greeting_reply(name),
            Classification::FuzzyGreeting => responses::FUZZY_GREETING_REPLY.to_string(),
            Classification::NonEnglish => responses::NON_ENGLISH_REPLY.to_string(),
            Classification::PassThrough => self.generate(input).await,
        };

        tracing::info!(
            session_id = %self.id,
            classification = ?classification,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Turn complete"
        );

        self.transcript.push_assistant(reply.as_str());
        reply
    }

    async fn generate(&self, input: &str) -> String {
        match self.gateway.generate(&self.system_prompt, input).await {
            Ok(reply) if reply.is_empty() => responses::EMPTY_OUTPUT_FALLBACK.to_string(),
            Ok(reply) => reply,
            Err(e) => responses::gateway_error_reply(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use banking_agent_core::TurnRole;
    use banking_agent_llm::LlmError;

    enum Outcome {
        Reply(&'static str),
        Fail,
    }

    /// Gateway double that counts calls and replies with a fixed outcome
    struct MockGateway {
        calls: AtomicUsize,
        outcome: Outcome,
    }

    impl MockGateway {
        fn replying(reply: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome: Outcome::Reply(reply),
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome: Outcome::Fail,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelGateway for MockGateway {
        async fn generate(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                Outcome::Reply(reply) => Ok(reply.to_string()),
                Outcome::Fail => Err(LlmError::Timeout),
            }
        }

        fn model_name(&self) -> &str {
            "mock"
        }
    }

    fn session_with(gateway: Arc<MockGateway>) -> Session {
        Session::new(Classifier::default(), gateway)
    }

    #[tokio::test]
    async fn test_named_greeting_skips_gateway() {
        let gateway = Arc::new(MockGateway::replying("unused"));
        let mut session = session_with(gateway.clone());

        let reply = session.respond("Hi this is Maria, I want a loan").await;
        assert_eq!(
            reply,
            "Hello Maria! How can I assist you with your banking needs today?"
        );
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_fuzzy_greeting_skips_gateway() {
        let gateway = Arc::new(MockGateway::replying("unused"));
        let mut session = session_with(gateway.clone());

        let reply = session.respond("hello").await;
        assert_eq!(reply, responses::FUZZY_GREETING_REPLY);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_non_english_skips_gateway() {
        let gateway = Arc::new(MockGateway::replying("unused"));
        let mut session = session_with(gateway.clone());

        let reply = session.respond("bonjour comment ça va aujourd'hui").await;
        assert_eq!(reply, responses::NON_ENGLISH_REPLY);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_pass_through_calls_gateway_once() {
        let gateway = Arc::new(MockGateway::replying(
            "You can check your balance via netbanking.",
        ));
        let mut session = session_with(gateway.clone());

        let reply = session.respond("I want to check my account balance please").await;
        assert_eq!(reply, "You can check your balance via netbanking.");
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_model_output_uses_fallback() {
        let gateway = Arc::new(MockGateway::replying(""));
        let mut session = session_with(gateway.clone());

        let reply = session.respond("I want to check my account balance please").await;
        assert_eq!(reply, responses::EMPTY_OUTPUT_FALLBACK);
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_gateway_error_becomes_assistant_turn() {
        let gateway = Arc::new(MockGateway::failing());
        let mut session = session_with(gateway.clone());

        let reply = session.respond("I want to check my account balance please").await;
        assert_eq!(
            reply,
            "An error occurred while querying the model: Model generation timed out"
        );

        // The failed turn is still recorded as a normal assistant turn
        let turns = session.transcript().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].role, TurnRole::Assistant);
        assert_eq!(turns[1].content, reply);
    }

    #[tokio::test]
    async fn test_one_assistant_turn_per_user_turn() {
        let gateway = Arc::new(MockGateway::replying("Sure, let me help with that."));
        let mut session = session_with(gateway);

        session.respond("hello").await;
        session.respond("Hi this is Ravi").await;
        session.respond("I want to check my account balance please").await;

        let turns = session.transcript().turns();
        assert_eq!(turns.len(), 6);
        for pair in turns.chunks(2) {
            assert_eq!(pair[0].role, TurnRole::User);
            assert_eq!(pair[1].role, TurnRole::Assistant);
        }
    }
}
