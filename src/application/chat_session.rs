//! The chat session scheduler.
//!
//! Owns one live conversation end to end: transcript, step state,
//! visitor profile, turn phase, and the analytics session behind it.
//! Every turn runs the same choreography: echo the visitor's input
//! after a synthetic typing delay, resolve the agent's reply, hold it
//! behind a second delay, then commit.
//!
//! All turn methods take `&mut self`, so two turns can never run
//! concurrently on the same session. Phase transitions are staged on a
//! local and committed together with the other state mutations only
//! after the delays have run, so a turn future dropped mid-delay
//! leaves the session idle and retryable with the transcript
//! untouched.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::domain::analytics::InteractionKind;
use crate::domain::catalog::Recommendation;
use crate::domain::conversation::{
    demo_answer_for_step, question_for_step, AgentUtterance, ConversationStep, DialogueResolver,
    Message, VisitorProfile,
};
use crate::domain::foundation::{
    DomainError, ErrorCode, SessionId, StateMachine, Timestamp, ValidationError,
};
use crate::ports::EventSink;

use super::dwell::DwellTracker;
use super::turn::{TurnOutcome, TurnPhase};
use super::typing::TypingProfile;

/// A live scripted conversation with its analytics session.
pub struct ChatSession {
    resolver: DialogueResolver,
    sink: Arc<dyn EventSink>,
    session_id: SessionId,
    step: ConversationStep,
    phase: TurnPhase,
    profile: VisitorProfile,
    transcript: Vec<Message>,
    recommendation: Option<Recommendation>,
    agent_typing: TypingProfile,
    visitor_typing: TypingProfile,
    demo_enabled: bool,
    demo_auto: bool,
    demo_step_delay: Duration,
    rng: StdRng,
    last_interaction: Arc<RwLock<Timestamp>>,
    shutdown: watch::Sender<bool>,
    dwell_handle: Option<JoinHandle<()>>,
    analytics_open: bool,
}

impl ChatSession {
    /// Opens a session: starts the analytics session and spawns the
    /// dwell tracker.
    ///
    /// # Errors
    ///
    /// - `SinkError` if the analytics session cannot be started
    pub async fn open(
        config: &AppConfig,
        sink: Arc<dyn EventSink>,
        referrer: Option<String>,
    ) -> Result<Self, DomainError> {
        let session_id = sink.start_session(referrer).await?;
        info!(session_id = %session_id, "chat session opened");

        let last_interaction = Arc::new(RwLock::new(Timestamp::now()));
        let (shutdown, shutdown_rx) = watch::channel(false);
        let tracker = DwellTracker::new(
            sink.clone(),
            session_id,
            Duration::from_secs(config.chat.dwell_tick_secs),
            Duration::from_secs(config.chat.inactivity_cutoff_secs),
            last_interaction.clone(),
        );
        let dwell_handle = tokio::spawn(async move { tracker.run(shutdown_rx).await });

        Ok(Self {
            resolver: DialogueResolver::new(),
            sink,
            session_id,
            step: ConversationStep::Opening,
            phase: TurnPhase::Idle,
            profile: VisitorProfile::new(),
            transcript: Vec::new(),
            recommendation: None,
            agent_typing: TypingProfile::agent(&config.chat),
            visitor_typing: TypingProfile::visitor(&config.chat),
            demo_enabled: config.demo.enabled,
            demo_auto: config.demo.auto,
            demo_step_delay: Duration::from_millis(config.demo.step_delay_ms),
            rng: StdRng::from_entropy(),
            last_interaction,
            shutdown,
            dwell_handle: Some(dwell_handle),
            analytics_open: true,
        })
    }

    /// Delivers the opening greeting and the first question.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the greeting was already delivered
    pub async fn start(&mut self) -> Result<TurnOutcome, DomainError> {
        self.ensure_idle()?;
        if self.step != ConversationStep::Opening {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Opening greeting was already delivered",
            ));
        }

        let reply = self.resolver.resolve("", self.step, &self.profile, false);
        let delay = self.agent_delay(&reply.utterances);

        let phase = self.phase.transition_to(TurnPhase::AgentTyping)?;
        time::sleep(delay).await;
        let phase = phase.transition_to(TurnPhase::AgentResponded)?;

        let agent_messages = self.append_utterances(&reply.utterances)?;
        self.step = self.step.transition_to(reply.next_step)?;
        self.phase = phase.transition_to(TurnPhase::Idle)?;
        self.touch();

        Ok(TurnOutcome {
            agent_messages,
            recommendation: None,
            progress_percent: self.step.progress_percent(),
            completed: false,
        })
    }

    /// Submits a free-text answer to the current question.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the input is empty or whitespace only
    /// - `TurnInFlight` if a previous turn never finished
    /// - `ConversationComplete` once the recommendation was delivered
    pub async fn submit_text(&mut self, input: &str) -> Result<TurnOutcome, DomainError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DomainError::validation(
                "input",
                "Answer cannot be empty",
            ));
        }
        self.run_turn(input, false, false).await
    }

    /// Submits one of the current question's choice buttons by index.
    ///
    /// The echo is immediate; clicking a button involves no typing.
    ///
    /// # Errors
    ///
    /// - `ChoiceInputRequired` if the current step offers no choices
    /// - `OutOfRange` if the index is past the choice list
    pub async fn select_choice(&mut self, index: usize) -> Result<TurnOutcome, DomainError> {
        self.ensure_idle()?;
        let question = question_for_step(self.step).ok_or_else(|| {
            DomainError::new(
                ErrorCode::ChoiceInputRequired,
                "No question with choices is active",
            )
        })?;
        let choice = *question.choices.get(index).ok_or_else(|| {
            DomainError::from(ValidationError::out_of_range(
                "choice",
                0,
                question.choices.len() as i32 - 1,
                index as i32,
            ))
        })?;
        self.run_turn(choice, true, false).await
    }

    /// Advances the demo walkthrough by one canned turn.
    ///
    /// On a fresh session this delivers the opening greeting instead.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if demo mode is disabled
    /// - `ConversationComplete` once the recommendation was delivered
    pub async fn demo_next(&mut self) -> Result<TurnOutcome, DomainError> {
        if !self.demo_enabled {
            return Err(DomainError::validation("demo", "Demo mode is not enabled"));
        }
        if self.step == ConversationStep::Opening {
            return self.start().await;
        }
        let answer = demo_answer_for_step(self.step).unwrap_or("");
        self.run_turn(answer, true, true).await
    }

    /// Runs the demo walkthrough to completion, pausing between steps.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if demo mode or auto-advance is disabled
    pub async fn run_demo_auto(&mut self) -> Result<TurnOutcome, DomainError> {
        if !self.demo_enabled || !self.demo_auto {
            return Err(DomainError::validation(
                "demo",
                "Automatic demo advance is not enabled",
            ));
        }
        if self.step == ConversationStep::Opening {
            self.start().await?;
        }
        loop {
            time::sleep(self.demo_step_delay).await;
            let outcome = self.demo_next().await?;
            if outcome.completed {
                return Ok(outcome);
            }
        }
    }

    /// Closes the session, ending the analytics session if the
    /// conversation never completed and stopping the dwell tracker.
    ///
    /// # Errors
    ///
    /// - `SinkError` if the analytics session cannot be closed
    pub async fn close(&mut self) -> Result<(), DomainError> {
        if self.analytics_open {
            self.sink
                .end_session(&self.session_id, &self.profile, false)
                .await?;
            self.analytics_open = false;
        }
        let _ = self.shutdown.send(true);
        if let Some(handle) = self.dwell_handle.take() {
            let _ = handle.await;
        }
        debug!(session_id = %self.session_id, "chat session closed");
        Ok(())
    }

    /// The analytics session backing this conversation.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// The transcript so far, oldest first.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// The profile accumulated from classified answers.
    pub fn profile(&self) -> &VisitorProfile {
        &self.profile
    }

    /// The active step.
    pub fn step(&self) -> ConversationStep {
        self.step
    }

    /// The current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Progress through the flow, 0 to 100.
    pub fn progress_percent(&self) -> f64 {
        self.step.progress_percent()
    }

    /// The delivered recommendation, once the conversation completed.
    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// True once the recommendation was delivered.
    pub fn is_complete(&self) -> bool {
        self.phase == TurnPhase::Completed
    }

    async fn run_turn(
        &mut self,
        input: &str,
        immediate_echo: bool,
        demo_turn: bool,
    ) -> Result<TurnOutcome, DomainError> {
        self.ensure_idle()?;
        if !self.step.accepts_input() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Opening greeting has not been delivered yet",
            ));
        }
        let answered_step = self.step;

        // Echo leg. Button clicks and demo answers skip the synthetic
        // typing delay. The phase walks the full turn lifecycle on a
        // local copy; `self.phase` stays `Idle` until every delay has
        // run, so dropping the turn future mid-delay leaves the
        // session retryable.
        let echo_delay = if immediate_echo {
            Duration::ZERO
        } else {
            self.visitor_typing.delay(input, &mut self.rng)
        };
        let phase = self.phase.transition_to(TurnPhase::UserEchoPending)?;
        time::sleep(echo_delay).await;
        let phase = phase.transition_to(TurnPhase::UserEchoed)?;
        let echo = Message::visitor(input)?;

        // Reply leg.
        let reply = self
            .resolver
            .resolve(input, answered_step, &self.profile, demo_turn);
        let delay = self.agent_delay(&reply.utterances);
        let phase = phase.transition_to(TurnPhase::AgentTyping)?;
        time::sleep(delay).await;
        let phase = phase.transition_to(TurnPhase::AgentResponded)?;

        // Commit. No awaits between here and the terminal phase write.
        self.transcript.push(echo);
        let agent_messages = self.append_utterances(&reply.utterances)?;
        if let Some((tag, value)) = reply.classified {
            self.profile.set(tag, value);
        }
        self.step = self.step.transition_to(reply.next_step)?;
        self.touch();

        let completed = reply.is_final();
        self.recommendation = reply.recommendation.clone();
        self.phase = if completed {
            phase.transition_to(TurnPhase::Completed)?
        } else {
            phase.transition_to(TurnPhase::Idle)?
        };

        self.sink
            .record(
                &self.session_id,
                InteractionKind::QuestionAnswered,
                question_answered_data(answered_step, input),
            )
            .await?;
        if let Some(rec) = reply.recommendation {
            self.sink
                .record(
                    &self.session_id,
                    InteractionKind::RecommendationViewed,
                    HashMap::from([(
                        "totalQuestionsAnswered".to_string(),
                        json!(answered_step.index()),
                    )]),
                )
                .await?;
            self.sink
                .end_session(&self.session_id, &self.profile, true)
                .await?;
            self.analytics_open = false;
            info!(
                session_id = %self.session_id,
                maturity_score = rec.maturity_score,
                "conversation completed"
            );
            return Ok(TurnOutcome {
                agent_messages,
                recommendation: Some(rec),
                progress_percent: self.step.progress_percent(),
                completed,
            });
        }
        Ok(TurnOutcome {
            agent_messages,
            recommendation: None,
            progress_percent: self.step.progress_percent(),
            completed,
        })
    }

    fn ensure_idle(&self) -> Result<(), DomainError> {
        match self.phase {
            TurnPhase::Idle => Ok(()),
            TurnPhase::Completed => Err(DomainError::new(
                ErrorCode::ConversationComplete,
                "The conversation has already completed",
            )),
            _ => Err(DomainError::new(
                ErrorCode::TurnInFlight,
                "A turn is already in flight",
            )),
        }
    }

    fn agent_delay(&mut self, utterances: &[AgentUtterance]) -> Duration {
        let combined: String = utterances
            .iter()
            .map(|u| u.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        self.agent_typing.delay(&combined, &mut self.rng)
    }

    fn append_utterances(
        &mut self,
        utterances: &[AgentUtterance],
    ) -> Result<Vec<Message>, DomainError> {
        let mut appended = Vec::with_capacity(utterances.len());
        for utterance in utterances {
            let message = if utterance.choices.is_empty() {
                Message::agent(utterance.content.clone())?
            } else {
                Message::agent_question(utterance.content.clone(), utterance.choices.clone())?
            };
            self.transcript.push(message.clone());
            appended.push(message);
        }
        Ok(appended)
    }

    fn touch(&self) {
        if let Ok(mut guard) = self.last_interaction.write() {
            *guard = Timestamp::now();
        }
    }
}

fn question_answered_data(step: ConversationStep, answer: &str) -> HashMap<String, Value> {
    HashMap::from([
        ("questionIndex".to_string(), json!(step.index())),
        ("answer".to_string(), json!(answer)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::analytics::TrackingStore;
    use crate::domain::conversation::Sender;

    fn demo_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.demo.enabled = true;
        config.demo.auto = true;
        config
    }

    async fn open_session(config: &AppConfig) -> (ChatSession, Arc<TrackingStore>) {
        let store = Arc::new(TrackingStore::new());
        let sink: Arc<dyn EventSink> = store.clone();
        let session = ChatSession::open(config, sink, None).await.unwrap();
        (session, store)
    }

    mod opening {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn start_delivers_greeting_and_first_question() {
            let (mut session, _store) = open_session(&AppConfig::default()).await;
            let outcome = session.start().await.unwrap();

            assert_eq!(outcome.agent_messages.len(), 2);
            assert!(outcome.agent_messages[0].content().contains("Ready to explore"));
            assert!(outcome.agent_messages[1].offers_choices());
            assert_eq!(session.step(), ConversationStep::Question1);
            assert_eq!(session.phase(), TurnPhase::Idle);
        }

        #[tokio::test(start_paused = true)]
        async fn start_twice_is_rejected() {
            let (mut session, _store) = open_session(&AppConfig::default()).await;
            session.start().await.unwrap();
            let err = session.start().await.unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        }

        #[tokio::test(start_paused = true)]
        async fn input_before_the_greeting_is_rejected() {
            let (mut session, _store) = open_session(&AppConfig::default()).await;
            let err = session.submit_text("hello").await.unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        }
    }

    mod turns {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn a_text_answer_is_echoed_then_answered() {
            let (mut session, store) = open_session(&AppConfig::default()).await;
            session.start().await.unwrap();

            let outcome = session.submit_text("We're just starting out").await.unwrap();
            assert_eq!(outcome.agent_messages.len(), 1);
            assert!(!outcome.completed);
            assert_eq!(session.step(), ConversationStep::Question2);

            // Transcript: greeting, question 1, echo, question 2.
            let transcript = session.transcript();
            assert_eq!(transcript.len(), 4);
            assert_eq!(transcript[2].sender(), Sender::Visitor);
            assert_eq!(transcript[2].content(), "We're just starting out");

            let interactions = store.interactions_for(session.session_id()).unwrap();
            assert!(interactions
                .iter()
                .any(|i| i.kind() == crate::domain::analytics::InteractionKind::QuestionAnswered));
        }

        #[tokio::test(start_paused = true)]
        async fn answers_accumulate_into_the_profile() {
            let (mut session, _store) = open_session(&AppConfig::default()).await;
            session.start().await.unwrap();

            session.submit_text("just starting").await.unwrap();
            session.submit_text("I'm the founder").await.unwrap();

            use crate::domain::conversation::ProfileTag;
            assert_eq!(session.profile().get(ProfileTag::JourneyStage), Some("starting"));
            assert_eq!(session.profile().get(ProfileTag::Role), Some("founder"));
        }

        #[tokio::test(start_paused = true)]
        async fn empty_text_is_rejected_without_side_effects() {
            let (mut session, _store) = open_session(&AppConfig::default()).await;
            session.start().await.unwrap();

            let before = session.transcript().len();
            let err = session.submit_text("   ").await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
            assert_eq!(session.transcript().len(), before);
        }

        #[tokio::test(start_paused = true)]
        async fn select_choice_submits_the_chosen_answer() {
            let (mut session, _store) = open_session(&AppConfig::default()).await;
            session.start().await.unwrap();

            session.select_choice(1).await.unwrap();
            let echo = &session.transcript()[2];
            assert!(echo.content().starts_with("Exploring"));
        }

        #[tokio::test(start_paused = true)]
        async fn out_of_range_choice_is_rejected() {
            let (mut session, _store) = open_session(&AppConfig::default()).await;
            session.start().await.unwrap();

            let err = session.select_choice(99).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::OutOfRange);
        }

        #[tokio::test(start_paused = true)]
        async fn a_dropped_turn_appends_nothing() {
            let (mut session, _store) = open_session(&AppConfig::default()).await;
            session.start().await.unwrap();
            let before = session.transcript().len();

            {
                let turn = session.submit_text("a slow typist");
                tokio::pin!(turn);
                // Poll once so the turn parks on its echo delay, then
                // drop it.
                let _ = futures::poll!(&mut turn);
            }
            assert_eq!(session.transcript().len(), before);
        }

        #[tokio::test(start_paused = true)]
        async fn a_dropped_turn_leaves_the_session_retryable() {
            let (mut session, store) = open_session(&AppConfig::default()).await;
            session.start().await.unwrap();

            {
                let turn = session.submit_text("a slow typist");
                tokio::pin!(turn);
                let _ = futures::poll!(&mut turn);
            }
            assert_eq!(session.phase(), TurnPhase::Idle);

            // The abandoned turn must not gate the rest of the flow.
            session.submit_text("just starting out").await.unwrap();
            session.submit_text("founder and CEO").await.unwrap();
            session.submit_text("customer support automation").await.unwrap();
            session.submit_text("tutorials please").await.unwrap();
            let outcome = session.submit_text("technology").await.unwrap();
            assert!(outcome.completed);
            assert!(session.is_complete());

            let stored = store.session(session.session_id()).unwrap().unwrap();
            assert!(stored.completed_flow);
        }
    }

    mod completion {
        use super::*;

        async fn answer_all_five(session: &mut ChatSession) -> TurnOutcome {
            session.start().await.unwrap();
            session.submit_text("just starting out").await.unwrap();
            session.submit_text("founder and CEO").await.unwrap();
            session.submit_text("customer support automation").await.unwrap();
            session.submit_text("tutorials please").await.unwrap();
            session.submit_text("technology").await.unwrap()
        }

        #[tokio::test(start_paused = true)]
        async fn the_fifth_answer_delivers_the_recommendation() {
            let (mut session, store) = open_session(&AppConfig::default()).await;
            let outcome = answer_all_five(&mut session).await;

            assert!(outcome.completed);
            assert_eq!(outcome.progress_percent, 100.0);
            let rec = outcome.recommendation.unwrap();
            assert_eq!(rec.maturity_score, 20);
            assert!(rec.industry_insights.is_some());
            assert!(session.is_complete());

            let stored = store.session(session.session_id()).unwrap().unwrap();
            assert!(stored.completed_flow);
            assert!(stored.ended_at.is_some());
            assert!(stored.lead_score.is_some());
        }

        #[tokio::test(start_paused = true)]
        async fn input_after_completion_is_rejected() {
            let (mut session, _store) = open_session(&AppConfig::default()).await;
            answer_all_five(&mut session).await;

            let err = session.submit_text("one more thing").await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ConversationComplete);
        }

        #[tokio::test(start_paused = true)]
        async fn close_after_completion_does_not_end_the_session_twice() {
            let (mut session, store) = open_session(&AppConfig::default()).await;
            answer_all_five(&mut session).await;
            session.close().await.unwrap();

            let stored = store.session(session.session_id()).unwrap().unwrap();
            assert!(stored.completed_flow);
        }

        #[tokio::test(start_paused = true)]
        async fn close_before_completion_ends_the_session_incomplete() {
            let (mut session, store) = open_session(&AppConfig::default()).await;
            session.start().await.unwrap();
            session.submit_text("exploring options").await.unwrap();
            session.close().await.unwrap();

            let stored = store.session(session.session_id()).unwrap().unwrap();
            assert!(!stored.completed_flow);
            assert!(stored.ended_at.is_some());
        }
    }

    mod demo {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn demo_next_requires_demo_mode() {
            let (mut session, _store) = open_session(&AppConfig::default()).await;
            let err = session.demo_next().await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
        }

        #[tokio::test(start_paused = true)]
        async fn demo_next_walks_one_step_at_a_time() {
            let (mut session, _store) = open_session(&demo_config()).await;

            session.demo_next().await.unwrap();
            assert_eq!(session.step(), ConversationStep::Question1);

            session.demo_next().await.unwrap();
            assert_eq!(session.step(), ConversationStep::Question2);
            // The canned answer is the first scripted choice.
            assert!(session.transcript()[2].content().starts_with("Just Starting"));
        }

        #[tokio::test(start_paused = true)]
        async fn auto_demo_runs_to_completion() {
            let (mut session, store) = open_session(&demo_config()).await;
            let outcome = session.run_demo_auto().await.unwrap();

            assert!(outcome.completed);
            assert!(outcome.recommendation.is_some());
            assert!(session.is_complete());

            // Five answers, each echoed and answered.
            let visitor_turns = session
                .transcript()
                .iter()
                .filter(|m| m.is_visitor())
                .count();
            assert_eq!(visitor_turns, 5);

            let stored = store.session(session.session_id()).unwrap().unwrap();
            assert!(stored.completed_flow);
            // Canned answers classify cleanly into all five tags.
            assert_eq!(stored.profile.as_ref().map(HashMap::len), Some(5));
        }

        #[tokio::test(start_paused = true)]
        async fn auto_demo_requires_auto_advance() {
            let mut config = demo_config();
            config.demo.auto = false;
            let (mut session, _store) = open_session(&config).await;

            let err = session.run_demo_auto().await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
        }
    }
}
