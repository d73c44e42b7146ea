//! Message entity for the chat transcript.
//!
//! Messages are immutable records of visitor/agent exchanges. The
//! transcript is append-only and ordered by creation time; the widget's
//! typewriter reveal is a rendering concern and the stored content is
//! always the final string.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, MessageId, Timestamp};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The site visitor.
    Visitor,
    /// The scripted agent.
    Agent,
}

/// How the widget should collect the answer to an agent message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseType {
    /// Free text input.
    Text,
    /// One of the attached choice buttons.
    MultiChoice,
}

/// An immutable message within the transcript.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `content` is non-empty (validated at construction)
/// - `created_at` is set at construction and never changes
/// - `choices` are only present on agent multi-choice messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    sender: Sender,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_type: Option<ResponseType>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    choices: Vec<String>,
    created_at: Timestamp,
}

impl Message {
    /// Creates a visitor message.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content is empty or whitespace only
    pub fn visitor(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        Self::validate_content(&content)?;
        Ok(Self {
            id: MessageId::new(),
            sender: Sender::Visitor,
            content,
            response_type: None,
            choices: Vec::new(),
            created_at: Timestamp::now(),
        })
    }

    /// Creates a plain-text agent message.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content is empty or whitespace only
    pub fn agent(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        Self::validate_content(&content)?;
        Ok(Self {
            id: MessageId::new(),
            sender: Sender::Agent,
            content,
            response_type: Some(ResponseType::Text),
            choices: Vec::new(),
            created_at: Timestamp::now(),
        })
    }

    /// Creates an agent message carrying choice buttons.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content is empty or choices is empty
    pub fn agent_question(
        content: impl Into<String>,
        choices: Vec<String>,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        Self::validate_content(&content)?;
        if choices.is_empty() {
            return Err(DomainError::validation(
                "choices",
                "Multi-choice message must carry at least one choice",
            ));
        }
        Ok(Self {
            id: MessageId::new(),
            sender: Sender::Agent,
            content,
            response_type: Some(ResponseType::MultiChoice),
            choices,
            created_at: Timestamp::now(),
        })
    }

    /// Returns the message ID.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the sender.
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Returns the content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the response type, if this is an agent message.
    pub fn response_type(&self) -> Option<ResponseType> {
        self.response_type
    }

    /// Returns the attached choices (empty for text messages).
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Returns when the message was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true if this message is from the visitor.
    pub fn is_visitor(&self) -> bool {
        self.sender == Sender::Visitor
    }

    /// Returns true if this message is from the agent.
    pub fn is_agent(&self) -> bool {
        self.sender == Sender::Agent
    }

    /// Returns true if this message offers choice buttons.
    pub fn offers_choices(&self) -> bool {
        self.response_type == Some(ResponseType::MultiChoice)
    }

    fn validate_content(content: &str) -> Result<(), DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::validation(
                "content",
                "Message content cannot be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn visitor_creates_visitor_message() {
            let msg = Message::visitor("Hello").unwrap();
            assert!(msg.is_visitor());
            assert!(!msg.is_agent());
            assert_eq!(msg.content(), "Hello");
            assert!(msg.response_type().is_none());
        }

        #[test]
        fn agent_creates_text_message() {
            let msg = Message::agent("Hi there").unwrap();
            assert!(msg.is_agent());
            assert_eq!(msg.response_type(), Some(ResponseType::Text));
            assert!(!msg.offers_choices());
        }

        #[test]
        fn agent_question_carries_choices() {
            let msg = Message::agent_question(
                "What's your role?",
                vec!["Founder".to_string(), "CTO".to_string()],
            )
            .unwrap();
            assert!(msg.offers_choices());
            assert_eq!(msg.choices().len(), 2);
        }

        #[test]
        fn rejects_empty_content() {
            assert!(Message::visitor("").is_err());
            assert!(Message::agent("   ").is_err());
        }

        #[test]
        fn agent_question_rejects_empty_choices() {
            assert!(Message::agent_question("Pick one", vec![]).is_err());
        }

        #[test]
        fn ids_are_unique() {
            let a = Message::visitor("one").unwrap();
            let b = Message::visitor("two").unwrap();
            assert_ne!(a.id(), b.id());
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn response_type_serializes_to_camel_case() {
            let json = serde_json::to_string(&ResponseType::MultiChoice).unwrap();
            assert_eq!(json, "\"multiChoice\"");
        }

        #[test]
        fn text_message_omits_choices() {
            let msg = Message::agent("Hi").unwrap();
            let json = serde_json::to_string(&msg).unwrap();
            assert!(!json.contains("choices"));
        }
    }
}
