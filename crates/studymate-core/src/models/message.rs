//! Chat message model handed to the persistence collaborator.

use serde::{Deserialize, Serialize};

use super::Studyplan;

/// A studyplan attached to a chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatStudyplan {
    /// ID of the public studyplan once saved, `None` for fresh generations
    pub original_id: Option<String>,

    /// ID of the chat message holding the plan, assigned on persistence
    pub chat_message_id: Option<String>,

    #[serde(flatten)]
    pub studyplan: Studyplan,
}

impl From<Studyplan> for ChatStudyplan {
    fn from(studyplan: Studyplan) -> Self {
        Self {
            original_id: None,
            chat_message_id: None,
            studyplan,
        }
    }
}

/// One entry of a conversation history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "role", content = "content", rename_all = "lowercase")]
pub enum ChatMessage {
    /// Message typed by the user
    User(String),

    /// Markdown written by the assistant
    Assistant(String),

    /// A studyplan generated by the assistant
    Studyplan(ChatStudyplan),
}
