use serde::{Deserialize, Serialize};

use super::client::{ApiError, Client};
use super::transactions::Transaction;
use crate::types::Uuid;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AiQuestion {
    pub content: String,
}

/// One message of an assistant conversation. Replies point back at the
/// message they answer via `in_reply_to`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AiMessage {
    pub uid: Uuid,
    pub content: String,
    #[serde(default)]
    pub in_reply_to: Option<Uuid>,
}

/// Locate the assistant's reply to `question` within a conversation.
pub fn find_reply<'m>(messages: &'m [AiMessage], question: &str) -> Option<&'m AiMessage> {
    let request = messages.iter().find(|message| message.content == question)?;
    messages
        .iter()
        .find(|message| message.in_reply_to.as_ref() == Some(&request.uid))
}

pub struct AiAssistantApi<'a> {
    client: &'a Client,
}

impl<'a> AiAssistantApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Submit a question. The answer is produced asynchronously; the
    /// returned transaction's entity is the conversation holding it.
    pub async fn ask_ai_assistant(&self, question: &AiQuestion) -> Result<Transaction, ApiError> {
        self.client
            .post("/v1/ai-assistant/conversations", question)
            .await
    }

    pub async fn get_conversation_messages(
        &self,
        conversation_uid: &Uuid,
    ) -> Result<Vec<AiMessage>, ApiError> {
        self.client
            .get(
                &format!("/v1/ai-assistant/conversations/{conversation_uid}/messages"),
                None,
            )
            .await
    }
}
