use anyhow::{Context, Result};

use super::required;
use crate::api::assistant::{find_reply, AiAssistantApi, AiQuestion};
use crate::api::transactions::{TransactionsApi, POLL_INTERVAL};
use crate::cli::{AskAiArgs, ConnectionArgs};
use crate::config::Credentials;

pub async fn ask_ai(connection: &ConnectionArgs, args: AskAiArgs) -> Result<()> {
    let client = Credentials::resolve(connection)?.into_client();
    let question = required(args.question, "Question for the AI assistant")?;

    let assistant = AiAssistantApi::new(&client);
    let transaction = assistant
        .ask_ai_assistant(&AiQuestion {
            content: question.clone(),
        })
        .await
        .context("failed to submit the question")?;

    let transaction = TransactionsApi::new(&client)
        .wait_for_completion(transaction, POLL_INTERVAL)
        .await
        .context("failed to get answer from AI assistant")?;
    println!("Received answer from AI Assistant");

    let conversation_uid = transaction
        .entity_uid
        .context("the transaction did not name a conversation")?;
    let messages = assistant
        .get_conversation_messages(&conversation_uid)
        .await
        .context("failed to fetch the conversation")?;

    let reply = find_reply(&messages, &question)
        .context("the conversation holds no reply to the question")?;
    println!("The AI assistant said: {}", reply.content);
    Ok(())
}
