use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use subscripter_core::config::{ChatConfig, DEFAULT_GREETING};
use subscripter_core::domain::chat::{ChatMessage, MessageId, Sender};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::responder::ChatResponder;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1_000);

type Transcript = Arc<Mutex<Vec<ChatMessage>>>;

/// One visitor's conversation with the assistant.
///
/// Each accepted message schedules its own reply task. Tasks still pending
/// when the session is shut down or dropped are aborted.
pub struct ChatSession {
    responder: Arc<dyn ChatResponder>,
    transcript: Transcript,
    pending: HashMap<MessageId, JoinHandle<()>>,
    reply_delay: Duration,
}

impl ChatSession {
    pub fn new(
        responder: Arc<dyn ChatResponder>,
        greeting: impl Into<String>,
        reply_delay: Duration,
    ) -> Self {
        let opening = ChatMessage::new(next_id(Sender::Bot).0, greeting, Sender::Bot);
        Self {
            responder,
            transcript: Arc::new(Mutex::new(vec![opening])),
            pending: HashMap::new(),
            reply_delay,
        }
    }

    pub fn with_defaults(responder: Arc<dyn ChatResponder>) -> Self {
        Self::new(responder, DEFAULT_GREETING, DEFAULT_REPLY_DELAY)
    }

    pub fn from_config(responder: Arc<dyn ChatResponder>, config: &ChatConfig) -> Self {
        Self::new(
            responder,
            config.greeting.clone(),
            Duration::from_millis(config.reply_delay_ms),
        )
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    pub fn transcript(&self) -> Vec<ChatMessage> {
        lock(&self.transcript).clone()
    }

    /// Records a visitor message and schedules its reply.
    ///
    /// Blank input is ignored: nothing is recorded and `None` is returned.
    /// Must be called from inside a tokio runtime.
    pub fn submit(&mut self, text: &str) -> Option<MessageId> {
        if text.trim().is_empty() {
            debug!(event_name = "chat.message.rejected", reason = "empty", "ignored blank message");
            return None;
        }

        self.prune_finished();

        let id = next_id(Sender::User);
        lock(&self.transcript).push(ChatMessage::new(id.0.clone(), text, Sender::User));
        debug!(
            event_name = "chat.message.recorded",
            message_id = %id.as_str(),
            "visitor message recorded"
        );

        let handle = tokio::spawn(deliver_reply(
            Arc::clone(&self.responder),
            Arc::clone(&self.transcript),
            id.clone(),
            text.to_string(),
            self.reply_delay,
        ));
        debug!(
            event_name = "chat.reply.scheduled",
            message_id = %id.as_str(),
            delay_ms = self.reply_delay.as_millis() as u64,
            "reply scheduled"
        );

        self.pending.insert(id.clone(), handle);
        Some(id)
    }

    /// Aborts the reply scheduled for `message_id`. Returns false when no
    /// reply was pending for it.
    pub fn cancel(&mut self, message_id: &MessageId) -> bool {
        match self.pending.remove(message_id) {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                info!(
                    event_name = "chat.reply.cancelled",
                    message_id = %message_id.as_str(),
                    "pending reply cancelled"
                );
                true
            }
            _ => false,
        }
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.values().filter(|handle| !handle.is_finished()).count()
    }

    /// Waits until every reply scheduled so far has landed.
    pub async fn wait_for_replies(&mut self) {
        let handles: Vec<(MessageId, JoinHandle<()>)> = self.pending.drain().collect();
        for (message_id, handle) in handles {
            if let Err(error) = handle.await {
                if !error.is_cancelled() {
                    warn!(
                        event_name = "chat.reply.failed",
                        message_id = %message_id.as_str(),
                        error = %error,
                        "reply task did not complete"
                    );
                }
            }
        }
    }

    pub fn shutdown(&mut self) {
        let mut aborted = 0_usize;
        for (_, handle) in self.pending.drain() {
            if !handle.is_finished() {
                handle.abort();
                aborted += 1;
            }
        }
        if aborted > 0 {
            info!(event_name = "chat.session.shutdown", aborted, "pending replies aborted");
        }
    }

    fn prune_finished(&mut self) {
        self.pending.retain(|_, handle| !handle.is_finished());
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn deliver_reply(
    responder: Arc<dyn ChatResponder>,
    transcript: Transcript,
    message_id: MessageId,
    text: String,
    delay: Duration,
) {
    tokio::time::sleep(delay).await;

    match responder.respond(&text).await {
        Ok(reply) => {
            let bot_id = next_id(Sender::Bot);
            debug!(
                event_name = "chat.reply.delivered",
                message_id = %message_id.as_str(),
                reply_id = %bot_id.as_str(),
                "reply delivered"
            );
            lock(&transcript).push(ChatMessage::new(bot_id.0, reply, Sender::Bot));
        }
        Err(error) => {
            warn!(
                event_name = "chat.reply.failed",
                message_id = %message_id.as_str(),
                error = %error,
                "responder failed; no reply recorded"
            );
        }
    }
}

fn next_id(sender: Sender) -> MessageId {
    let prefix = match sender {
        Sender::User => "user",
        Sender::Bot => "bot",
    };
    MessageId(format!("{prefix}-{}", Uuid::new_v4()))
}

fn lock(transcript: &Transcript) -> std::sync::MutexGuard<'_, Vec<ChatMessage>> {
    transcript.lock().unwrap_or_else(PoisonError::into_inner)
}
