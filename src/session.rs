//! Transcript state for the bot simulation panel.
//!
//! The submit flow lives here as a plain state machine so it can be
//! exercised without a UI: `begin` validates and records the user turn,
//! the caller performs the external call, and `finish` records the
//! outcome. One turn may be outstanding at a time; overlapping attempts
//! are dropped, not queued.

use crate::ai::{ChatError, ChatResult};
use crate::types::{ChatMessage, Role};
use time::OffsetDateTime;

/// Greeting the transcript opens with.
pub const SEED_MESSAGE: &str = "Bot Simulation Online. Send /start to begin.";

/// Reply shown when the service answers with no text.
pub const REPLY_FALLBACK: &str = "Bot is offline.";

/// Reply shown when the call fails outright.
pub const REPLY_ERROR: &str = "Error communicating with simulated backend.";

/// Work handed back by [`ChatSession::begin`]: the text to send and the
/// transcript as it stood before the user turn was recorded.
pub struct SubmitJob {
    pub input: String,
    pub history: Vec<ChatMessage>,
}

/// Append-only message log plus the single-flight flag.
#[derive(Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    busy: bool,
    next_id: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            busy: false,
            next_id: 0,
        };
        session.push(Role::Bot, SEED_MESSAGE.to_string());
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a reply is outstanding. Drives both the typing indicator
    /// and the single-flight guard.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Start a submission. Returns `None` and changes nothing for blank
    /// input or while a previous turn is still in flight; otherwise records
    /// the user turn verbatim, flags the session busy, and hands back the
    /// job to run.
    pub fn begin(&mut self, input: &str) -> Option<SubmitJob> {
        if input.trim().is_empty() || self.busy {
            return None;
        }
        let history = self.messages.clone();
        self.push(Role::User, input.to_string());
        self.busy = true;
        Some(SubmitJob {
            input: input.to_string(),
            history,
        })
    }

    /// Settle the in-flight turn. Failures collapse to fixed chat text here
    /// so they never travel further than the transcript.
    pub fn finish(&mut self, outcome: ChatResult<String>) {
        let text = match outcome {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) | Err(ChatError::EmptyReply) => REPLY_FALLBACK.to_string(),
            Err(_) => REPLY_ERROR.to_string(),
        };
        self.push(Role::Bot, text);
        self.busy = false;
    }

    fn push(&mut self, role: Role, text: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            text,
            timestamp: OffsetDateTime::now_utc(),
        });
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
