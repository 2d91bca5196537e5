use chrono::{DateTime, Utc};
use serde::Serialize;

use super::bridge::{greeting, AssistantReply};
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

/// Handle for one outstanding question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTicket {
    pub sequence: u64,
    pub prompt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyDisposition {
    Accepted,
    /// A newer question was issued (or this one was already answered).
    Stale { latest: u64 },
}

/// Chat panel state for one visitor. Each question gets the next sequence
/// number; only the reply to the latest question is kept.
#[derive(Debug, Clone)]
pub struct ChatSession {
    language: Language,
    transcript: Vec<ChatMessage>,
    last_issued: u64,
    pending: Option<u64>,
}

impl ChatSession {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            transcript: vec![ChatMessage {
                role: ChatRole::Assistant,
                text: greeting(language).to_string(),
                sent_at: Utc::now(),
                fallback: false,
            }],
            last_issued: 0,
            pending: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Applies to questions asked from now on; the transcript is left as is.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Drives the loading indicator.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn latest_sequence(&self) -> u64 {
        self.last_issued
    }

    /// Records the question and issues a ticket; blank input is ignored.
    pub fn submit(&mut self, input: &str) -> Option<ChatTicket> {
        let prompt = input.trim();
        if prompt.is_empty() {
            return None;
        }

        self.last_issued += 1;
        self.pending = Some(self.last_issued);
        self.transcript.push(ChatMessage {
            role: ChatRole::User,
            text: prompt.to_string(),
            sent_at: Utc::now(),
            fallback: false,
        });

        Some(ChatTicket {
            sequence: self.last_issued,
            prompt: prompt.to_string(),
        })
    }

    pub fn resolve(&mut self, sequence: u64, reply: AssistantReply) -> ReplyDisposition {
        if self.pending != Some(sequence) {
            return ReplyDisposition::Stale {
                latest: self.last_issued,
            };
        }

        self.pending = None;
        self.transcript.push(ChatMessage {
            role: ChatRole::Assistant,
            text: reply.text,
            sent_at: Utc::now(),
            fallback: reply.fallback,
        });
        ReplyDisposition::Accepted
    }
}
