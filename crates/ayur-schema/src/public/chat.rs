//! Assistant chat sessions and their messages.

use crate::table::{define_table, Public};
use crate::types::Json;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Role tag of a message written by the user.
pub const ROLE_USER: &str = "user";
/// Role tag of a message written by the assistant.
pub const ROLE_ASSISTANT: &str = "assistant";

define_table! {
    /// A conversation owned by one user.
    pub struct ChatSessions in Public as "chat_sessions" {
        row: ChatSessionRow,
        insert: ChatSessionInsert,
        update: ChatSessionUpdate,
        primary_key: "id",
        required {
            user_id: Uuid,
        }
        defaulted {
            id: Uuid,
            context_type: String,
            created_at: DateTime<Utc>,
            title: String,
            updated_at: DateTime<Utc>,
        }
        nullable {
            context_id: String,
        }
        relationships [
            "chat_sessions_user_id_fkey": "user_id" => "profiles"."id",
        ]
    }
}

define_table! {
    /// One message in a chat session.
    pub struct ChatMessages in Public as "chat_messages" {
        row: ChatMessageRow,
        insert: ChatMessageInsert,
        update: ChatMessageUpdate,
        primary_key: "id",
        required {
            content: String,
            role: String,
            session_id: Uuid,
        }
        defaulted {
            id: Uuid,
            created_at: DateTime<Utc>,
        }
        nullable {
            metadata: Json,
        }
        relationships [
            "chat_messages_session_id_fkey": "session_id" => "chat_sessions"."id",
        ]
    }
}

impl ChatMessageInsert {
    /// A message from the user.
    pub fn from_user(session_id: Uuid, content: impl Into<String>) -> Self {
        Self::new(content.into(), ROLE_USER.to_string(), session_id)
    }

    /// A message from the assistant.
    pub fn from_assistant(session_id: Uuid, content: impl Into<String>) -> Self {
        Self::new(content.into(), ROLE_ASSISTANT.to_string(), session_id)
    }
}
