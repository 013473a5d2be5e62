//! Mock conversations for the chat tab.

use std::collections::HashMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, ShellError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    Group,
    Direct,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub kind: ConversationKind,
    pub name: String,
    pub last_message: String,
    /// Relative label such as "2m ago".
    pub timestamp: String,
    pub unread: u32,
    pub avatar: String,
    /// Member count; only set for group conversations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub content: String,
    pub sent_at: NaiveTime,
    pub is_own: bool,
}

/// Conversation list, message threads and the open conversation.
#[derive(Debug, Clone, Default)]
pub struct ChatInbox {
    conversations: Vec<Conversation>,
    messages: HashMap<String, Vec<ChatMessage>>,
    active: Option<String>,
}

impl ChatInbox {
    /// The mock inbox. `own_name` labels the user's own messages.
    pub fn sample(own_name: &str) -> Self {
        let conversation = |id: &str, kind, name: &str, last: &str, ago: &str, unread, avatar: &str, members| Conversation {
            id: id.to_string(),
            kind,
            name: name.to_string(),
            last_message: last.to_string(),
            timestamp: ago.to_string(),
            unread,
            avatar: avatar.to_string(),
            members,
        };
        let message = |id: &str, sender: &str, content: &str, (h, m): (u32, u32), is_own| ChatMessage {
            id: id.to_string(),
            sender: sender.to_string(),
            content: content.to_string(),
            sent_at: NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default(),
            is_own,
        };

        let conversations = vec![
            conversation("1", ConversationKind::Group, "Travel Buddies", "Anyone up for hiking this weekend?", "2m ago", 2, "🏔️", Some(5)),
            conversation("2", ConversationKind::Direct, "Sarah M.", "The photos from our trip look amazing!", "1h ago", 0, "👩‍💼", None),
            conversation("3", ConversationKind::Group, "Europe Explorers", "Check out this restaurant in Paris", "3h ago", 1, "🇪🇺", Some(12)),
            conversation("4", ConversationKind::Direct, "John D.", "Thanks for the route suggestions!", "1d ago", 0, "👨‍💻", None),
        ];

        let thread = vec![
            message("1", "Sarah M.", "Hey! How was your trip to the mountains?", (10, 30), false),
            message("2", own_name, "It was incredible! The views were breathtaking. I got some amazing photos.", (10, 32), true),
            message("3", "Sarah M.", "I can't wait to see them! We should plan our next adventure soon.", (10, 35), false),
        ];

        Self {
            conversations,
            messages: HashMap::from([("2".to_string(), thread)]),
            active: None,
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Conversations whose name contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Conversation> {
        let needle = query.trim().to_lowercase();
        self.conversations
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn total_unread(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread).sum()
    }

    /// Open a conversation and mark it read.
    pub fn open(&mut self, id: &str) -> Option<&Conversation> {
        let conversation = self.conversations.iter_mut().find(|c| c.id == id)?;
        conversation.unread = 0;
        self.active = Some(conversation.id.clone());
        debug!("Opened conversation {}", conversation.name);
        Some(&*conversation)
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&Conversation> {
        let id = self.active.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn messages(&self, id: &str) -> &[ChatMessage] {
        self.messages.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Send `text` to the open conversation. Blank messages are rejected.
    pub fn send(&mut self, sender: &str, text: &str, at: NaiveTime) -> Result<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ShellError::InvalidMessage("message is empty".to_string()));
        }
        let id = self
            .active
            .clone()
            .ok_or_else(|| ShellError::InvalidMessage("no conversation is open".to_string()))?;

        if let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == id) {
            conversation.last_message = text.to_string();
            conversation.timestamp = "now".to_string();
        }

        let thread = self.messages.entry(id.clone()).or_default();
        thread.push(ChatMessage {
            id: (thread.len() + 1).to_string(),
            sender: sender.to_string(),
            content: text.to_string(),
            sent_at: at,
            is_own: true,
        });
        info!("Sent message to conversation {}", id);

        Ok(&thread[thread.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_sample_inbox() {
        let inbox = ChatInbox::sample("meera");
        assert_eq!(inbox.conversations().len(), 4);
        assert_eq!(inbox.total_unread(), 3);
        assert_eq!(inbox.conversations()[0].members, Some(5));
        assert_eq!(inbox.messages("2")[1].sender, "meera");
        assert!(inbox.messages("4").is_empty());
    }

    #[test]
    fn test_search_ignores_case() {
        let inbox = ChatInbox::sample("You");
        let names: Vec<_> = inbox.search("EXPLOR").into_iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Europe Explorers"]);
        assert_eq!(inbox.search("").len(), 4);
        assert!(inbox.search("zzz").is_empty());
    }

    #[test]
    fn test_open_marks_read() {
        let mut inbox = ChatInbox::sample("You");
        assert_eq!(inbox.open("1").unwrap().unread, 0);
        assert_eq!(inbox.total_unread(), 1);
        assert_eq!(inbox.active().unwrap().name, "Travel Buddies");
        assert!(inbox.open("missing").is_none());
    }

    #[test]
    fn test_send_rejects_blank_and_closed() {
        let mut inbox = ChatInbox::sample("You");
        assert!(inbox.send("You", "hello", noon()).is_err());

        inbox.open("2");
        assert!(inbox.send("You", "   ", noon()).is_err());
        assert_eq!(inbox.messages("2").len(), 3);
    }

    #[test]
    fn test_send_appends_and_updates_preview() {
        let mut inbox = ChatInbox::sample("You");
        inbox.open("4");
        let sent = inbox.send("You", "  See you in Hampi ", noon()).unwrap();
        assert_eq!(sent.content, "See you in Hampi");
        assert!(sent.is_own);

        assert_eq!(inbox.messages("4").len(), 1);
        let john = inbox.active().unwrap();
        assert_eq!(john.last_message, "See you in Hampi");
        assert_eq!(john.timestamp, "now");

        inbox.close();
        assert!(inbox.active().is_none());
    }
}
