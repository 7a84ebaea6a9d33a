//! Chat widget conversation state.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use wire::{CONNECTION_ERROR_MESSAGE, ChatReply, confidence_percent};

pub const GREETING: &str =
    "Halo! 👋 Saya adalah Chatbot PMB Universitas Katolik De La Salle Manado. Ada yang bisa saya bantu tentang PMB?";

/// Suggested first questions, shown until the visitor sends something.
pub const SUGGESTIONS: [&str; 4] = ["Apa itu PMB?", "Jadwal pendaftaran", "Biaya pendaftaran", "Persyaratan"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// `intent • NN%` line under bot replies.
    pub meta: Option<String>,
    pub is_error: bool,
}

#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub busy: bool,
    next_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        let mut state = Self { messages: Vec::new(), busy: false, next_id: 1 };
        state.push(Sender::Bot, GREETING.to_owned(), None, false);
        state
    }
}

impl ChatState {
    /// Suggestions stay visible while the greeting is the only message.
    pub fn show_suggestions(&self) -> bool {
        self.messages.len() == 1
    }

    /// Accept typed input for sending.
    ///
    /// Returns the trimmed message, or `None` when it is blank or a reply is
    /// still pending. On success the user bubble is appended and the widget
    /// turns busy.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        let message = input.trim();
        if message.is_empty() || self.busy {
            return None;
        }
        self.push(Sender::User, message.to_owned(), None, false);
        self.busy = true;
        Some(message.to_owned())
    }

    pub fn receive(&mut self, reply: ChatReply) {
        let meta = meta_label(reply.intent.as_deref(), reply.confidence);
        self.push(Sender::Bot, reply.reply, meta, false);
        self.busy = false;
    }

    /// Any failure shows the same connection notice.
    pub fn fail(&mut self) {
        self.push(Sender::Bot, CONNECTION_ERROR_MESSAGE.to_owned(), None, true);
        self.busy = false;
    }

    fn push(&mut self, sender: Sender, text: String, meta: Option<String>, is_error: bool) {
        self.messages.push(ChatMessage { id: self.next_id, sender, text, meta, is_error });
        self.next_id += 1;
    }
}

/// `"<intent> • <NN>%"`, only when the reply names an intent.
pub fn meta_label(intent: Option<&str>, confidence: Option<f64>) -> Option<String> {
    let intent = intent.filter(|i| !i.is_empty())?;
    Some(format!("{intent} • {}%", confidence_percent(confidence)))
}
