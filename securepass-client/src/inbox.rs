// securepass-client/src/inbox.rs
use anyhow::{anyhow, Result};
use mailgen::EmailMessage;
use rand::Rng;
use uuid::Uuid;

/// In-memory simulated inbox for one generated address.
///
/// Holds the current message batch and the read/delete bookkeeping.
/// Nothing is persisted; a refresh discards the previous batch entirely.
#[derive(Debug)]
pub struct Inbox {
    address: String,
    messages: Vec<EmailMessage>,
}

impl Inbox {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            messages: Vec::new(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn messages(&self) -> &[EmailMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.read).count()
    }

    pub fn get(&self, id: Uuid) -> Option<&EmailMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Replace the contents with a freshly synthesized batch, newest first.
    pub fn refresh(&mut self, count: usize) -> &[EmailMessage] {
        self.messages = mailgen::generate_messages(&self.address, count);
        &self.messages
    }

    /// Like [`Inbox::refresh`], drawing from the supplied random source.
    pub fn refresh_with_rng<R: Rng>(&mut self, rng: &mut R, count: usize) -> &[EmailMessage] {
        self.messages = mailgen::generate_messages_with_rng(rng, &self.address, count);
        &self.messages
    }

    /// Mark the message read and return it.
    pub fn open(&mut self, id: Uuid) -> Result<&EmailMessage> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| anyhow!("Message not found: {}", id))?;
        message.read = true;
        Ok(message)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        if self.messages.len() == before {
            return Err(anyhow!("Message not found: {}", id));
        }
        Ok(())
    }
}
