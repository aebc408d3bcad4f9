// securepass-client/src/session.rs
use mailgen::EmailMessage;
use std::time::Duration;

use crate::config::Config;
use crate::inbox::Inbox;

/// One demo session: the current generated address plus its simulated
/// inbox, driven by the loaded configuration.
pub struct Session {
    config: Config,
    inbox: Inbox,
}

impl Session {
    /// Start a session on a fresh random address.
    pub fn new(config: Config) -> Self {
        let address = mailgen::generate_address();
        Self {
            config,
            inbox: Inbox::new(address),
        }
    }

    /// Start a session on an explicit address.
    pub fn with_address(config: Config, address: impl Into<String>) -> Self {
        Self {
            config,
            inbox: Inbox::new(address),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn address(&self) -> &str {
        self.inbox.address()
    }

    pub fn inbox(&self) -> &Inbox {
        &self.inbox
    }

    pub fn inbox_mut(&mut self) -> &mut Inbox {
        &mut self.inbox
    }

    /// Discard the inbox and switch to a fresh random address.
    pub fn rotate_address(&mut self) -> &str {
        self.inbox = Inbox::new(mailgen::generate_address());
        self.inbox.address()
    }

    /// Generate a password from the configured defaults.
    pub fn generate_password(&self) -> String {
        mailgen::generate_password(
            self.config.generator.password_length,
            self.config.generator.classes,
        )
    }

    /// Fill the inbox with the configured number of messages.
    pub fn refresh_inbox(&mut self) -> &[EmailMessage] {
        let count = self.config.inbox.message_count;
        self.inbox.refresh(count)
    }

    /// The configured display-side latency. Callers decide whether to
    /// sleep; generation itself never does.
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.config.inbox.simulate_latency_ms)
    }
}
