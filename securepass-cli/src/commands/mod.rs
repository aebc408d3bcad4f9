// securepass-cli/src/commands/mod.rs
pub mod config;
pub mod email;
pub mod inbox;
pub mod password;

pub use config::{handle_config, ConfigCommands};
pub use email::{handle_email, EmailArgs};
pub use inbox::{handle_inbox, InboxArgs};
pub use password::{handle_password, PasswordArgs};
