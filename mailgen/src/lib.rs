// mailgen/src/lib.rs
//! Randomized content generation for the SecurePass demo: passwords,
//! plausible throwaway addresses, and mock notification emails.
//!
//! All generators are pure, synchronous functions. Each has a
//! `*_with_rng` variant generic over [`rand::Rng`] so callers (and tests)
//! can inject a seeded source; the plain variants draw from
//! [`rand::thread_rng`].

pub mod address;
pub mod error;
pub mod message;
pub mod password;
pub mod types;

pub use address::{generate_address, generate_address_with_rng, DOMAINS};
pub use error::ParseClassesError;
pub use message::{
    generate_message, generate_message_with_rng, generate_messages, generate_messages_with_rng,
    SERVICE_NAMES,
};
pub use password::{
    generate_password, generate_password_with_rng, CharacterClasses, DIGIT_CHARS, LOWERCASE_CHARS,
    SYMBOL_CHARS, UPPERCASE_CHARS,
};
pub use types::EmailMessage;
