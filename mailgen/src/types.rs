// mailgen/src/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A synthesized notification email for the simulated inbox.
///
/// Messages are value objects: the synthesizer never mutates one after
/// producing it. The `read` flag starts false and is flipped by whoever
/// holds the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub id: Uuid,
    pub from: String,
    pub subject: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub read: bool,
}
