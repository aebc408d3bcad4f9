// mailgen/src/message.rs
use chrono::{Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::types::EmailMessage;

/// Fictitious services that messages appear to come from.
pub const SERVICE_NAMES: &[&str] = &[
    "Netflix",
    "Amazon",
    "PayPal",
    "Facebook",
    "Twitter",
    "Instagram",
    "LinkedIn",
    "Spotify",
    "Apple",
    "Google",
    "Microsoft",
    "Dropbox",
    "Slack",
    "GitHub",
    "Notion",
];

const SUBJECTS: &[&str] = &[
    "Confirm your account",
    "Welcome to our service",
    "Your account has been created",
    "Important security notice",
    "Verify your email address",
    "Your receipt",
    "Action required: Complete your registration",
    "Thank you for signing up",
    "Your verification code",
    "Password reset request",
];

const CONTENT_INTROS: &[&str] = &[
    "Thank you for signing up with us.",
    "Welcome to our platform!",
    "Your account has been successfully created.",
    "We received a request to verify this email address.",
    "Please confirm your email to complete registration.",
];

const CONTENT_MIDDLES: &[&str] = &[
    "To get started, please verify your email address by clicking the button below.",
    "Your security is important to us. Please confirm this action.",
    "Use the following code to complete the process:",
    "We're excited to have you join our community.",
    "Your account is almost ready to use.",
];

const CONTENT_ENDINGS: &[&str] = &[
    "If you did not request this, please ignore this email or contact support.",
    "This link will expire in 24 hours.",
    "For security reasons, this code will expire in 10 minutes.",
    "Please do not reply to this automated message.",
    "If you need assistance, please contact our support team.",
];

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Synthesize one notification email addressed to `recipient`.
///
/// The recipient selects the mailbox only; the body never embeds it.
/// The timestamp falls within the 24 hours before the call.
pub fn generate_message(recipient: &str) -> EmailMessage {
    generate_message_with_rng(&mut rand::thread_rng(), recipient)
}

/// Like [`generate_message`], drawing from the supplied random source.
pub fn generate_message_with_rng<R: Rng>(rng: &mut R, _recipient: &str) -> EmailMessage {
    let service = SERVICE_NAMES[rng.gen_range(0..SERVICE_NAMES.len())];
    let subject = SUBJECTS[rng.gen_range(0..SUBJECTS.len())];

    let intro = CONTENT_INTROS[rng.gen_range(0..CONTENT_INTROS.len())];
    let middle = CONTENT_MIDDLES[rng.gen_range(0..CONTENT_MIDDLES.len())];
    let ending = CONTENT_ENDINGS[rng.gen_range(0..CONTENT_ENDINGS.len())];

    let mut content = format!("Hello,\n\n{}\n\n{}\n\n", intro, middle);

    // Six-digit code, only when the body fragment asks for one.
    if middle.contains("code") {
        let code: u32 = rng.gen_range(100_000..1_000_000);
        content.push_str(&format!("CODE: {}\n\n", code));
    }

    content.push_str(&format!(
        "{}\n\nBest regards,\nThe {} Team",
        ending, service
    ));

    let offset = Duration::milliseconds(rng.gen_range(0..DAY_MILLIS));

    EmailMessage {
        id: Uuid::new_v4(),
        from: format!("noreply@{}.com", service.to_lowercase().replace(' ', "")),
        subject: subject.to_string(),
        content,
        date: Utc::now() - offset,
        read: false,
    }
}

/// Synthesize `count` messages for `recipient`, sorted newest first.
/// A `count` of zero yields an empty batch.
pub fn generate_messages(recipient: &str, count: usize) -> Vec<EmailMessage> {
    generate_messages_with_rng(&mut rand::thread_rng(), recipient, count)
}

/// Like [`generate_messages`], drawing from the supplied random source.
pub fn generate_messages_with_rng<R: Rng>(
    rng: &mut R,
    recipient: &str,
    count: usize,
) -> Vec<EmailMessage> {
    let mut messages: Vec<EmailMessage> = (0..count)
        .map(|_| generate_message_with_rng(rng, recipient))
        .collect();

    messages.sort_by(|a, b| b.date.cmp(&a.date));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const RECIPIENT: &str = "a@b.com";

    #[test]
    fn test_count_is_respected() {
        let mut rng = StdRng::seed_from_u64(20);
        assert!(generate_messages_with_rng(&mut rng, RECIPIENT, 0).is_empty());
        assert_eq!(generate_messages_with_rng(&mut rng, RECIPIENT, 5).len(), 5);
        assert_eq!(generate_messages_with_rng(&mut rng, RECIPIENT, 37).len(), 37);
    }

    #[test]
    fn test_ids_are_unique_across_batches() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut seen = HashSet::new();
        for _ in 0..3 {
            for message in generate_messages_with_rng(&mut rng, RECIPIENT, 20) {
                assert!(seen.insert(message.id));
            }
        }
    }

    #[test]
    fn test_sorted_newest_first() {
        let mut rng = StdRng::seed_from_u64(22);
        let messages = generate_messages_with_rng(&mut rng, RECIPIENT, 25);
        for pair in messages.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_dates_within_last_day() {
        let start = Utc::now();
        let mut rng = StdRng::seed_from_u64(23);
        let messages = generate_messages_with_rng(&mut rng, RECIPIENT, 25);
        let end = Utc::now();
        for message in &messages {
            assert!(message.date <= end);
            assert!(message.date > start - Duration::hours(24));
        }
    }

    #[test]
    fn test_messages_start_unread_with_service_sender() {
        let mut rng = StdRng::seed_from_u64(24);
        let services: HashSet<String> = SERVICE_NAMES
            .iter()
            .map(|s| s.to_lowercase().replace(' ', ""))
            .collect();
        for message in generate_messages_with_rng(&mut rng, RECIPIENT, 50) {
            assert!(!message.read);
            let service = message
                .from
                .strip_prefix("noreply@")
                .and_then(|rest| rest.strip_suffix(".com"))
                .expect("sender is noreply@<service>.com");
            assert!(services.contains(service));
        }
    }

    #[test]
    fn test_code_appears_only_when_requested() {
        let mut rng = StdRng::seed_from_u64(25);
        let mut with_code = 0;
        for _ in 0..200 {
            let message = generate_message_with_rng(&mut rng, RECIPIENT);
            let asks_for_code = message
                .content
                .contains("Use the following code to complete the process:");
            assert_eq!(message.content.contains("CODE: "), asks_for_code);
            if asks_for_code {
                with_code += 1;
                let code = message
                    .content
                    .split("CODE: ")
                    .nth(1)
                    .and_then(|rest| rest.split_whitespace().next())
                    .expect("code follows the marker");
                assert_eq!(code.len(), 6);
                assert!(code.chars().all(|c| c.is_ascii_digit()));
            }
        }
        // One middle fragment in five asks for a code; 200 draws cannot
        // plausibly miss it.
        assert!(with_code > 0);
    }

    #[test]
    fn test_content_structure() {
        let mut rng = StdRng::seed_from_u64(26);
        let message = generate_message_with_rng(&mut rng, RECIPIENT);
        assert!(message.content.starts_with("Hello,\n\n"));
        assert!(message.content.contains("Best regards,\nThe "));
        assert!(message.content.ends_with(" Team"));
    }
}
