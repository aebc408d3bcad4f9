// securepass-cli/src/commands/inbox.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use console::style;
use dialoguer::{Confirm, Select};
use mailgen::EmailMessage;
use securepass_client::{Config, Session};
use serde_json::json;

use crate::output::{
    print_error, print_header, print_response, print_success, stdout_is_terminal, ErrorResponse,
    ExitCode, Response,
};

#[derive(Args, Clone, Debug)]
pub struct InboxArgs {
    /// Address to open; a random one is generated when omitted
    pub address: Option<String>,
    /// Messages per refresh [default: from config]
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
    /// Skip the simulated network delay
    #[arg(long)]
    pub no_delay: bool,
}

pub fn handle_inbox(args: InboxArgs) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(count) = args.count {
        config.inbox.message_count = count;
    }
    if args.no_delay {
        config.inbox.simulate_latency_ms = 0;
    }

    if let Some(address) = &args.address {
        if !address.contains('@') {
            let message = format!("Not an email address: {}", address);
            if stdout_is_terminal() {
                print_error(&message);
            } else {
                print_response(&Response::<()>::error(ErrorResponse::validation_failed(
                    message,
                )))?;
            }
            std::process::exit(ExitCode::PermanentError.code());
        }
    }

    let mut session = match args.address {
        Some(address) => Session::with_address(config, address),
        None => Session::new(config),
    };

    if !stdout_is_terminal() {
        refresh_with_delay(&mut session, false);
        let resp = Response::ok(json!({
            "address": session.address(),
            "messages": session.inbox().messages(),
        }));
        print_response(&resp)?;
        return Ok(());
    }

    refresh_with_delay(&mut session, true);
    browse(&mut session)
}

/// Apply the configured display latency, then refresh. The sleep lives
/// here in the presentation layer; the generators never block.
fn refresh_with_delay(session: &mut Session, announce: bool) {
    let delay = session.simulated_latency();
    if announce {
        println!("{}", style("Checking for new messages...").dim());
    }
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
    session.refresh_inbox();
}

fn browse(session: &mut Session) -> Result<()> {
    loop {
        println!();
        print_header(
            "Inbox",
            &format!(
                "{} ({} unread)",
                session.address(),
                session.inbox().unread_count()
            ),
        );

        let mut items: Vec<String> = session
            .inbox()
            .messages()
            .iter()
            .map(message_line)
            .collect();
        let message_count = items.len();
        items.push("Refresh".to_string());
        items.push("New address".to_string());
        items.push("Quit".to_string());

        let selection = Select::new()
            .with_prompt("Select")
            .items(&items)
            .default(0)
            .interact()?;

        if selection < message_count {
            let id = session.inbox().messages()[selection].id;
            let message = session.inbox_mut().open(id)?.clone();
            show_message(&message);

            let delete = Confirm::new()
                .with_prompt("Delete this message?")
                .default(false)
                .interact()?;
            if delete {
                session.inbox_mut().delete(id)?;
                print_success("Message deleted");
            }
        } else {
            match selection - message_count {
                0 => refresh_with_delay(session, true),
                1 => {
                    session.rotate_address();
                    print_success(&format!("New address: {}", session.address()));
                    refresh_with_delay(session, true);
                }
                _ => break,
            }
        }
    }
    Ok(())
}

fn message_line(message: &EmailMessage) -> String {
    let line = format!(
        "{:<28} {} ({})",
        message.from,
        message.subject,
        format_relative(message.date)
    );
    if message.read {
        format!("  {}", line)
    } else {
        format!("{} {}", style("●").cyan(), style(line).bold())
    }
}

fn show_message(message: &EmailMessage) {
    println!();
    print_header("From", &message.from);
    print_header("Subject", &message.subject);
    print_header(
        "Date",
        &message.date.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    println!();
    println!("{}", message.content);
    println!();
}

/// Compact relative timestamp for list rows, e.g. "3h ago".
fn format_relative(date: DateTime<Utc>) -> String {
    let minutes = (Utc::now() - date).num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else {
        format!("{}h ago", minutes / 60)
    }
}
