// securepass-cli/src/main.rs
mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::{
    handle_config, handle_email, handle_inbox, handle_password, ConfigCommands, EmailArgs,
    InboxArgs, PasswordArgs,
};
use output::ExitCode;

#[derive(Parser)]
#[command(name = "securepass")]
#[command(about = "Demo passwords, throwaway addresses, and a simulated inbox", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random passwords
    Password(PasswordArgs),
    /// Generate random email addresses
    Email(EmailArgs),
    /// Browse a simulated inbox for a generated address
    Inbox(InboxArgs),
    /// Configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Password(args) => handle_password(args),
        Commands::Email(args) => handle_email(args),
        Commands::Inbox(args) => handle_inbox(args),
        Commands::Config(cmd) => handle_config(cmd),
    };

    if let Err(e) = result {
        output::print_error(&format!("{:#}", e));
        std::process::exit(ExitCode::PermanentError.code());
    }
}
