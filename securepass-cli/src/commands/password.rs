// securepass-cli/src/commands/password.rs
use anyhow::Result;
use clap::Args;
use mailgen::CharacterClasses;
use securepass_client::Config;
use serde_json::json;

use crate::output::{print_response, stdout_is_terminal, Response};

#[derive(Args, Clone, Debug)]
pub struct PasswordArgs {
    /// Password length (6-32) [default: from config]
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(6..=32))]
    pub length: Option<u8>,
    /// Character classes, comma separated: upper, lower, digits, symbols
    /// [default: from config]
    #[arg(short, long)]
    pub classes: Option<CharacterClasses>,
    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,
}

pub fn handle_password(args: PasswordArgs) -> Result<()> {
    let config = Config::load()?;
    let length = args
        .length
        .map(usize::from)
        .unwrap_or(config.generator.password_length);
    let classes = args.classes.unwrap_or(config.generator.classes);

    let passwords: Vec<String> = (0..args.count)
        .map(|_| mailgen::generate_password(length, classes))
        .collect();

    if stdout_is_terminal() {
        for password in &passwords {
            println!("{}", password);
        }
    } else {
        let resp = Response::ok(json!({
            "passwords": passwords,
            "length": length,
            "classes": classes.to_string(),
        }));
        print_response(&resp)?;
    }

    Ok(())
}
