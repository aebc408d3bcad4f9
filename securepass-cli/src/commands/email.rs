// securepass-cli/src/commands/email.rs
use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::output::{print_response, stdout_is_terminal, Response};

#[derive(Args, Clone, Debug)]
pub struct EmailArgs {
    /// Number of addresses to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,
}

pub fn handle_email(args: EmailArgs) -> Result<()> {
    let addresses: Vec<String> = (0..args.count)
        .map(|_| mailgen::generate_address())
        .collect();

    if stdout_is_terminal() {
        for address in &addresses {
            println!("{}", address);
        }
    } else {
        let resp = Response::ok(json!({ "addresses": addresses }));
        print_response(&resp)?;
    }

    Ok(())
}
