//! CLI argument parsing and command dispatch

mod common;

pub use common::OutputFormat;

use clap::Parser;
use log::debug;

use crate::commands::args::wants_help;
use crate::commands::{CommandRegistry, Context};
use crate::config::defaults;
use crate::coverage::legacy_namespace;

/// Command-per-operation CLI for HCP Terraform / Terraform Enterprise
#[derive(Parser, Debug)]
#[command(name = "tfectl")]
#[command(version)]
#[command(about = "Command-per-operation CLI for HCP Terraform / Terraform Enterprise", long_about = None)]
#[command(after_help = "Run 'tfectl' without arguments to list commands, \
                        or 'tfectl <command> -help' for command flags.")]
pub struct Cli {
    /// API address, e.g. https://app.terraform.io (default: $TFE_ADDRESS, then credentials file)
    #[arg(long)]
    pub address: Option<String>,

    /// API token (overrides env vars and credentials file)
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner, no interactive prompts
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Omit the header row in table and CSV output
    #[arg(long, default_value_t = false)]
    pub no_header: bool,

    /// Command path followed by its flags, e.g. `team access create -team-id ...`
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Global options handed to every command
    pub fn context(&self) -> Context {
        Context {
            address: self.address.clone(),
            token: self.token.clone(),
            batch: self.batch,
            no_header: self.no_header,
        }
    }
}

/// Top-level listing of root commands and namespaces
pub fn root_help(registry: &CommandRegistry) -> String {
    let roots = registry.roots();
    let width = roots.iter().map(|name| name.len()).max().unwrap_or(0);

    let mut help = format!(
        "Usage: {} [global options] <command> [subcommand...] [flags]\n\nCommands:\n",
        defaults::BIN_NAME
    );
    for name in roots {
        let synopsis = registry
            .create(name)
            .map(|command| command.synopsis())
            .unwrap_or_default();
        help.push_str(&format!("  {:<width$}  {}\n", name, synopsis, width = width));
    }
    help.push_str(&format!(
        "\nRun '{} <command> -help' for more information on a command.\n",
        defaults::BIN_NAME
    ));
    help
}

/// Resolve the command path in `args` and run it, returning the exit code
pub async fn dispatch(registry: &CommandRegistry, ctx: &Context, args: &[String]) -> i32 {
    if args.is_empty() {
        println!("{}", root_help(registry));
        return 0;
    }

    let Some((name, consumed)) = registry.longest_match(args) else {
        if wants_help(&args[..1]) {
            println!("{}", root_help(registry));
            return 0;
        }
        eprintln!("Error: unknown command '{}'\n", args[0]);
        if let Some(canonical) = legacy_namespace(&args[0]) {
            eprintln!(
                "Hint: '{}' is now '{} {}'\n",
                args[0],
                defaults::BIN_NAME,
                canonical
            );
        }
        eprintln!("{}", root_help(registry));
        return 1;
    };
    debug!("Resolved command '{}' ({} word(s))", name, consumed);

    let command = match registry.create(name) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let rest = &args[consumed..];
    if wants_help(rest) {
        println!("{}", command.help());
        return 0;
    }
    command.run(ctx, rest).await
}
