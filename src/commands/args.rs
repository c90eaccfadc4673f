//! Flag parsing for API commands
//!
//! Commands take Go-style single-dash long flags (`-organization=acme`,
//! `-auto-apply`). They are rewritten to clap's double-dash form before parsing.

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches};
use std::path::PathBuf;

use super::spec::{CommandSpec, FlagKind, FlagSpec};
use crate::cli::OutputFormat;
use crate::config::{defaults, flags};

/// Flags every API command accepts
pub const OUTPUT_FLAG: &str = "output";
pub const PAGE_FLAG: &str = "page";
pub const PAGE_SIZE_FLAG: &str = "page-size";

/// Rewrite `-name` / `-name=value` into `--name` / `--name=value`.
///
/// Single-character flags (`-h`), values after `--` and bare `-` are left alone.
/// The token after a value-taking flag is its value and is never rewritten,
/// so `-description -draft-` passes `-draft-` through. `is_switch` names the
/// flags that take no separate value.
pub fn normalize_args<F>(args: &[String], is_switch: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut out = Vec::with_capacity(args.len());
    let mut passthrough = false;
    let mut value_next = false;
    for arg in args {
        if value_next {
            value_next = false;
            out.push(arg.clone());
            continue;
        }
        if passthrough || arg == "--" {
            passthrough = true;
            out.push(arg.clone());
            continue;
        }
        let normalized = if is_single_dash_long(arg) {
            format!("-{}", arg)
        } else {
            arg.clone()
        };
        if let Some(name) = normalized.strip_prefix("--") {
            value_next = !name.contains('=') && name != "help" && !is_switch(name);
        }
        out.push(normalized);
    }
    out
}

fn is_single_dash_long(arg: &str) -> bool {
    arg.starts_with('-')
        && !arg.starts_with("--")
        && arg
            .split('=')
            .next()
            .map(|name| name.len() > 2)
            .unwrap_or(false)
        && !arg[1..].starts_with(|c: char| c.is_ascii_digit())
}

/// Flags of `spec` that never consume the following token
pub fn is_switch(spec: &CommandSpec, name: &str) -> bool {
    spec.find_flag(name)
        .is_some_and(|flag| flag.kind == FlagKind::Bool)
}

/// True when the arguments ask for help
pub fn wants_help(args: &[String]) -> bool {
    args.iter()
        .take_while(|a| a.as_str() != "--")
        .any(|a| matches!(a.as_str(), "-h" | "-help" | "--help"))
}

/// Build the clap parser for a spec
pub fn clap_command(spec: &CommandSpec) -> clap::Command {
    let mut cmd = clap::Command::new(spec.name)
        .bin_name(format!("{} {}", defaults::BIN_NAME, spec.name))
        .about(spec.synopsis)
        .no_binary_name(true)
        .disable_version_flag(true);

    for flag in &spec.flags {
        cmd = cmd.arg(flag_arg(flag));
    }

    if spec.paged {
        cmd = cmd
            .arg(
                Arg::new(PAGE_FLAG)
                    .long(PAGE_FLAG)
                    .value_name("N")
                    .help("Page number to fetch")
                    .value_parser(clap::value_parser!(u32).range(1..)),
            )
            .arg(
                Arg::new(PAGE_SIZE_FLAG)
                    .long(PAGE_SIZE_FLAG)
                    .value_name("N")
                    .help("Number of items per page")
                    .value_parser(clap::value_parser!(u32).range(1..=100)),
            );
    }

    cmd.arg(
        Arg::new(OUTPUT_FLAG)
            .long(OUTPUT_FLAG)
            .value_name("FORMAT")
            .help("Output format")
            .value_parser(clap::value_parser!(OutputFormat))
            .default_value("table"),
    )
}

fn flag_arg(flag: &FlagSpec) -> Arg {
    let mut arg = Arg::new(flag.name)
        .long(flag.name)
        .help(flag.help)
        .required(flag.required);

    arg = match &flag.kind {
        FlagKind::String => arg.value_name("VALUE"),
        FlagKind::Int => arg
            .value_name("N")
            .value_parser(clap::value_parser!(i64)),
        FlagKind::Bool => arg
            .value_name("BOOL")
            .value_parser(clap::value_parser!(bool))
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true"),
        FlagKind::Enum(values) => arg
            .value_name("VALUE")
            .value_parser(PossibleValuesParser::new(values.iter().copied())),
        FlagKind::Date => arg.value_name("DATE").value_parser(parse_date),
        FlagKind::List => arg
            .value_name("VALUES")
            .value_delimiter(',')
            .action(ArgAction::Append),
        FlagKind::StateFile => arg
            .value_name("PATH")
            .value_parser(clap::value_parser!(PathBuf)),
    };

    if flag.kind != FlagKind::Bool {
        arg = arg.allow_hyphen_values(true);
    }
    if let Some(default) = flag.default {
        arg = arg.default_value(default);
    }
    if flag.name == "organization" {
        arg = arg.env(flags::ORGANIZATION_ENV_VAR);
    }
    arg
}

/// Accept RFC 3339 timestamps or plain dates (midnight UTC)
pub fn parse_date(value: &str) -> std::result::Result<String, String> {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(ts.to_utc().to_rfc3339_opts(chrono::SecondsFormat::Secs, true));
    }
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| {
            d.and_time(chrono::NaiveTime::MIN)
                .and_utc()
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        })
        .map_err(|_| {
            format!(
                "'{}' is not a date; use RFC 3339 (2026-01-31T12:00:00Z) or YYYY-MM-DD",
                value
            )
        })
}

/// Text form of a parsed flag, as used in templates and query strings
pub fn flag_text(matches: &ArgMatches, flag: &FlagSpec) -> Option<String> {
    match flag.kind {
        FlagKind::String | FlagKind::Enum(_) | FlagKind::Date => {
            matches.get_one::<String>(flag.name).cloned()
        }
        FlagKind::Int => matches.get_one::<i64>(flag.name).map(|v| v.to_string()),
        FlagKind::Bool => matches.get_one::<bool>(flag.name).map(|v| v.to_string()),
        FlagKind::List => matches
            .get_many::<String>(flag.name)
            .map(|vals| vals.cloned().collect::<Vec<_>>().join(",")),
        FlagKind::StateFile => matches
            .get_one::<PathBuf>(flag.name)
            .map(|p| p.display().to_string()),
    }
}

/// JSON form of a parsed flag, as sent in attributes
pub fn flag_json(matches: &ArgMatches, flag: &FlagSpec) -> Option<serde_json::Value> {
    use serde_json::Value;
    match flag.kind {
        FlagKind::Int => matches.get_one::<i64>(flag.name).map(|v| Value::from(*v)),
        FlagKind::Bool => matches.get_one::<bool>(flag.name).map(|v| Value::Bool(*v)),
        FlagKind::List => flag_list(matches, flag).map(|vals| {
            Value::Array(vals.into_iter().map(Value::String).collect())
        }),
        _ => flag_text(matches, flag).map(Value::String),
    }
}

/// Values of a list flag, empty entries dropped
pub fn flag_list(matches: &ArgMatches, flag: &FlagSpec) -> Option<Vec<String>> {
    matches.get_many::<String>(flag.name).map(|vals| {
        vals.filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().to_string())
            .collect()
    })
}
