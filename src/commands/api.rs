//! Generic command backed by a [`CommandSpec`]

use clap::error::ErrorKind;
use futures::future::BoxFuture;
use log::debug;
use serde_json::{json, Value};
use std::sync::Arc;

use super::args::{clap_command, is_switch, normalize_args, OUTPUT_FLAG};
use super::request::build_request;
use super::spec::{placeholders, BodyShape, CommandSpec, FlagTarget};
use super::{Command, Context};
use crate::cli::OutputFormat;
use crate::error::{Result, TfeError};
use crate::hcp::ApiResponse;
use crate::output::{output_response, RenderOptions};
use crate::ui::{clear_spinner, create_spinner};

/// A command that performs exactly one API call
pub struct ApiCommand {
    spec: Arc<CommandSpec>,
}

impl ApiCommand {
    /// Check the `CommandSpec` is self-consistent and wrap it
    pub fn new(spec: Arc<CommandSpec>) -> Result<Self> {
        check_spec(&spec)?;
        Ok(Self { spec })
    }

    async fn execute(&self, ctx: &Context, args: &[String]) -> Result<()> {
        let args = normalize_args(args, |name| is_switch(&self.spec, name));
        let matches = match clap_command(&self.spec).try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                println!("{}", self.help());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let request = build_request(&self.spec, &matches)?;
        let format = matches
            .get_one::<OutputFormat>(OUTPUT_FLAG)
            .copied()
            .unwrap_or_default();

        let client = ctx.client()?;
        let spinner = create_spinner(&format!("{}...", self.spec.synopsis), ctx.batch);
        let response = client.send(&request).await;
        clear_spinner(spinner);

        let response = match (self.spec.included, response?) {
            (Some(kind), ApiResponse::Document(doc)) => {
                ApiResponse::Document(included_of(&doc, kind))
            }
            (_, response) => response,
        };

        output_response(
            &response,
            &RenderOptions {
                columns: self.spec.columns,
                format,
                no_header: ctx.no_header,
                done_message: self.spec.done.unwrap_or("Done"),
            },
        );
        Ok(())
    }
}

impl Command for ApiCommand {
    fn synopsis(&self) -> String {
        self.spec.synopsis.to_string()
    }

    fn help(&self) -> String {
        clap_command(&self.spec).render_help().to_string()
    }

    fn run<'a>(&'a self, ctx: &'a Context, args: &'a [String]) -> BoxFuture<'a, i32> {
        Box::pin(async move {
            match self.execute(ctx, args).await {
                Ok(()) => 0,
                Err(e) => {
                    debug!("'{}' failed: {:?}", self.spec.name, e);
                    eprintln!("Error: {}", e);
                    1
                }
            }
        })
    }
}

/// Replace `data` with the `included` resources of one type
fn included_of(doc: &Value, kind: &str) -> Value {
    let items: Vec<Value> = doc
        .get("included")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|item| item.get("type").and_then(Value::as_str) == Some(kind))
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    json!({ "data": items })
}

/// A path placeholder needs a flag; list and templated types need their flags too
fn check_spec(spec: &CommandSpec) -> Result<()> {
    for name in placeholders(spec.path) {
        if spec.find_flag(name).is_none() {
            return Err(TfeError::Config(format!(
                "'{}': path placeholder {{{}}} has no matching flag",
                spec.name, name
            )));
        }
    }

    if let Some(kind) = spec.resource_type {
        for name in placeholders(kind) {
            if spec.find_flag(name).is_none() {
                return Err(TfeError::Config(format!(
                    "'{}': type placeholder {{{}}} has no matching flag",
                    spec.name, name
                )));
            }
        }
    }

    match spec.body {
        BodyShape::IdList { flag } | BodyShape::NamedList { flag } => {
            if spec.find_flag(flag).is_none() {
                return Err(TfeError::Config(format!(
                    "'{}': list body flag -{} is not defined",
                    spec.name, flag
                )));
            }
        }
        BodyShape::Resource if spec.resource_type.is_none() => {
            return Err(TfeError::Config(format!(
                "'{}': resource body without a type",
                spec.name
            )));
        }
        _ => {}
    }

    if let Some(flag) = spec
        .flags
        .iter()
        .find(|f| f.target == FlagTarget::Path && !placeholders(spec.path).contains(&f.name))
    {
        return Err(TfeError::Config(format!(
            "'{}': path flag -{} is not used in {}",
            spec.name, flag.name, spec.path
        )));
    }
    Ok(())
}
