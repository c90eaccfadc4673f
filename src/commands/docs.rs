//! `docs` - write one markdown reference page per command

use clap::error::ErrorKind;
use clap::{Arg, ArgMatches};
use futures::future::BoxFuture;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::args::{clap_command, normalize_args};
use super::spec::CommandSpec;
use super::{Command, Context};
use crate::config::defaults;
use crate::coverage::expected_file_name;
use crate::error::{Result, TfeError};

pub const NAME: &str = "docs";
pub const SYNOPSIS: &str = "Generate markdown reference pages for every command";

pub struct DocsCommand {
    specs: Arc<Vec<Arc<CommandSpec>>>,
}

impl DocsCommand {
    pub fn new(specs: Arc<Vec<Arc<CommandSpec>>>) -> Self {
        Self { specs }
    }

    fn parser() -> clap::Command {
        clap::Command::new(NAME)
            .bin_name(format!("{} {}", defaults::BIN_NAME, NAME))
            .about(SYNOPSIS)
            .no_binary_name(true)
            .disable_version_flag(true)
            .arg(
                Arg::new("dir")
                    .long("dir")
                    .value_name("PATH")
                    .help("Directory to write the pages to (created if missing)")
                    .required(true)
                    .value_parser(clap::value_parser!(PathBuf)),
            )
    }

    fn parse(&self, args: &[String]) -> std::result::Result<ArgMatches, clap::Error> {
        Self::parser().try_get_matches_from(normalize_args(args, |_| false))
    }

    /// Write every page plus `index.md`, returning the number of pages
    pub fn write_all(&self, dir: &Path) -> Result<usize> {
        fs::create_dir_all(dir).map_err(|e| TfeError::io(dir, e))?;

        let mut index = format!("# {} command reference\n\n", defaults::BIN_NAME);
        for spec in self.specs.iter() {
            let file_name = format!("{}.md", expected_file_name(spec.name));
            let page = clap_markdown::help_markdown_command(&clap_command(spec));
            let path = dir.join(&file_name);
            debug!("Writing {}", path.display());
            fs::write(&path, page).map_err(|e| TfeError::io(&path, e))?;
            index.push_str(&format!(
                "- [`{}`]({}) - {}\n",
                spec.name, file_name, spec.synopsis
            ));
        }

        let index_path = dir.join("index.md");
        fs::write(&index_path, index).map_err(|e| TfeError::io(&index_path, e))?;
        info!("Wrote {} pages to {}", self.specs.len(), dir.display());
        Ok(self.specs.len())
    }
}

impl Command for DocsCommand {
    fn synopsis(&self) -> String {
        SYNOPSIS.to_string()
    }

    fn help(&self) -> String {
        Self::parser().render_help().to_string()
    }

    fn run<'a>(&'a self, _ctx: &'a Context, args: &'a [String]) -> BoxFuture<'a, i32> {
        Box::pin(async move {
            let matches = match self.parse(args) {
                Ok(matches) => matches,
                Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                    println!("{}", self.help());
                    return 0;
                }
                Err(e) => {
                    eprintln!("Error: {}", TfeError::from(e));
                    return 1;
                }
            };

            let Some(dir) = matches.get_one::<PathBuf>("dir") else {
                eprintln!("Error: -dir is required");
                return 1;
            };
            match self.write_all(dir) {
                Ok(count) => {
                    println!("Wrote {} pages to {}", count, dir.display());
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::spec::FlagSpec;

    fn docs() -> DocsCommand {
        let specs = vec![
            Arc::new(
                CommandSpec::list("team list", "List teams", "/organizations/{organization}/teams")
                    .flag(FlagSpec::path("organization", "Organization name")),
            ),
            Arc::new(
                CommandSpec::delete(
                    "registry module version delete",
                    "Delete a module version",
                    "/registry-modules/{id}",
                )
                .flag(FlagSpec::path("id", "Module ID")),
            ),
        ];
        DocsCommand::new(Arc::new(specs))
    }

    #[test]
    fn test_write_all_creates_pages_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reference");
        assert_eq!(docs().write_all(&out).unwrap(), 2);

        let team = fs::read_to_string(out.join("team_list.md")).unwrap();
        assert!(team.contains("--organization"));
        assert!(out.join("registrymodule_delete_version.md").exists());

        let index = fs::read_to_string(out.join("index.md")).unwrap();
        assert!(index.contains("[`team list`](team_list.md)"));
    }

    #[test]
    fn test_write_all_reports_unwritable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let taken = dir.path().join("taken");
        fs::write(&taken, "").unwrap();
        match docs().write_all(&taken) {
            Err(TfeError::Io { path, .. }) => assert_eq!(path, taken),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_help_mentions_dir() {
        let help = docs().help();
        assert!(help.contains("Usage: tfectl docs"));
        assert!(help.contains("--dir"));
    }

    #[tokio::test]
    async fn test_run_without_dir_fails() {
        let ctx = Context::default();
        assert_eq!(docs().run(&ctx, &[]).await, 1);
    }
}
