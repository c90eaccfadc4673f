//! Help-only stubs for namespace parents such as `team` or `team access`

use futures::future::BoxFuture;

use super::{Command, Context};
use crate::config::defaults;

/// Synopsis used for namespaces without a command of their own
pub fn namespace_synopsis(name: &str) -> String {
    format!("Manage {} resources", name)
}

pub struct NamespaceCommand {
    name: String,
    /// `(full name, synopsis)` of the immediate children
    children: Vec<(String, String)>,
}

impl NamespaceCommand {
    pub fn new(name: String, children: Vec<(String, String)>) -> Self {
        Self { name, children }
    }
}

impl Command for NamespaceCommand {
    fn synopsis(&self) -> String {
        namespace_synopsis(&self.name)
    }

    fn help(&self) -> String {
        let width = self
            .children
            .iter()
            .map(|(name, _)| name.len() - self.name.len() - 1)
            .max()
            .unwrap_or(0);

        let mut help = format!(
            "{}\n\nUsage: {} {} <subcommand> [flags]\n\nSubcommands:\n",
            self.synopsis(),
            defaults::BIN_NAME,
            self.name
        );
        for (name, synopsis) in &self.children {
            let short = &name[self.name.len() + 1..];
            help.push_str(&format!("  {:<width$}  {}\n", short, synopsis, width = width));
        }
        help
    }

    fn run<'a>(&'a self, _ctx: &'a Context, args: &'a [String]) -> BoxFuture<'a, i32> {
        Box::pin(async move {
            match args.first() {
                None => {
                    println!("{}", self.help());
                    0
                }
                Some(arg) if matches!(arg.as_str(), "-h" | "-help" | "--help") => {
                    println!("{}", self.help());
                    0
                }
                Some(arg) => {
                    eprintln!(
                        "Error: unknown subcommand '{}' for '{} {}'\n",
                        arg,
                        defaults::BIN_NAME,
                        self.name
                    );
                    eprintln!("{}", self.help());
                    1
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_access() -> NamespaceCommand {
        NamespaceCommand::new(
            "team access".to_string(),
            vec![
                ("team access create".to_string(), "Grant a team access".to_string()),
                ("team access list".to_string(), "List team access".to_string()),
            ],
        )
    }

    #[test]
    fn test_help_lists_children() {
        let help = team_access().help();
        assert!(help.contains("Usage: tfectl team access <subcommand>"));
        assert!(help.contains("  create  Grant a team access"));
        assert!(help.contains("  list    List team access"));
    }

    #[test]
    fn test_synopsis() {
        assert_eq!(team_access().synopsis(), "Manage team access resources");
    }

    #[tokio::test]
    async fn test_run_without_args_succeeds() {
        let ctx = Context::default();
        assert_eq!(team_access().run(&ctx, &[]).await, 0);
    }

    #[tokio::test]
    async fn test_run_with_unknown_subcommand_fails() {
        let ctx = Context::default();
        let args = vec!["bogus".to_string()];
        assert_eq!(team_access().run(&ctx, &args).await, 1);
    }
}
