//! Command registry
//!
//! Every user-facing command is registered under its hierarchical name
//! (`"team access create"`). Leading word prefixes that are not commands
//! themselves get a help-only namespace stub, so `tfectl team access`
//! explains what is available instead of failing.

pub mod api;
pub mod args;
pub mod docs;
pub mod namespace;
pub mod request;
pub mod spec;

use futures::future::BoxFuture;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::catalog;
use crate::error::{Result, TfeError};
use crate::hcp::{HostResolver, TfeClient, TokenResolver};

pub use api::ApiCommand;
pub use docs::DocsCommand;
pub use namespace::NamespaceCommand;
pub use spec::{BodyShape, CommandSpec, FlagKind, FlagSpec, FlagTarget};

/// A runnable command
pub trait Command: Send + Sync {
    /// One short phrase
    fn synopsis(&self) -> String;

    /// Full help text including a `Usage:` line
    fn help(&self) -> String;

    /// Run with the arguments that follow the command path, returning the exit code
    fn run<'a>(&'a self, ctx: &'a Context, args: &'a [String]) -> BoxFuture<'a, i32>;
}

/// Builds a fresh command on every call
pub type CommandFactory = Box<dyn Fn() -> Result<Box<dyn Command>> + Send + Sync>;

/// Global options shared by every command
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub address: Option<String>,
    pub token: Option<String>,
    pub batch: bool,
    pub no_header: bool,
}

impl Context {
    /// Resolve address and token, then build a client
    pub fn client(&self) -> Result<TfeClient> {
        let address = HostResolver::resolve(self.address.as_deref(), self.batch)?;
        let token = TokenResolver::new(&address).resolve(self.token.as_deref())?;
        Ok(TfeClient::new(token, &address))
    }
}

/// Mapping from hierarchical command name to factory
#[derive(Default)]
pub struct CommandRegistry {
    factories: BTreeMap<String, CommandFactory>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, factory: CommandFactory) {
        self.factories.insert(name.into(), factory);
    }

    pub fn get(&self, name: &str) -> Option<&CommandFactory> {
        self.factories.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// All names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Construct the command registered under `name`
    pub fn create(&self, name: &str) -> Result<Box<dyn Command>> {
        match self.get(name) {
            Some(factory) => factory(),
            None => Err(TfeError::Usage(format!("unknown command '{}'", name))),
        }
    }

    /// Longest registered name formed by the leading non-flag words.
    ///
    /// Returns the name and how many words it consumed.
    pub fn longest_match(&self, words: &[String]) -> Option<(&str, usize)> {
        let leading = words.iter().take_while(|w| !w.starts_with('-')).count();
        (1..=leading).rev().find_map(|n| {
            let candidate = words[..n].join(" ");
            self.factories
                .get_key_value(candidate.as_str())
                .map(|(name, _)| (name.as_str(), n))
        })
    }

    /// Single-word names
    pub fn roots(&self) -> Vec<&str> {
        self.names()
            .into_iter()
            .filter(|name| !name.contains(' '))
            .collect()
    }

    /// Names exactly one word below `parent`
    pub fn children(&self, parent: &str) -> Vec<&str> {
        let prefix = format!("{} ", parent);
        self.names()
            .into_iter()
            .filter(|name| {
                name.strip_prefix(&prefix)
                    .is_some_and(|rest| !rest.contains(' '))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// Build the full registry: catalog commands, `docs` and namespace stubs
pub fn build_registry() -> CommandRegistry {
    let specs: Arc<Vec<Arc<CommandSpec>>> =
        Arc::new(catalog::all().into_iter().map(Arc::new).collect());

    let mut synopses: BTreeMap<String, String> = BTreeMap::new();
    let mut registry = CommandRegistry::new();

    for spec in specs.iter() {
        synopses.insert(spec.name.to_string(), spec.synopsis.to_string());
        let spec = Arc::clone(spec);
        registry.insert(
            spec.name,
            Box::new(move || -> Result<Box<dyn Command>> {
                Ok(Box::new(ApiCommand::new(Arc::clone(&spec))?))
            }),
        );
    }

    synopses.insert(docs::NAME.to_string(), docs::SYNOPSIS.to_string());
    let docs_specs = Arc::clone(&specs);
    registry.insert(
        docs::NAME,
        Box::new(move || -> Result<Box<dyn Command>> {
            Ok(Box::new(DocsCommand::new(Arc::clone(&docs_specs))))
        }),
    );

    for namespace in namespace_prefixes(synopses.keys()) {
        let children: Vec<(String, String)> = immediate_children(&namespace, &synopses);
        let name = namespace.clone();
        registry.insert(
            namespace,
            Box::new(move || -> Result<Box<dyn Command>> {
                Ok(Box::new(NamespaceCommand::new(name.clone(), children.clone())))
            }),
        );
    }

    registry
}

/// Leading word prefixes of multi-word names that are not commands themselves
fn namespace_prefixes<'a>(names: impl Iterator<Item = &'a String> + Clone) -> BTreeSet<String> {
    let commands: BTreeSet<&str> = names.clone().map(String::as_str).collect();
    let mut prefixes = BTreeSet::new();
    for name in names {
        let words: Vec<&str> = name.split(' ').collect();
        for n in 1..words.len() {
            let prefix = words[..n].join(" ");
            if !commands.contains(prefix.as_str()) {
                prefixes.insert(prefix);
            }
        }
    }
    prefixes
}

/// `(full name, synopsis)` of everything one word below `namespace`
fn immediate_children(namespace: &str, synopses: &BTreeMap<String, String>) -> Vec<(String, String)> {
    let depth = namespace.split(' ').count() + 1;
    let prefix = format!("{} ", namespace);
    let mut children: BTreeMap<String, String> = BTreeMap::new();
    for (name, synopsis) in synopses.range(prefix.clone()..) {
        if !name.starts_with(&prefix) {
            break;
        }
        let words: Vec<&str> = name.split(' ').collect();
        let child = words[..depth].join(" ");
        if words.len() == depth {
            children.insert(child, synopsis.clone());
        } else {
            children
                .entry(child.clone())
                .or_insert_with(|| namespace::namespace_synopsis(&child));
        }
    }
    children.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_namespace_prefixes() {
        let names: Vec<String> = ["team list", "team access create", "team access list", "docs"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let prefixes = namespace_prefixes(names.iter());
        assert_eq!(
            prefixes.into_iter().collect::<Vec<_>>(),
            vec!["team", "team access"]
        );
    }

    #[test]
    fn test_immediate_children() {
        let synopses: BTreeMap<String, String> = [
            ("team list", "List teams"),
            ("team access create", "Grant access"),
            ("team access list", "List access"),
            ("teamx list", "Unrelated"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let children = immediate_children("team", &synopses);
        assert_eq!(
            children,
            vec![
                ("team access".to_string(), "Manage team access resources".to_string()),
                ("team list".to_string(), "List teams".to_string()),
            ]
        );
    }

    #[test]
    fn test_longest_match_prefers_deepest_name() {
        let registry = build_registry();
        let args = words("team access create -team-id=team-1");
        assert_eq!(registry.longest_match(&args), Some(("team access create", 3)));

        let args = words("team access");
        assert_eq!(registry.longest_match(&args), Some(("team access", 2)));

        let args = words("team access bogus");
        assert_eq!(registry.longest_match(&args), Some(("team access", 2)));

        assert_eq!(registry.longest_match(&words("nonsense")), None);
        assert_eq!(registry.longest_match(&words("-help")), None);
    }

    #[test]
    fn test_stubs_exist_for_every_prefix() {
        let registry = build_registry();
        for name in registry.names() {
            let parts: Vec<&str> = name.split(' ').collect();
            for n in 1..parts.len() {
                let prefix = parts[..n].join(" ");
                assert!(registry.contains(&prefix), "missing namespace '{}'", prefix);
            }
        }
    }

    #[test]
    fn test_children_and_roots() {
        let registry = build_registry();
        assert!(registry.roots().contains(&"organization"));
        assert!(registry.roots().contains(&"docs"));
        let children = registry.children("team");
        assert!(children.contains(&"team access"));
        assert!(children.contains(&"team create"));
        assert!(!children.contains(&"team access create"));
    }

    #[test]
    fn test_factories_yield_fresh_commands() {
        let registry = build_registry();
        let a = registry.create("workspace list").unwrap();
        let b = registry.create("workspace list").unwrap();
        assert_eq!(a.synopsis(), b.synopsis());
        assert!(!std::ptr::eq(
            a.as_ref() as *const dyn Command as *const u8,
            b.as_ref() as *const dyn Command as *const u8
        ));
    }

    #[test]
    fn test_create_unknown_is_error() {
        let registry = build_registry();
        assert!(registry.create("teamaccess").is_err());
    }

    #[test]
    fn test_broken_factory_fails_alone() {
        let mut registry = CommandRegistry::new();
        let broken = CommandSpec::read("thing show", "Show a thing", "/things/{id}");
        let spec = Arc::new(broken);
        registry.insert(
            "thing show",
            Box::new(move || -> Result<Box<dyn Command>> {
                Ok(Box::new(ApiCommand::new(Arc::clone(&spec))?))
            }),
        );
        match registry.create("thing show") {
            Err(TfeError::Config(msg)) => assert!(msg.contains("{id}")),
            Err(other) => panic!("Expected Config error, got {:?}", other),
            Ok(_) => panic!("Expected Config error"),
        }
    }
}
