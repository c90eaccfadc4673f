//! Command catalog
//!
//! One [`CommandSpec`] per API operation, grouped by area of the API.

mod agents;
mod oidc;
mod organizations;
mod policies;
mod registry;
mod runs;
mod stacks;
mod teams;
mod variable_sets;
mod vcs;
mod workspaces;

use crate::commands::{CommandSpec, FlagSpec};

/// Every API command, in catalog order
pub fn all() -> Vec<CommandSpec> {
    [
        organizations::commands(),
        workspaces::commands(),
        variable_sets::commands(),
        teams::commands(),
        runs::commands(),
        policies::commands(),
        agents::commands(),
        vcs::commands(),
        registry::commands(),
        oidc::commands(),
        stacks::commands(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// `-organization`, defaulting from `TFE_ORGANIZATION`
fn organization() -> FlagSpec {
    FlagSpec::path("organization", "Organization name (default: $TFE_ORGANIZATION)")
}

/// `-id` path flag
fn id(help: &'static str) -> FlagSpec {
    FlagSpec::path("id", help)
}

/// Free-text search, sent as the given query key
fn search(key: &'static str) -> FlagSpec {
    FlagSpec::query("search", key, "Only show results matching this text")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ApiCommand;
    use crate::coverage::NAMESPACE_ALIASES;
    use std::collections::BTreeSet;
    use std::sync::Arc;

    #[test]
    fn test_names_are_unique() {
        let specs = all();
        let names: BTreeSet<&str> = specs.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), specs.len());
    }

    #[test]
    fn test_every_spec_is_consistent() {
        for spec in all() {
            let name = spec.name;
            assert!(!spec.synopsis.is_empty(), "{} has no synopsis", name);
            if let Err(e) = ApiCommand::new(Arc::new(spec)) {
                panic!("{}: {}", name, e);
            }
        }
    }

    #[test]
    fn test_names_are_hierarchical() {
        for spec in all() {
            assert!(spec.name.contains(' '), "'{}' is not hierarchical", spec.name);
            let first = spec.name.split(' ').next().unwrap_or_default();
            assert!(
                !NAMESPACE_ALIASES.iter().any(|(legacy, _)| *legacy == first),
                "'{}' starts with a legacy name",
                spec.name
            );
        }
    }

    #[test]
    fn test_flag_names_are_unique_per_command() {
        for spec in all() {
            let mut seen = BTreeSet::new();
            for flag in &spec.flags {
                assert!(seen.insert(flag.name), "{}: duplicate -{}", spec.name, flag.name);
                assert!(
                    !matches!(flag.name, "output" | "page" | "page-size" | "help"),
                    "{}: -{} is reserved",
                    spec.name,
                    flag.name
                );
            }
        }
    }
}
