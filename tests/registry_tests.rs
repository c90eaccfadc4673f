//! Integration tests for the command registry and coverage table

use std::collections::BTreeSet;

use tfectl::coverage::NAMESPACE_ALIASES;
use tfectl::{build_registry, expected_file_name, resolve, validate, RESOURCE_OPERATIONS};

const MUST_EXIST: &[&str] = &[
    "organization list",
    "organization membership create",
    "account show",
    "workspace lock",
    "workspace tag add",
    "workspace tag remove",
    "variableset apply",
    "variableset remove",
    "team access create",
    "team project access update",
    "team member add",
    "run force-execute",
    "run comment create",
    "stateversion current",
    "policyset add-workspaces",
    "policycheck override",
    "agentpool token-list",
    "agentpool token-create",
    "agentpool token-delete",
    "registry provider platform create",
    "registry module version delete",
    "oidc vault update",
    "stack configuration read",
    "docs",
];

const LEGACY: &[&str] = &[
    "teamaccess",
    "teamaccess create",
    "workspacetag list",
    "organizationmembership list",
    "registrymodule create",
    "oidcconfiguration",
    "agentpool_token list",
];

/// Test the shipped coverage table has no gaps
#[test]
fn test_coverage_is_complete() {
    let misses = validate(&build_registry(), RESOURCE_OPERATIONS);
    assert!(misses.is_empty(), "uncovered operations:\n{}", misses.join("\n"));
}

/// Test every canonical name resolves to a constructible command
#[test]
fn test_canonical_names_are_constructible() {
    let registry = build_registry();
    for name in MUST_EXIST {
        assert!(registry.contains(name), "'{}' is not registered", name);
        assert!(registry.create(name).is_ok(), "'{}' failed to construct", name);
    }
}

/// Test legacy flat names are never registered
#[test]
fn test_legacy_names_are_absent() {
    let registry = build_registry();
    for name in LEGACY {
        assert!(!registry.contains(name), "legacy name '{}' is registered", name);
    }
    for name in registry.names() {
        let first = name.split(' ').next().unwrap_or_default();
        assert!(
            !NAMESPACE_ALIASES.iter().any(|(legacy, _)| *legacy == first),
            "'{}' starts with a legacy name",
            name
        );
    }
}

/// Test every command documents its own path and has a synopsis
#[test]
fn test_help_and_synopsis_for_every_command() {
    let registry = build_registry();
    for name in registry.names() {
        let command = registry.create(name).unwrap();
        assert!(!command.synopsis().is_empty(), "'{}' has no synopsis", name);
        let help = command.help();
        assert!(help.contains("Usage:"), "'{}' help has no usage line", name);
        assert!(help.contains(name), "'{}' help does not name the command", name);
    }
}

/// Test building the registry twice yields the same names
#[test]
fn test_registry_is_deterministic() {
    let first: Vec<String> = build_registry().names().iter().map(|s| s.to_string()).collect();
    let second: Vec<String> = build_registry().names().iter().map(|s| s.to_string()).collect();
    assert_eq!(first, second);
}

/// Test the irregular verb mappings
#[test]
fn test_resolve_special_cases() {
    assert_eq!(resolve("workspacetag", "create"), vec!["workspace tag add"]);
    assert_eq!(resolve("agentpool_token", "list"), vec!["agentpool token-list"]);
    assert_eq!(
        resolve("variableset", "apply-projects"),
        vec!["variableset apply"]
    );
    assert_eq!(
        resolve("teamaccess", "read"),
        vec!["team access read", "team access show"]
    );
}

/// Test every API command maps to a distinct documentation file
#[test]
fn test_expected_file_names_are_unique() {
    let registry = build_registry();
    let mut seen = BTreeSet::new();
    for name in registry.names() {
        let file = expected_file_name(name);
        assert!(!file.contains(' ') && !file.contains('-'), "{} -> {}", name, file);
        assert!(seen.insert(file.clone()), "{} -> {} is not unique", name, file);
    }
}
