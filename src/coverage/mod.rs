//! API coverage check
//!
//! [`RESOURCE_OPERATIONS`] lists every operation of the platform API that the
//! CLI is expected to expose. [`validate`] reports the ones no registered
//! command covers.

mod naming;
mod resolve;

pub use naming::expected_file_name;
pub use resolve::{canonical_namespace, legacy_namespace, resolve, NAMESPACE_ALIASES, VERB_OVERRIDES};

use crate::commands::CommandRegistry;

/// One API resource and the operations the CLI must expose for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceOperation {
    /// API documentation page the resource is described on
    pub api_doc: &'static str,
    /// Flat resource prefix, see [`NAMESPACE_ALIASES`]
    pub cli_prefix: &'static str,
    /// `L`, `C`, `R`, `U`, `D` or a custom verb
    pub operations: &'static [&'static str],
}

const fn op(
    api_doc: &'static str,
    cli_prefix: &'static str,
    operations: &'static [&'static str],
) -> ResourceOperation {
    ResourceOperation {
        api_doc,
        cli_prefix,
        operations,
    }
}

const LCRUD: &[&str] = &["L", "C", "R", "U", "D"];
const CRUD: &[&str] = &["C", "R", "U", "D"];
const LCRD: &[&str] = &["L", "C", "R", "D"];

pub const RESOURCE_OPERATIONS: &[ResourceOperation] = &[
    op("organizations", "organization", &["L", "C", "R", "U", "D", "entitlements"]),
    op("organization-memberships", "organizationmembership", LCRD),
    op("organization-tokens", "organizationtoken", &["C", "R", "D"]),
    op("organization-tags", "organizationtag", &["L", "D"]),
    op("account", "account", &["R"]),
    op("user-tokens", "usertoken", LCRD),
    op(
        "workspaces",
        "workspace",
        &["L", "C", "R", "U", "D", "lock", "unlock", "force-unlock"],
    ),
    op("workspaces", "workspacetag", &["L", "C", "D"]),
    op("workspace-resources", "workspaceresource", &["L"]),
    op("workspace-variables", "variable", &["L", "C", "U", "D"]),
    op(
        "variable-sets",
        "variableset",
        &[
            "L",
            "C",
            "R",
            "U",
            "D",
            "apply-workspaces",
            "apply-projects",
            "apply-stacks",
            "remove-workspaces",
            "remove-projects",
            "remove-stacks",
        ],
    ),
    op("variable-sets", "variablesetvariable", &["L", "C", "U", "D"]),
    op("projects", "project", LCRUD),
    op("teams", "team", LCRUD),
    op("team-access", "teamaccess", LCRUD),
    op("project-team-access", "teamprojectaccess", LCRUD),
    op("team-members", "teammember", &["L", "C", "D"]),
    op("team-tokens", "teamtoken", &["C", "R", "D"]),
    op(
        "run",
        "run",
        &["L", "C", "R", "apply", "cancel", "discard", "force-cancel", "force-execute"],
    ),
    op("plans", "plan", &["R"]),
    op("applies", "apply", &["R"]),
    op("comments", "comment", &["L", "C", "R"]),
    op("cost-estimates", "costestimate", &["R"]),
    op("configuration-versions", "configurationversion", &["L", "C", "R"]),
    op("state-versions", "stateversion", &["L", "C", "R", "outputs", "current"]),
    op("policies", "policy", LCRUD),
    op(
        "policy-sets",
        "policyset",
        &["L", "C", "R", "U", "D", "add-workspaces", "remove-workspaces"],
    ),
    op("policy-set-params", "policysetparameter", LCRUD),
    op("policy-checks", "policycheck", &["L", "R", "override"]),
    op("policy-evaluations", "policyevaluation", &["L"]),
    op("agents", "agentpool", LCRUD),
    op("agent-tokens", "agentpool_token", &["L", "C", "D"]),
    op("agents", "agent", &["L", "R"]),
    op("run-tasks", "runtask", LCRUD),
    op("run-tasks", "workspaceruntask", LCRUD),
    op("run-triggers", "runtrigger", LCRD),
    op(
        "notification-configurations",
        "notificationconfiguration",
        &["L", "C", "R", "U", "D", "verify"],
    ),
    op("ssh-keys", "sshkey", LCRUD),
    op("oauth-clients", "oauthclient", LCRUD),
    op("oauth-tokens", "oauthtoken", &["L", "R", "U", "D"]),
    op("private-registry/modules", "registrymodule", LCRD),
    op("private-registry/modules", "registrymoduleversion", &["C", "D"]),
    op("private-registry/providers", "registryprovider", LCRD),
    op("private-registry/provider-versions-platforms", "registryproviderversion", LCRD),
    op("private-registry/provider-versions-platforms", "registryproviderplatform", LCRD),
    op("private-registry/gpg-keys", "gpgkey", LCRUD),
    op("aws-configurations", "awsoidcconfiguration", CRUD),
    op("azure-configurations", "azureoidcconfiguration", CRUD),
    op("gcp-configurations", "gcpoidcconfiguration", CRUD),
    op("vault-configurations", "vaultoidcconfiguration", CRUD),
    op("stacks", "stack", LCRUD),
    op("stacks/stack-configurations", "stackconfiguration", &["L", "R"]),
];

/// Action verb for an operation code; custom verbs pass through
pub fn action_for(code: &str) -> &str {
    match code {
        "L" => "list",
        "C" => "create",
        "R" => "read",
        "U" => "update",
        "D" => "delete",
        other => other,
    }
}

/// Every operation with no registered command, formatted
/// `<apiDoc> → <cliPrefix> <action>`, in table order
pub fn validate(registry: &CommandRegistry, operations: &[ResourceOperation]) -> Vec<String> {
    let mut missing = Vec::new();
    for resource in operations {
        for code in resource.operations {
            let action = action_for(code);
            let covered = resolve(resource.cli_prefix, action)
                .iter()
                .any(|name| registry.contains(name));
            if !covered {
                missing.push(format!(
                    "{} → {} {}",
                    resource.api_doc, resource.cli_prefix, action
                ));
            }
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{build_registry, Command, Context};
    use crate::error::Result;
    use futures::future::BoxFuture;

    struct Noop;

    impl Command for Noop {
        fn synopsis(&self) -> String {
            "noop".to_string()
        }

        fn help(&self) -> String {
            "Usage: noop".to_string()
        }

        fn run<'a>(&'a self, _ctx: &'a Context, _args: &'a [String]) -> BoxFuture<'a, i32> {
            Box::pin(async { 0 })
        }
    }

    fn registry_with(names: &[&str]) -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        for name in names {
            registry.insert(
                *name,
                Box::new(|| -> Result<Box<dyn Command>> { Ok(Box::new(Noop)) }),
            );
        }
        registry
    }

    #[test]
    fn test_action_for() {
        assert_eq!(action_for("L"), "list");
        assert_eq!(action_for("C"), "create");
        assert_eq!(action_for("R"), "read");
        assert_eq!(action_for("U"), "update");
        assert_eq!(action_for("D"), "delete");
        assert_eq!(action_for("force-unlock"), "force-unlock");
    }

    #[test]
    fn test_validate_collects_every_miss_in_order() {
        let registry = registry_with(&["team list", "team show"]);
        let operations = [
            op("teams", "team", &["L", "R", "D"]),
            op("team-access", "teamaccess", &["L"]),
        ];
        assert_eq!(
            validate(&registry, &operations),
            vec!["teams → team delete", "team-access → teamaccess list"]
        );
    }

    #[test]
    fn test_validate_uses_overrides() {
        let registry = registry_with(&["workspace tag add", "agentpool token-list"]);
        let operations = [
            op("workspaces", "workspacetag", &["C"]),
            op("agent-tokens", "agentpool_token", &["L"]),
        ];
        assert!(validate(&registry, &operations).is_empty());
    }

    #[test]
    fn test_shipped_table_is_fully_covered() {
        let missing = validate(&build_registry(), RESOURCE_OPERATIONS);
        assert!(missing.is_empty(), "missing coverage:\n{}", missing.join("\n"));
    }

    #[test]
    fn test_every_verb_override_is_used() {
        for (raw, verb, _) in VERB_OVERRIDES {
            let used = RESOURCE_OPERATIONS.iter().any(|resource| {
                resource.cli_prefix == *raw
                    && resource.operations.iter().any(|code| action_for(code) == *verb)
            });
            assert!(used, "override ({}, {}) matches no operation", raw, verb);
        }
    }
}
