//! Policies, policy sets, their parameters and policy results

use super::{id, organization, search};
use crate::commands::{CommandSpec, FlagSpec};

const POLICY_COLUMNS: &[&str] = &["name", "kind", "enforcement-level", "policy-set-count"];
const POLICY_SET_COLUMNS: &[&str] = &[
    "name",
    "kind",
    "global",
    "overridable",
    "workspace-count",
    "policy-count",
];
const PARAMETER_COLUMNS: &[&str] = &["key", "value", "sensitive"];
const CHECK_COLUMNS: &[&str] = &["status", "scope", "result.passed", "result.total-failed"];

const POLICY_KINDS: &[&str] = &["sentinel", "opa"];
const ENFORCEMENT_LEVELS: &[&str] = &["advisory", "soft-mandatory", "hard-mandatory", "mandatory"];

pub fn commands() -> Vec<CommandSpec> {
    let mut commands = policy_commands();
    commands.extend(policy_set_commands());
    commands.extend(parameter_commands());
    commands.extend(result_commands());
    commands
}

fn policy_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "policy list",
            "List policies in an organization",
            "/organizations/{organization}/policies",
        )
        .flag(organization())
        .flag(search("search[name]"))
        .flag(
            FlagSpec::query("kind", "filter[kind]", "Only show policies of this kind")
                .one_of(POLICY_KINDS),
        )
        .columns(POLICY_COLUMNS),
        CommandSpec::create(
            "policy create",
            "Create a policy",
            "/organizations/{organization}/policies",
            "policies",
        )
        .flag(organization())
        .flag(FlagSpec::attr("name", "Policy name").required())
        .flag(FlagSpec::attr("description", "Policy description"))
        .flag(
            FlagSpec::attr("kind", "Policy framework")
                .one_of(POLICY_KINDS)
                .default_value("sentinel"),
        )
        .flag(FlagSpec::attr("query", "OPA query to evaluate"))
        .flag(
            FlagSpec::attr("enforcement-level", "What a failing policy does")
                .one_of(ENFORCEMENT_LEVELS)
                .required(),
        )
        .columns(POLICY_COLUMNS),
        CommandSpec::read("policy read", "Show a policy", "/policies/{id}")
            .flag(id("Policy ID (pol-...)"))
            .columns(POLICY_COLUMNS),
        CommandSpec::update("policy update", "Update a policy", "/policies/{id}", "policies")
            .flag(id("Policy ID (pol-...)"))
            .flag(FlagSpec::attr("description", "Policy description"))
            .flag(FlagSpec::attr("query", "OPA query to evaluate"))
            .flag(
                FlagSpec::attr("enforcement-level", "What a failing policy does")
                    .one_of(ENFORCEMENT_LEVELS),
            )
            .columns(POLICY_COLUMNS),
        CommandSpec::delete("policy delete", "Delete a policy", "/policies/{id}")
            .flag(id("Policy ID (pol-...)"))
            .done("Policy deleted"),
    ]
}

fn policy_set_settings(spec: CommandSpec) -> CommandSpec {
    spec.flag(FlagSpec::attr("description", "Policy set description"))
        .flag(FlagSpec::attr("global", "Enforce on every workspace").boolean())
        .flag(FlagSpec::attr("overridable", "Allow overriding failed mandatory policies").boolean())
        .flag(FlagSpec::attr("policies-path", "Subdirectory of the VCS repository holding policies"))
}

/// `-workspace-ids` body for attaching and detaching workspaces
fn workspaces_body(spec: CommandSpec) -> CommandSpec {
    spec.flag(id("Policy set ID (polset-...)"))
        .flag(
            FlagSpec::local("workspace-ids", "Workspace IDs, comma separated")
                .list()
                .required(),
        )
        .id_list("workspace-ids", "workspaces")
}

fn policy_set_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "policyset list",
            "List policy sets in an organization",
            "/organizations/{organization}/policy-sets",
        )
        .flag(organization())
        .flag(search("search[name]"))
        .columns(POLICY_SET_COLUMNS),
        policy_set_settings(
            CommandSpec::create(
                "policyset create",
                "Create a policy set",
                "/organizations/{organization}/policy-sets",
                "policy-sets",
            )
            .flag(organization())
            .flag(FlagSpec::attr("name", "Policy set name").required())
            .flag(
                FlagSpec::attr("kind", "Policy framework")
                    .one_of(POLICY_KINDS)
                    .default_value("sentinel"),
            ),
        )
        .columns(POLICY_SET_COLUMNS),
        CommandSpec::read("policyset read", "Show a policy set", "/policy-sets/{id}")
            .flag(id("Policy set ID (polset-...)"))
            .columns(POLICY_SET_COLUMNS),
        policy_set_settings(
            CommandSpec::update(
                "policyset update",
                "Update a policy set",
                "/policy-sets/{id}",
                "policy-sets",
            )
            .flag(id("Policy set ID (polset-...)"))
            .flag(FlagSpec::attr("name", "Policy set name")),
        )
        .columns(POLICY_SET_COLUMNS),
        CommandSpec::delete("policyset delete", "Delete a policy set", "/policy-sets/{id}")
            .flag(id("Policy set ID (polset-...)"))
            .done("Policy set deleted"),
        workspaces_body(CommandSpec::action(
            "policyset add-workspaces",
            "Enforce a policy set on workspaces",
            "/policy-sets/{id}/relationships/workspaces",
        ))
        .done("Workspaces added"),
        workspaces_body(CommandSpec::delete(
            "policyset remove-workspaces",
            "Stop enforcing a policy set on workspaces",
            "/policy-sets/{id}/relationships/workspaces",
        ))
        .done("Workspaces removed"),
    ]
}

fn parameter_commands() -> Vec<CommandSpec> {
    let policy_set_id = || FlagSpec::path("policy-set-id", "Policy set ID (polset-...)");
    let parameter_id = || id("Parameter ID (var-...)");
    vec![
        CommandSpec::list(
            "policyset parameter list",
            "List the parameters of a policy set",
            "/policy-sets/{policy-set-id}/parameters",
        )
        .flag(policy_set_id())
        .columns(PARAMETER_COLUMNS),
        CommandSpec::create(
            "policyset parameter create",
            "Add a parameter to a policy set",
            "/policy-sets/{policy-set-id}/parameters",
            "vars",
        )
        .flag(policy_set_id())
        .flag(FlagSpec::attr("key", "Parameter name").required())
        .flag(FlagSpec::attr("value", "Parameter value"))
        .flag(FlagSpec::attr("sensitive", "Hide the value once written").boolean())
        .flag(
            FlagSpec::attr("category", "Variable category")
                .one_of(&["policy-set"])
                .default_value("policy-set"),
        )
        .columns(PARAMETER_COLUMNS),
        CommandSpec::read(
            "policyset parameter read",
            "Show a policy set parameter",
            "/policy-sets/{policy-set-id}/parameters/{id}",
        )
        .flag(policy_set_id())
        .flag(parameter_id())
        .columns(PARAMETER_COLUMNS),
        CommandSpec::update(
            "policyset parameter update",
            "Update a policy set parameter",
            "/policy-sets/{policy-set-id}/parameters/{id}",
            "vars",
        )
        .flag(policy_set_id())
        .flag(parameter_id())
        .flag(FlagSpec::attr("key", "Parameter name"))
        .flag(FlagSpec::attr("value", "Parameter value"))
        .flag(FlagSpec::attr("sensitive", "Hide the value once written").boolean())
        .columns(PARAMETER_COLUMNS),
        CommandSpec::delete(
            "policyset parameter delete",
            "Delete a policy set parameter",
            "/policy-sets/{policy-set-id}/parameters/{id}",
        )
        .flag(policy_set_id())
        .flag(parameter_id())
        .done("Parameter deleted"),
    ]
}

fn result_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "policycheck list",
            "List the Sentinel policy checks of a run",
            "/runs/{run-id}/policy-checks",
        )
        .flag(FlagSpec::path("run-id", "Run ID (run-...)"))
        .columns(CHECK_COLUMNS),
        CommandSpec::read("policycheck read", "Show a policy check", "/policy-checks/{id}")
            .flag(id("Policy check ID (polchk-...)"))
            .columns(CHECK_COLUMNS),
        CommandSpec::action(
            "policycheck override",
            "Override a soft-mandatory policy failure",
            "/policy-checks/{id}/actions/override",
        )
        .flag(id("Policy check ID (polchk-...)"))
        .columns(CHECK_COLUMNS),
        CommandSpec::list(
            "policy evaluation list",
            "List the policy evaluations of a task stage",
            "/task-stages/{task-stage-id}/policy-evaluations",
        )
        .flag(FlagSpec::path("task-stage-id", "Task stage ID (ts-...)"))
        .columns(&["status", "policy-kind", "result-count.passed", "result-count.errored"]),
    ]
}
