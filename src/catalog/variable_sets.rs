//! Variable sets and their variables

use super::workspaces::variable_attributes;
use super::{id, organization, search};
use crate::commands::{CommandSpec, FlagSpec};

const VARSET_COLUMNS: &[&str] = &["name", "global", "priority", "var-count", "workspace-count"];
const VARIABLE_COLUMNS: &[&str] = &["key", "value", "category", "hcl", "sensitive"];
const TARGETS: &[&str] = &["workspaces", "projects", "stacks"];

pub fn commands() -> Vec<CommandSpec> {
    let mut commands = varset_commands();
    commands.extend(variable_commands());
    commands
}

fn varset_settings(spec: CommandSpec) -> CommandSpec {
    spec.flag(FlagSpec::attr("description", "Variable set description"))
        .flag(FlagSpec::attr("global", "Apply to every workspace in the organization").boolean())
        .flag(FlagSpec::attr("priority", "Override workspace variables").boolean())
}

/// `-target` and `-ids` for attaching and detaching
fn attachment(spec: CommandSpec) -> CommandSpec {
    spec.flag(id("Variable set ID (varset-...)"))
        .flag(
            FlagSpec::local("target", "Kind of resource the IDs refer to")
                .one_of(TARGETS)
                .default_value("workspaces"),
        )
        .flag(FlagSpec::local("ids", "Workspace, project or stack IDs, comma separated").list().required())
        .id_list("ids", "{target}")
}

fn varset_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "variableset list",
            "List variable sets in an organization",
            "/organizations/{organization}/varsets",
        )
        .flag(organization())
        .flag(search("q"))
        .columns(VARSET_COLUMNS),
        varset_settings(
            CommandSpec::create(
                "variableset create",
                "Create a variable set",
                "/organizations/{organization}/varsets",
                "varsets",
            )
            .flag(organization())
            .flag(FlagSpec::attr("name", "Variable set name").required()),
        )
        .columns(VARSET_COLUMNS),
        CommandSpec::read("variableset read", "Show a variable set", "/varsets/{id}")
            .flag(id("Variable set ID (varset-...)"))
            .columns(VARSET_COLUMNS),
        varset_settings(
            CommandSpec::update(
                "variableset update",
                "Update a variable set",
                "/varsets/{id}",
                "varsets",
            )
            .flag(id("Variable set ID (varset-...)"))
            .flag(FlagSpec::attr("name", "Variable set name")),
        )
        .columns(VARSET_COLUMNS),
        CommandSpec::delete("variableset delete", "Delete a variable set", "/varsets/{id}")
            .flag(id("Variable set ID (varset-...)"))
            .done("Variable set deleted"),
        attachment(CommandSpec::action(
            "variableset apply",
            "Apply a variable set to workspaces, projects or stacks",
            "/varsets/{id}/relationships/{target}",
        ))
        .done("Variable set applied"),
        attachment(CommandSpec::delete(
            "variableset remove",
            "Remove a variable set from workspaces, projects or stacks",
            "/varsets/{id}/relationships/{target}",
        ))
        .done("Variable set removed"),
    ]
}

fn variable_commands() -> Vec<CommandSpec> {
    let varset_id = || FlagSpec::path("varset-id", "Variable set ID (varset-...)");
    vec![
        CommandSpec::list(
            "variableset variable list",
            "List the variables of a variable set",
            "/varsets/{varset-id}/relationships/vars",
        )
        .flag(varset_id())
        .columns(VARIABLE_COLUMNS),
        variable_attributes(
            CommandSpec::create(
                "variableset variable create",
                "Add a variable to a variable set",
                "/varsets/{varset-id}/relationships/vars",
                "vars",
            )
            .flag(varset_id()),
            true,
        )
        .columns(VARIABLE_COLUMNS),
        variable_attributes(
            CommandSpec::update(
                "variableset variable update",
                "Update a variable in a variable set",
                "/varsets/{varset-id}/relationships/vars/{id}",
                "vars",
            )
            .flag(varset_id())
            .flag(id("Variable ID (var-...)")),
            false,
        )
        .columns(VARIABLE_COLUMNS),
        CommandSpec::delete(
            "variableset variable delete",
            "Delete a variable from a variable set",
            "/varsets/{varset-id}/relationships/vars/{id}",
        )
        .flag(varset_id())
        .flag(id("Variable ID (var-...)"))
        .done("Variable deleted"),
    ]
}
