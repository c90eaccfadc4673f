//! Stacks and their configurations

use super::{id, organization, search};
use crate::commands::{CommandSpec, FlagSpec};

const STACK_COLUMNS: &[&str] = &["name", "description", "speculative-enabled", "created-at"];
const CONFIGURATION_COLUMNS: &[&str] = &["sequence-number", "status", "speculative", "created-at"];

pub fn commands() -> Vec<CommandSpec> {
    let stack_id = || id("Stack ID (st-...)");
    vec![
        CommandSpec::list(
            "stack list",
            "List stacks in an organization",
            "/organizations/{organization}/stacks",
        )
        .flag(organization())
        .flag(search("search[name]"))
        .flag(FlagSpec::query(
            "project-id",
            "filter[project[id]]",
            "Only show stacks in this project",
        ))
        .columns(STACK_COLUMNS),
        CommandSpec::create(
            "stack create",
            "Create a stack",
            "/organizations/{organization}/stacks",
            "stacks",
        )
        .flag(organization())
        .flag(FlagSpec::attr("name", "Stack name").required())
        .flag(FlagSpec::attr("description", "Stack description"))
        .flag(FlagSpec::attr("speculative-enabled", "Run speculative plans on pull requests").boolean())
        .flag(
            FlagSpec::relationship("project-id", "project", "projects", "Project ID (prj-...)")
                .required(),
        )
        .columns(STACK_COLUMNS),
        CommandSpec::read("stack read", "Show a stack", "/stacks/{id}")
            .flag(stack_id())
            .columns(STACK_COLUMNS),
        CommandSpec::update("stack update", "Update a stack", "/stacks/{id}", "stacks")
            .flag(stack_id())
            .flag(FlagSpec::attr("name", "Stack name"))
            .flag(FlagSpec::attr("description", "Stack description"))
            .flag(FlagSpec::attr("speculative-enabled", "Run speculative plans on pull requests").boolean())
            .columns(STACK_COLUMNS),
        CommandSpec::delete("stack delete", "Delete a stack", "/stacks/{id}")
            .flag(stack_id())
            .done("Stack deleted"),
        CommandSpec::list(
            "stack configuration list",
            "List the configurations of a stack",
            "/stacks/{stack-id}/stack-configurations",
        )
        .flag(FlagSpec::path("stack-id", "Stack ID (st-...)"))
        .columns(CONFIGURATION_COLUMNS),
        CommandSpec::read(
            "stack configuration read",
            "Show a stack configuration",
            "/stack-configurations/{id}",
        )
        .flag(id("Stack configuration ID (stc-...)"))
        .columns(CONFIGURATION_COLUMNS),
    ]
}
