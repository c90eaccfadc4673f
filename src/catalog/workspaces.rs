//! Workspaces and everything attached to one

use super::{id, organization, search};
use crate::commands::{CommandSpec, FlagSpec};

const WORKSPACE_COLUMNS: &[&str] = &[
    "name",
    "execution-mode",
    "terraform-version",
    "locked",
    "resource-count",
    "updated-at",
];
const VARIABLE_COLUMNS: &[&str] = &["key", "value", "category", "hcl", "sensitive"];
const RUNTASK_COLUMNS: &[&str] = &["enforcement-level", "stages", "relationships.task.data.id"];
const NOTIFICATION_COLUMNS: &[&str] = &["name", "destination-type", "enabled", "url"];

const EXECUTION_MODES: &[&str] = &["remote", "local", "agent"];
const VARIABLE_CATEGORIES: &[&str] = &["terraform", "env"];
const ENFORCEMENT_LEVELS: &[&str] = &["advisory", "mandatory"];
const DESTINATION_TYPES: &[&str] = &["generic", "email", "slack", "microsoft-teams"];

pub fn commands() -> Vec<CommandSpec> {
    let mut commands = workspace_commands();
    commands.extend(tag_commands());
    commands.extend(variable_commands());
    commands.extend(runtask_commands());
    commands.extend(notification_commands());
    commands
}

fn workspace_settings(spec: CommandSpec) -> CommandSpec {
    spec.flag(FlagSpec::attr("description", "Workspace description"))
        .flag(FlagSpec::attr("auto-apply", "Apply successful plans automatically").boolean())
        .flag(FlagSpec::attr("execution-mode", "Where runs execute").one_of(EXECUTION_MODES))
        .flag(FlagSpec::attr("agent-pool-id", "Agent pool for agent execution mode"))
        .flag(FlagSpec::attr("terraform-version", "Terraform version constraint"))
        .flag(FlagSpec::attr("working-directory", "Directory to run Terraform in"))
        .flag(FlagSpec::attr("queue-all-runs", "Queue runs for new configuration").boolean())
        .flag(FlagSpec::attr("speculative-enabled", "Allow speculative plans").boolean())
        .flag(FlagSpec::relationship(
            "project-id",
            "project",
            "projects",
            "Project to place the workspace in",
        ))
}

fn workspace_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "workspace list",
            "List workspaces in an organization",
            "/organizations/{organization}/workspaces",
        )
        .flag(organization())
        .flag(search("search[name]"))
        .flag(FlagSpec::query("tags", "search[tags]", "Only show workspaces with these tags"))
        .flag(FlagSpec::query("project-id", "filter[project][id]", "Only show workspaces in this project"))
        .columns(WORKSPACE_COLUMNS),
        workspace_settings(
            CommandSpec::create(
                "workspace create",
                "Create a workspace",
                "/organizations/{organization}/workspaces",
                "workspaces",
            )
            .flag(organization())
            .flag(FlagSpec::attr("name", "Workspace name").required())
            .flag(FlagSpec::attr("tag-names", "Tags, comma separated").list()),
        )
        .columns(WORKSPACE_COLUMNS),
        CommandSpec::read("workspace read", "Show a workspace", "/workspaces/{id}")
            .flag(id("Workspace ID (ws-...)"))
            .columns(WORKSPACE_COLUMNS),
        workspace_settings(
            CommandSpec::update(
                "workspace update",
                "Update workspace settings",
                "/workspaces/{id}",
                "workspaces",
            )
            .flag(id("Workspace ID (ws-...)"))
            .flag(FlagSpec::attr("name", "New workspace name")),
        )
        .columns(WORKSPACE_COLUMNS),
        CommandSpec::delete("workspace delete", "Delete a workspace", "/workspaces/{id}")
            .flag(id("Workspace ID (ws-...)"))
            .done("Workspace deleted"),
        CommandSpec::action(
            "workspace lock",
            "Lock a workspace",
            "/workspaces/{id}/actions/lock",
        )
        .flag(id("Workspace ID (ws-...)"))
        .flag(FlagSpec::attr("reason", "Why the workspace is locked"))
        .plain_body()
        .columns(&["name", "locked"]),
        CommandSpec::action(
            "workspace unlock",
            "Unlock a workspace",
            "/workspaces/{id}/actions/unlock",
        )
        .flag(id("Workspace ID (ws-...)"))
        .columns(&["name", "locked"]),
        CommandSpec::action(
            "workspace force-unlock",
            "Unlock a workspace locked by another user or run",
            "/workspaces/{id}/actions/force-unlock",
        )
        .flag(id("Workspace ID (ws-...)"))
        .columns(&["name", "locked"]),
        CommandSpec::list(
            "workspace resource list",
            "List resources managed by a workspace",
            "/workspaces/{workspace-id}/resources",
        )
        .flag(FlagSpec::path("workspace-id", "Workspace ID (ws-...)"))
        .columns(&["address", "provider-type", "module"]),
    ]
}

fn tag_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "workspace tag list",
            "List the tags of a workspace",
            "/workspaces/{id}/relationships/tags",
        )
        .flag(id("Workspace ID (ws-...)"))
        .columns(&["name"]),
        CommandSpec::action(
            "workspace tag add",
            "Add tags to a workspace",
            "/workspaces/{id}/relationships/tags",
        )
        .flag(id("Workspace ID (ws-...)"))
        .flag(FlagSpec::local("tags", "Tag names, comma separated").list().required())
        .named_list("tags", "tags")
        .done("Tags added"),
        CommandSpec::delete(
            "workspace tag remove",
            "Remove tags from a workspace",
            "/workspaces/{id}/relationships/tags",
        )
        .flag(id("Workspace ID (ws-...)"))
        .flag(FlagSpec::local("ids", "Tag IDs, comma separated").list().required())
        .id_list("ids", "tags")
        .done("Tags removed"),
    ]
}

/// Flags shared by workspace variables and variable set variables
pub(super) fn variable_attributes(spec: CommandSpec, creating: bool) -> CommandSpec {
    let key = FlagSpec::attr("key", "Variable name");
    let category = FlagSpec::attr("category", "Variable kind").one_of(VARIABLE_CATEGORIES);
    let (key, category) = if creating {
        (key.required(), category.default_value("terraform"))
    } else {
        (key, category)
    };
    spec.flag(key)
        .flag(FlagSpec::attr("value", "Variable value"))
        .flag(FlagSpec::attr("description", "Variable description"))
        .flag(category)
        .flag(FlagSpec::attr("hcl", "Parse the value as HCL").boolean())
        .flag(FlagSpec::attr("sensitive", "Hide the value once written").boolean())
}

fn variable_commands() -> Vec<CommandSpec> {
    let workspace_id = || FlagSpec::path("workspace-id", "Workspace ID (ws-...)");
    vec![
        CommandSpec::list(
            "variable list",
            "List workspace variables",
            "/workspaces/{workspace-id}/vars",
        )
        .flag(workspace_id())
        .columns(VARIABLE_COLUMNS),
        variable_attributes(
            CommandSpec::create(
                "variable create",
                "Create a workspace variable",
                "/workspaces/{workspace-id}/vars",
                "vars",
            )
            .flag(workspace_id()),
            true,
        )
        .columns(VARIABLE_COLUMNS),
        variable_attributes(
            CommandSpec::update(
                "variable update",
                "Update a workspace variable",
                "/workspaces/{workspace-id}/vars/{id}",
                "vars",
            )
            .flag(workspace_id())
            .flag(id("Variable ID (var-...)")),
            false,
        )
        .columns(VARIABLE_COLUMNS),
        CommandSpec::delete(
            "variable delete",
            "Delete a workspace variable",
            "/workspaces/{workspace-id}/vars/{id}",
        )
        .flag(workspace_id())
        .flag(id("Variable ID (var-...)"))
        .done("Variable deleted"),
    ]
}

fn runtask_commands() -> Vec<CommandSpec> {
    let workspace_id = || FlagSpec::path("workspace-id", "Workspace ID (ws-...)");
    let stages = || {
        FlagSpec::attr(
            "stages",
            "Stages to run in: pre_plan, post_plan, pre_apply, post_apply (comma separated)",
        )
        .list()
    };
    vec![
        CommandSpec::list(
            "workspace runtask list",
            "List run tasks attached to a workspace",
            "/workspaces/{workspace-id}/tasks",
        )
        .flag(workspace_id())
        .columns(RUNTASK_COLUMNS),
        CommandSpec::create(
            "workspace runtask create",
            "Attach a run task to a workspace",
            "/workspaces/{workspace-id}/tasks",
            "workspace-tasks",
        )
        .flag(workspace_id())
        .flag(FlagSpec::relationship("task-id", "task", "tasks", "Run task ID (task-...)").required())
        .flag(
            FlagSpec::attr("enforcement-level", "What a failed task does")
                .one_of(ENFORCEMENT_LEVELS)
                .required(),
        )
        .flag(stages())
        .columns(RUNTASK_COLUMNS),
        CommandSpec::read(
            "workspace runtask read",
            "Show a run task attachment",
            "/workspaces/{workspace-id}/tasks/{id}",
        )
        .flag(workspace_id())
        .flag(id("Workspace task ID (wstask-...)"))
        .columns(RUNTASK_COLUMNS),
        CommandSpec::update(
            "workspace runtask update",
            "Update a run task attachment",
            "/workspaces/{workspace-id}/tasks/{id}",
            "workspace-tasks",
        )
        .flag(workspace_id())
        .flag(id("Workspace task ID (wstask-...)"))
        .flag(FlagSpec::attr("enforcement-level", "What a failed task does").one_of(ENFORCEMENT_LEVELS))
        .flag(stages())
        .columns(RUNTASK_COLUMNS),
        CommandSpec::delete(
            "workspace runtask delete",
            "Detach a run task from a workspace",
            "/workspaces/{workspace-id}/tasks/{id}",
        )
        .flag(workspace_id())
        .flag(id("Workspace task ID (wstask-...)"))
        .done("Run task detached"),
    ]
}

fn notification_settings(spec: CommandSpec) -> CommandSpec {
    spec.flag(FlagSpec::attr("enabled", "Send notifications").boolean())
        .flag(FlagSpec::attr("url", "Destination URL (generic, slack, microsoft-teams)"))
        .flag(FlagSpec::attr("token", "Token sent with generic notifications"))
        .flag(FlagSpec::attr("triggers", "Run events to notify on, comma separated").list())
        .flag(FlagSpec::attr("email-addresses", "Recipients for email notifications").list())
}

fn notification_commands() -> Vec<CommandSpec> {
    let workspace_id = || FlagSpec::path("workspace-id", "Workspace ID (ws-...)");
    let config_id = || id("Notification configuration ID (nc-...)");
    vec![
        CommandSpec::list(
            "workspace notification list",
            "List notification configurations of a workspace",
            "/workspaces/{workspace-id}/notification-configurations",
        )
        .flag(workspace_id())
        .columns(NOTIFICATION_COLUMNS),
        notification_settings(
            CommandSpec::create(
                "workspace notification create",
                "Create a notification configuration",
                "/workspaces/{workspace-id}/notification-configurations",
                "notification-configurations",
            )
            .flag(workspace_id())
            .flag(FlagSpec::attr("name", "Configuration name").required())
            .flag(
                FlagSpec::attr("destination-type", "Where notifications go")
                    .one_of(DESTINATION_TYPES)
                    .required(),
            ),
        )
        .columns(NOTIFICATION_COLUMNS),
        CommandSpec::read(
            "workspace notification read",
            "Show a notification configuration",
            "/notification-configurations/{id}",
        )
        .flag(config_id())
        .columns(NOTIFICATION_COLUMNS),
        notification_settings(
            CommandSpec::update(
                "workspace notification update",
                "Update a notification configuration",
                "/notification-configurations/{id}",
                "notification-configurations",
            )
            .flag(config_id())
            .flag(FlagSpec::attr("name", "Configuration name")),
        )
        .columns(NOTIFICATION_COLUMNS),
        CommandSpec::delete(
            "workspace notification delete",
            "Delete a notification configuration",
            "/notification-configurations/{id}",
        )
        .flag(config_id())
        .done("Notification configuration deleted"),
        CommandSpec::action(
            "workspace notification verify",
            "Send a test notification",
            "/notification-configurations/{id}/actions/verify",
        )
        .flag(config_id())
        .columns(NOTIFICATION_COLUMNS),
    ]
}
