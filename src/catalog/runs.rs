//! Runs and their stages, configuration versions, state versions and triggers

use super::{id, organization};
use crate::commands::{CommandSpec, FlagKind, FlagSpec};

const RUN_COLUMNS: &[&str] = &["status", "source", "message", "is-destroy", "created-at"];
const PLAN_COLUMNS: &[&str] = &[
    "status",
    "resource-additions",
    "resource-changes",
    "resource-destructions",
];
const APPLY_COLUMNS: &[&str] = &[
    "status",
    "resource-additions",
    "resource-changes",
    "resource-destructions",
];
const CONFIGURATION_COLUMNS: &[&str] = &["status", "source", "speculative", "auto-queue-runs"];
const STATE_COLUMNS: &[&str] = &["serial", "status", "terraform-version", "created-at"];
const TRIGGER_COLUMNS: &[&str] = &["workspace-name", "sourceable-name", "created-at"];
const TASK_COLUMNS: &[&str] = &["name", "url", "category", "enabled"];

const RUN_STATUSES: &[&str] = &[
    "pending",
    "planning",
    "planned",
    "cost_estimated",
    "policy_checked",
    "confirmed",
    "applying",
    "applied",
    "discarded",
    "errored",
    "canceled",
    "planned_and_finished",
];

pub fn commands() -> Vec<CommandSpec> {
    let mut commands = run_commands();
    commands.extend(stage_commands());
    commands.extend(configuration_commands());
    commands.extend(state_commands());
    commands.extend(trigger_commands());
    commands.extend(task_commands());
    commands
}

fn run_id() -> FlagSpec {
    id("Run ID (run-...)")
}

/// Run action with an optional `-comment`
fn run_action(name: &'static str, synopsis: &'static str, path: &'static str) -> CommandSpec {
    CommandSpec::action(name, synopsis, path)
        .flag(run_id())
        .flag(FlagSpec::attr("comment", "Comment recorded with the action"))
        .plain_body()
}

fn run_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "run list",
            "List runs of a workspace",
            "/workspaces/{workspace-id}/runs",
        )
        .flag(FlagSpec::path("workspace-id", "Workspace ID (ws-...)"))
        .flag(
            FlagSpec::query("status", "filter[status]", "Only show runs in this state")
                .one_of(RUN_STATUSES),
        )
        .columns(RUN_COLUMNS),
        CommandSpec::create("run create", "Queue a run", "/runs", "runs")
            .flag(
                FlagSpec::relationship("workspace-id", "workspace", "workspaces", "Workspace ID (ws-...)")
                    .required(),
            )
            .flag(FlagSpec::relationship(
                "configuration-version-id",
                "configuration-version",
                "configuration-versions",
                "Configuration version to run (default: latest)",
            ))
            .flag(FlagSpec::attr("message", "Run message"))
            .flag(FlagSpec::attr("is-destroy", "Destroy all managed resources").boolean())
            .flag(FlagSpec::attr("auto-apply", "Apply when the plan succeeds").boolean())
            .flag(FlagSpec::attr("plan-only", "Speculative plan only").boolean())
            .flag(FlagSpec::attr("refresh-only", "Only refresh state").boolean())
            .flag(FlagSpec::attr("target-addrs", "Resource addresses to target, comma separated").list())
            .columns(RUN_COLUMNS),
        CommandSpec::read("run read", "Show a run", "/runs/{id}")
            .flag(run_id())
            .columns(RUN_COLUMNS),
        run_action("run apply", "Apply a planned run", "/runs/{id}/actions/apply")
            .done("Apply queued"),
        run_action("run cancel", "Cancel a run", "/runs/{id}/actions/cancel")
            .done("Cancel requested"),
        run_action("run discard", "Discard a planned run", "/runs/{id}/actions/discard")
            .done("Run discarded"),
        CommandSpec::action(
            "run force-cancel",
            "Force a canceled run to stop",
            "/runs/{id}/actions/force-cancel",
        )
        .flag(run_id())
        .flag(FlagSpec::attr("comment", "Comment recorded with the action"))
        .plain_body()
        .done("Force cancel requested"),
        CommandSpec::action(
            "run force-execute",
            "Execute a pending run now, discarding runs ahead of it",
            "/runs/{id}/actions/force-execute",
        )
        .flag(run_id())
        .done("Run started"),
        CommandSpec::list(
            "run comment list",
            "List the comments on a run",
            "/runs/{run-id}/comments",
        )
        .flag(FlagSpec::path("run-id", "Run ID (run-...)"))
        .columns(&["body"]),
        CommandSpec::create(
            "run comment create",
            "Comment on a run",
            "/runs/{run-id}/comments",
            "comments",
        )
        .flag(FlagSpec::path("run-id", "Run ID (run-...)"))
        .flag(FlagSpec::attr("body", "Comment text").required())
        .columns(&["body"]),
        CommandSpec::read("run comment read", "Show a run comment", "/comments/{id}")
            .flag(id("Comment ID (wsc-...)"))
            .columns(&["body"]),
    ]
}

fn stage_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::read("plan read", "Show a plan", "/plans/{id}")
            .flag(id("Plan ID (plan-...)"))
            .columns(PLAN_COLUMNS),
        CommandSpec::read("apply read", "Show an apply", "/applies/{id}")
            .flag(id("Apply ID (apply-...)"))
            .columns(APPLY_COLUMNS),
        CommandSpec::read(
            "costestimate read",
            "Show a cost estimate",
            "/cost-estimates/{id}",
        )
        .flag(id("Cost estimate ID (ce-...)"))
        .columns(&[
            "status",
            "prior-monthly-cost",
            "proposed-monthly-cost",
            "delta-monthly-cost",
        ]),
    ]
}

fn configuration_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "configurationversion list",
            "List configuration versions of a workspace",
            "/workspaces/{workspace-id}/configuration-versions",
        )
        .flag(FlagSpec::path("workspace-id", "Workspace ID (ws-...)"))
        .columns(CONFIGURATION_COLUMNS),
        CommandSpec::create(
            "configurationversion create",
            "Create a configuration version and print its upload URL",
            "/workspaces/{workspace-id}/configuration-versions",
            "configuration-versions",
        )
        .flag(FlagSpec::path("workspace-id", "Workspace ID (ws-...)"))
        .flag(FlagSpec::attr("auto-queue-runs", "Queue a run once uploaded").boolean())
        .flag(FlagSpec::attr("speculative", "Only allow speculative plans").boolean())
        .columns(&["status", "speculative", "upload-url"]),
        CommandSpec::read(
            "configurationversion read",
            "Show a configuration version",
            "/configuration-versions/{id}",
        )
        .flag(id("Configuration version ID (cv-...)"))
        .columns(CONFIGURATION_COLUMNS),
    ]
}

fn state_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list("stateversion list", "List state versions", "/state-versions")
            .flag(
                FlagSpec::query("organization", "filter[organization][name]", "Organization name")
                    .required(),
            )
            .flag(
                FlagSpec::query("workspace", "filter[workspace][name]", "Workspace name")
                    .required(),
            )
            .columns(STATE_COLUMNS),
        CommandSpec::create(
            "stateversion create",
            "Upload a state file as a new state version",
            "/workspaces/{workspace-id}/state-versions",
            "state-versions",
        )
        .flag(FlagSpec::path("workspace-id", "Workspace ID (ws-...)"))
        .flag(
            FlagSpec::attr("state-file", "Path to the Terraform state file")
                .kind(FlagKind::StateFile)
                .required(),
        )
        .flag(FlagSpec::attr("serial", "Serial (default: read from the state file)").int())
        .flag(FlagSpec::attr("lineage", "Lineage (default: read from the state file)"))
        .flag(FlagSpec::attr("force", "Replace state even if lineage or serial conflict").boolean())
        .flag(FlagSpec::relationship("run-id", "run", "runs", "Run that produced the state"))
        .columns(STATE_COLUMNS),
        CommandSpec::read("stateversion read", "Show a state version", "/state-versions/{id}")
            .flag(id("State version ID (sv-...)"))
            .columns(STATE_COLUMNS),
        CommandSpec::list(
            "stateversion outputs",
            "List the outputs of a state version",
            "/state-versions/{id}/outputs",
        )
        .flag(id("State version ID (sv-...)"))
        .columns(&["name", "type", "sensitive", "value"]),
        CommandSpec::read(
            "stateversion current",
            "Show the current state version of a workspace",
            "/workspaces/{workspace-id}/current-state-version",
        )
        .flag(FlagSpec::path("workspace-id", "Workspace ID (ws-...)"))
        .columns(STATE_COLUMNS),
    ]
}

fn trigger_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "run trigger list",
            "List run triggers of a workspace",
            "/workspaces/{workspace-id}/run-triggers",
        )
        .flag(FlagSpec::path("workspace-id", "Workspace ID (ws-...)"))
        .flag(
            FlagSpec::query("type", "filter[run-trigger][type]", "Triggers into or out of the workspace")
                .one_of(&["inbound", "outbound"])
                .default_value("inbound"),
        )
        .columns(TRIGGER_COLUMNS),
        CommandSpec::create(
            "run trigger create",
            "Trigger runs in a workspace when another workspace applies",
            "/workspaces/{workspace-id}/run-triggers",
            "run-triggers",
        )
        .flag(FlagSpec::path("workspace-id", "Workspace ID (ws-...)"))
        .flag(
            FlagSpec::relationship("sourceable-id", "sourceable", "workspaces", "Source workspace ID (ws-...)")
                .required(),
        )
        .columns(TRIGGER_COLUMNS),
        CommandSpec::read("run trigger read", "Show a run trigger", "/run-triggers/{id}")
            .flag(id("Run trigger ID (rt-...)"))
            .columns(TRIGGER_COLUMNS),
        CommandSpec::delete("run trigger delete", "Delete a run trigger", "/run-triggers/{id}")
            .flag(id("Run trigger ID (rt-...)"))
            .done("Run trigger deleted"),
    ]
}

fn task_settings(spec: CommandSpec) -> CommandSpec {
    spec.flag(FlagSpec::attr("description", "Run task description"))
        .flag(FlagSpec::attr("hmac-key", "Key used to sign task requests"))
        .flag(FlagSpec::attr("enabled", "Whether the task runs").boolean())
}

fn task_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "run task list",
            "List run tasks in an organization",
            "/organizations/{organization}/tasks",
        )
        .flag(organization())
        .columns(TASK_COLUMNS),
        task_settings(
            CommandSpec::create(
                "run task create",
                "Create a run task",
                "/organizations/{organization}/tasks",
                "tasks",
            )
            .flag(organization())
            .flag(FlagSpec::attr("name", "Run task name").required())
            .flag(FlagSpec::attr("url", "Endpoint the task calls").required())
            .flag(FlagSpec::attr("category", "Resource category").default_value("task")),
        )
        .columns(TASK_COLUMNS),
        CommandSpec::read("run task read", "Show a run task", "/tasks/{id}")
            .flag(id("Run task ID (task-...)"))
            .columns(TASK_COLUMNS),
        task_settings(
            CommandSpec::update("run task update", "Update a run task", "/tasks/{id}", "tasks")
                .flag(id("Run task ID (task-...)"))
                .flag(FlagSpec::attr("name", "Run task name"))
                .flag(FlagSpec::attr("url", "Endpoint the task calls")),
        )
        .columns(TASK_COLUMNS),
        CommandSpec::delete("run task delete", "Delete a run task", "/tasks/{id}")
            .flag(id("Run task ID (task-...)"))
            .done("Run task deleted"),
    ]
}
