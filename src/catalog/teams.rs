//! Projects, teams and team permissions

use super::{id, organization, search};
use crate::commands::{CommandSpec, FlagSpec};

const PROJECT_COLUMNS: &[&str] = &["name", "description", "created-at"];
const TEAM_COLUMNS: &[&str] = &["name", "visibility", "users-count", "sso-team-id"];
const ACCESS_COLUMNS: &[&str] = &[
    "access",
    "relationships.team.data.id",
    "relationships.workspace.data.id",
];
const PROJECT_ACCESS_COLUMNS: &[&str] = &[
    "access",
    "relationships.team.data.id",
    "relationships.project.data.id",
];

const VISIBILITIES: &[&str] = &["secret", "organization"];
const WORKSPACE_ACCESS: &[&str] = &["read", "plan", "write", "admin", "custom"];
const PROJECT_ACCESS: &[&str] = &["read", "write", "maintain", "admin", "custom"];

pub fn commands() -> Vec<CommandSpec> {
    let mut commands = project_commands();
    commands.extend(team_commands());
    commands.extend(access_commands());
    commands.extend(project_access_commands());
    commands.extend(member_commands());
    commands.extend(token_commands());
    commands
}

fn project_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "project list",
            "List projects in an organization",
            "/organizations/{organization}/projects",
        )
        .flag(organization())
        .flag(search("q"))
        .columns(PROJECT_COLUMNS),
        CommandSpec::create(
            "project create",
            "Create a project",
            "/organizations/{organization}/projects",
            "projects",
        )
        .flag(organization())
        .flag(FlagSpec::attr("name", "Project name").required())
        .flag(FlagSpec::attr("description", "Project description"))
        .columns(PROJECT_COLUMNS),
        CommandSpec::read("project read", "Show a project", "/projects/{id}")
            .flag(id("Project ID (prj-...)"))
            .columns(PROJECT_COLUMNS),
        CommandSpec::update(
            "project update",
            "Update a project",
            "/projects/{id}",
            "projects",
        )
        .flag(id("Project ID (prj-...)"))
        .flag(FlagSpec::attr("name", "Project name"))
        .flag(FlagSpec::attr("description", "Project description"))
        .columns(PROJECT_COLUMNS),
        CommandSpec::delete("project delete", "Delete an empty project", "/projects/{id}")
            .flag(id("Project ID (prj-...)"))
            .done("Project deleted"),
    ]
}

fn team_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "team list",
            "List teams in an organization",
            "/organizations/{organization}/teams",
        )
        .flag(organization())
        .flag(search("q"))
        .columns(TEAM_COLUMNS),
        CommandSpec::create(
            "team create",
            "Create a team",
            "/organizations/{organization}/teams",
            "teams",
        )
        .flag(organization())
        .flag(FlagSpec::attr("name", "Team name").required())
        .flag(FlagSpec::attr("visibility", "Who can see the team").one_of(VISIBILITIES))
        .flag(FlagSpec::attr("sso-team-id", "SSO team identifier"))
        .columns(TEAM_COLUMNS),
        CommandSpec::read("team read", "Show a team", "/teams/{id}")
            .flag(id("Team ID (team-...)"))
            .columns(TEAM_COLUMNS),
        CommandSpec::update("team update", "Update a team", "/teams/{id}", "teams")
            .flag(id("Team ID (team-...)"))
            .flag(FlagSpec::attr("name", "Team name"))
            .flag(FlagSpec::attr("visibility", "Who can see the team").one_of(VISIBILITIES))
            .flag(FlagSpec::attr("sso-team-id", "SSO team identifier"))
            .columns(TEAM_COLUMNS),
        CommandSpec::delete("team delete", "Delete a team", "/teams/{id}")
            .flag(id("Team ID (team-...)"))
            .done("Team deleted"),
    ]
}

/// Custom permission flags for workspace access
fn workspace_permissions(spec: CommandSpec) -> CommandSpec {
    spec.flag(FlagSpec::attr("runs", "Run permission (custom access)").one_of(&["read", "plan", "apply"]))
        .flag(FlagSpec::attr("variables", "Variable permission (custom access)").one_of(&["none", "read", "write"]))
        .flag(
            FlagSpec::attr("state-versions", "State permission (custom access)")
                .one_of(&["none", "read-outputs", "read", "write"]),
        )
        .flag(FlagSpec::attr("sentinel-mocks", "Sentinel mock permission (custom access)").one_of(&["none", "read"]))
        .flag(FlagSpec::attr("workspace-locking", "Allow locking (custom access)").boolean())
}

fn access_commands() -> Vec<CommandSpec> {
    let access_id = || id("Team access ID (tws-...)");
    vec![
        CommandSpec::list(
            "team access list",
            "List team access to a workspace",
            "/team-workspaces",
        )
        .flag(
            FlagSpec::query("workspace-id", "filter[workspace][id]", "Workspace ID (ws-...)").required(),
        )
        .columns(ACCESS_COLUMNS),
        workspace_permissions(
            CommandSpec::create(
                "team access create",
                "Grant a team access to a workspace",
                "/team-workspaces",
                "team-workspaces",
            )
            .flag(FlagSpec::attr("access", "Access level").one_of(WORKSPACE_ACCESS).required())
            .flag(FlagSpec::relationship("team-id", "team", "teams", "Team ID (team-...)").required())
            .flag(
                FlagSpec::relationship("workspace-id", "workspace", "workspaces", "Workspace ID (ws-...)")
                    .required(),
            ),
        )
        .columns(ACCESS_COLUMNS),
        CommandSpec::read("team access read", "Show team access", "/team-workspaces/{id}")
            .flag(access_id())
            .columns(ACCESS_COLUMNS),
        workspace_permissions(
            CommandSpec::update(
                "team access update",
                "Change team access to a workspace",
                "/team-workspaces/{id}",
                "team-workspaces",
            )
            .flag(access_id())
            .flag(FlagSpec::attr("access", "Access level").one_of(WORKSPACE_ACCESS)),
        )
        .columns(ACCESS_COLUMNS),
        CommandSpec::delete(
            "team access delete",
            "Revoke team access to a workspace",
            "/team-workspaces/{id}",
        )
        .flag(access_id())
        .done("Team access removed"),
    ]
}

fn project_access_commands() -> Vec<CommandSpec> {
    let access_id = || id("Team project access ID (tprj-...)");
    vec![
        CommandSpec::list(
            "team project access list",
            "List team access to a project",
            "/team-projects",
        )
        .flag(FlagSpec::query("project-id", "filter[project][id]", "Project ID (prj-...)").required())
        .columns(PROJECT_ACCESS_COLUMNS),
        CommandSpec::create(
            "team project access create",
            "Grant a team access to a project",
            "/team-projects",
            "team-projects",
        )
        .flag(FlagSpec::attr("access", "Access level").one_of(PROJECT_ACCESS).required())
        .flag(FlagSpec::relationship("team-id", "team", "teams", "Team ID (team-...)").required())
        .flag(FlagSpec::relationship("project-id", "project", "projects", "Project ID (prj-...)").required())
        .columns(PROJECT_ACCESS_COLUMNS),
        CommandSpec::read(
            "team project access read",
            "Show team access to a project",
            "/team-projects/{id}",
        )
        .flag(access_id())
        .columns(PROJECT_ACCESS_COLUMNS),
        CommandSpec::update(
            "team project access update",
            "Change team access to a project",
            "/team-projects/{id}",
            "team-projects",
        )
        .flag(access_id())
        .flag(FlagSpec::attr("access", "Access level").one_of(PROJECT_ACCESS))
        .columns(PROJECT_ACCESS_COLUMNS),
        CommandSpec::delete(
            "team project access delete",
            "Revoke team access to a project",
            "/team-projects/{id}",
        )
        .flag(access_id())
        .done("Team project access removed"),
    ]
}

fn member_commands() -> Vec<CommandSpec> {
    let team_id = || FlagSpec::path("team-id", "Team ID (team-...)");
    vec![
        CommandSpec::read("team member list", "List the members of a team", "/teams/{team-id}")
            .flag(team_id())
            .included("users")
            .columns(&["username", "email"]),
        CommandSpec::action(
            "team member add",
            "Add users to a team",
            "/teams/{team-id}/relationships/users",
        )
        .flag(team_id())
        .flag(FlagSpec::local("usernames", "Usernames, comma separated").list().required())
        .id_list("usernames", "users")
        .done("Members added"),
        CommandSpec::delete(
            "team member remove",
            "Remove users from a team",
            "/teams/{team-id}/relationships/users",
        )
        .flag(team_id())
        .flag(FlagSpec::local("usernames", "Usernames, comma separated").list().required())
        .id_list("usernames", "users")
        .done("Members removed"),
    ]
}

fn token_commands() -> Vec<CommandSpec> {
    let team_id = || FlagSpec::path("team-id", "Team ID (team-...)");
    vec![
        CommandSpec::create(
            "team token create",
            "Create or regenerate a team token",
            "/teams/{team-id}/authentication-token",
            "authentication-token",
        )
        .flag(team_id())
        .flag(FlagSpec::attr("expired-at", "Expiry (RFC 3339 or YYYY-MM-DD)").date())
        .columns(&["token", "expired-at", "created-at"]),
        CommandSpec::read(
            "team token read",
            "Show a team token",
            "/teams/{team-id}/authentication-token",
        )
        .flag(team_id())
        .columns(&["created-at", "last-used-at", "expired-at"]),
        CommandSpec::delete(
            "team token delete",
            "Delete a team token",
            "/teams/{team-id}/authentication-token",
        )
        .flag(team_id())
        .done("Team token deleted"),
    ]
}
