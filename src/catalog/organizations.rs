//! Organizations, memberships, tokens, tags and the current user

use super::{id, organization, search};
use crate::commands::{CommandSpec, FlagSpec};

const ORGANIZATION_COLUMNS: &[&str] = &["email", "plan-identifier", "created-at"];
const MEMBERSHIP_COLUMNS: &[&str] = &["email", "status", "relationships.user.data.id"];
const TOKEN_COLUMNS: &[&str] = &["description", "created-at", "last-used-at", "expired-at"];
const COLLABORATOR_AUTH_POLICIES: &[&str] = &["password", "two_factor_mandatory"];
const EXECUTION_MODES: &[&str] = &["remote", "local", "agent"];

pub fn commands() -> Vec<CommandSpec> {
    let mut commands = organization_commands();
    commands.extend(membership_commands());
    commands.extend(token_commands());
    commands
}

fn name_path() -> FlagSpec {
    FlagSpec::path("name", "Organization name")
}

fn settings(spec: CommandSpec) -> CommandSpec {
    spec.flag(FlagSpec::attr("session-timeout", "Session timeout after inactivity, in minutes").int())
        .flag(FlagSpec::attr("session-remember", "Session expiration, in minutes").int())
        .flag(
            FlagSpec::attr("collaborator-auth-policy", "Authentication policy")
                .one_of(COLLABORATOR_AUTH_POLICIES),
        )
        .flag(FlagSpec::attr("cost-estimation-enabled", "Enable cost estimation").boolean())
        .flag(FlagSpec::attr("assessments-enforced", "Enforce health assessments").boolean())
        .flag(
            FlagSpec::attr("default-execution-mode", "Execution mode for new workspaces")
                .one_of(EXECUTION_MODES),
        )
}

fn organization_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list("organization list", "List organizations", "/organizations")
            .flag(search("q"))
            .columns(&["name", "email", "created-at"]),
        settings(
            CommandSpec::create(
                "organization create",
                "Create an organization",
                "/organizations",
                "organizations",
            )
            .flag(FlagSpec::attr("name", "Organization name").required())
            .flag(FlagSpec::attr("email", "Admin email address").required()),
        )
        .columns(ORGANIZATION_COLUMNS),
        CommandSpec::read(
            "organization read",
            "Show an organization",
            "/organizations/{name}",
        )
        .flag(name_path())
        .columns(ORGANIZATION_COLUMNS),
        settings(
            CommandSpec::update(
                "organization update",
                "Update organization settings",
                "/organizations/{name}",
                "organizations",
            )
            .flag(name_path())
            .flag(FlagSpec::attr_as("new-name", "name", "Rename the organization"))
            .flag(FlagSpec::attr("email", "Admin email address")),
        )
        .columns(ORGANIZATION_COLUMNS),
        CommandSpec::delete(
            "organization delete",
            "Delete an organization",
            "/organizations/{name}",
        )
        .flag(name_path())
        .done("Organization deleted"),
        CommandSpec::read(
            "organization entitlements",
            "Show the features an organization is entitled to",
            "/organizations/{name}/entitlement-set",
        )
        .flag(name_path()),
        CommandSpec::list(
            "organization tag list",
            "List workspace tags used in an organization",
            "/organizations/{organization}/tags",
        )
        .flag(organization())
        .flag(search("q"))
        .columns(&["name", "instance-count"]),
        CommandSpec::delete(
            "organization tag delete",
            "Delete tags from an organization",
            "/organizations/{organization}/tags",
        )
        .flag(organization())
        .flag(FlagSpec::local("ids", "Tag IDs, comma separated").list().required())
        .id_list("ids", "tags")
        .done("Tags deleted"),
        CommandSpec::read("account show", "Show the current user", "/account/details")
            .columns(&["username", "email", "is-service-account", "two-factor.enabled"]),
    ]
}

fn membership_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "organization membership list",
            "List organization memberships",
            "/organizations/{organization}/organization-memberships",
        )
        .flag(organization())
        .flag(FlagSpec::query("email", "filter[email]", "Only show these email addresses"))
        .flag(
            FlagSpec::query("status", "filter[status]", "Only show memberships in this state")
                .one_of(&["invited", "active"]),
        )
        .columns(MEMBERSHIP_COLUMNS),
        CommandSpec::create(
            "organization membership create",
            "Invite a user to an organization",
            "/organizations/{organization}/organization-memberships",
            "organization-memberships",
        )
        .flag(organization())
        .flag(FlagSpec::attr("email", "Email address to invite").required())
        .columns(MEMBERSHIP_COLUMNS),
        CommandSpec::read(
            "organization membership read",
            "Show an organization membership",
            "/organization-memberships/{id}",
        )
        .flag(id("Membership ID (ou-...)"))
        .columns(MEMBERSHIP_COLUMNS),
        CommandSpec::delete(
            "organization membership delete",
            "Remove a user from an organization",
            "/organization-memberships/{id}",
        )
        .flag(id("Membership ID (ou-...)"))
        .done("Membership deleted"),
    ]
}

fn token_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::create(
            "organization token create",
            "Create or regenerate the organization token",
            "/organizations/{organization}/authentication-token",
            "authentication-token",
        )
        .flag(organization())
        .flag(FlagSpec::attr("expired-at", "Expiry (RFC 3339 or YYYY-MM-DD)").date())
        .columns(&["token", "expired-at", "created-at"]),
        CommandSpec::read(
            "organization token read",
            "Show the organization token",
            "/organizations/{organization}/authentication-token",
        )
        .flag(organization())
        .columns(&["created-at", "last-used-at", "expired-at"]),
        CommandSpec::delete(
            "organization token delete",
            "Delete the organization token",
            "/organizations/{organization}/authentication-token",
        )
        .flag(organization())
        .done("Organization token deleted"),
        CommandSpec::list(
            "user token list",
            "List a user's API tokens",
            "/users/{user-id}/authentication-tokens",
        )
        .flag(FlagSpec::path("user-id", "User ID (user-...)"))
        .columns(TOKEN_COLUMNS),
        CommandSpec::create(
            "user token create",
            "Create a user API token",
            "/users/{user-id}/authentication-tokens",
            "authentication-tokens",
        )
        .flag(FlagSpec::path("user-id", "User ID (user-...)"))
        .flag(FlagSpec::attr("description", "Token description"))
        .flag(FlagSpec::attr("expired-at", "Expiry (RFC 3339 or YYYY-MM-DD)").date())
        .columns(&["token", "description", "expired-at"]),
        CommandSpec::read(
            "user token read",
            "Show a user API token",
            "/authentication-tokens/{id}",
        )
        .flag(id("Token ID (at-...)"))
        .columns(TOKEN_COLUMNS),
        CommandSpec::delete(
            "user token delete",
            "Delete a user API token",
            "/authentication-tokens/{id}",
        )
        .flag(id("Token ID (at-...)"))
        .done("Token deleted"),
    ]
}
