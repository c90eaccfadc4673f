//! SSH keys and VCS connections

use super::{id, organization};
use crate::commands::{CommandSpec, FlagSpec};

const CLIENT_COLUMNS: &[&str] = &["name", "service-provider", "http-url", "created-at"];
const OAUTH_TOKEN_COLUMNS: &[&str] = &["service-provider-user", "has-ssh-key", "created-at"];

const SERVICE_PROVIDERS: &[&str] = &[
    "github",
    "github_enterprise",
    "gitlab_hosted",
    "gitlab_community_edition",
    "gitlab_enterprise_edition",
    "bitbucket_hosted",
    "bitbucket_server",
    "bitbucket_data_center",
    "ado_services",
    "ado_server",
];

pub fn commands() -> Vec<CommandSpec> {
    let mut commands = ssh_key_commands();
    commands.extend(oauth_client_commands());
    commands.extend(oauth_token_commands());
    commands
}

fn ssh_key_commands() -> Vec<CommandSpec> {
    let key_id = || id("SSH key ID (sshkey-...)");
    vec![
        CommandSpec::list(
            "ssh key list",
            "List SSH keys in an organization",
            "/organizations/{organization}/ssh-keys",
        )
        .flag(organization())
        .columns(&["name"]),
        CommandSpec::create(
            "ssh key create",
            "Upload an SSH private key",
            "/organizations/{organization}/ssh-keys",
            "ssh-keys",
        )
        .flag(organization())
        .flag(FlagSpec::attr("name", "Key name").required())
        .flag(FlagSpec::attr("value", "PEM-encoded private key").required())
        .columns(&["name"]),
        CommandSpec::read("ssh key read", "Show an SSH key", "/ssh-keys/{id}")
            .flag(key_id())
            .columns(&["name"]),
        CommandSpec::update("ssh key update", "Rename an SSH key", "/ssh-keys/{id}", "ssh-keys")
            .flag(key_id())
            .flag(FlagSpec::attr("name", "Key name").required())
            .columns(&["name"]),
        CommandSpec::delete("ssh key delete", "Delete an SSH key", "/ssh-keys/{id}")
            .flag(key_id())
            .done("SSH key deleted"),
    ]
}

fn oauth_client_commands() -> Vec<CommandSpec> {
    let client_id = || id("OAuth client ID (oc-...)");
    vec![
        CommandSpec::list(
            "oauth client list",
            "List VCS connections in an organization",
            "/organizations/{organization}/oauth-clients",
        )
        .flag(organization())
        .columns(CLIENT_COLUMNS),
        CommandSpec::create(
            "oauth client create",
            "Connect a VCS provider",
            "/organizations/{organization}/oauth-clients",
            "oauth-clients",
        )
        .flag(organization())
        .flag(
            FlagSpec::attr("service-provider", "VCS provider")
                .one_of(SERVICE_PROVIDERS)
                .required(),
        )
        .flag(FlagSpec::attr("name", "Display name"))
        .flag(FlagSpec::attr("http-url", "VCS provider homepage").required())
        .flag(FlagSpec::attr("api-url", "VCS provider API endpoint").required())
        .flag(FlagSpec::attr("oauth-token-string", "Token for the VCS provider"))
        .flag(FlagSpec::attr("private-key", "Private key (Azure DevOps Server)"))
        .columns(CLIENT_COLUMNS),
        CommandSpec::read("oauth client read", "Show a VCS connection", "/oauth-clients/{id}")
            .flag(client_id())
            .columns(CLIENT_COLUMNS),
        CommandSpec::update(
            "oauth client update",
            "Update a VCS connection",
            "/oauth-clients/{id}",
            "oauth-clients",
        )
        .flag(client_id())
        .flag(FlagSpec::attr("name", "Display name"))
        .flag(FlagSpec::attr("oauth-token-string", "Token for the VCS provider"))
        .columns(CLIENT_COLUMNS),
        CommandSpec::delete(
            "oauth client delete",
            "Delete a VCS connection",
            "/oauth-clients/{id}",
        )
        .flag(client_id())
        .done("OAuth client deleted"),
    ]
}

fn oauth_token_commands() -> Vec<CommandSpec> {
    let token_id = || id("OAuth token ID (ot-...)");
    vec![
        CommandSpec::list(
            "oauth token list",
            "List the tokens of a VCS connection",
            "/oauth-clients/{oauth-client-id}/oauth-tokens",
        )
        .flag(FlagSpec::path("oauth-client-id", "OAuth client ID (oc-...)"))
        .columns(OAUTH_TOKEN_COLUMNS),
        CommandSpec::read("oauth token read", "Show an OAuth token", "/oauth-tokens/{id}")
            .flag(token_id())
            .columns(OAUTH_TOKEN_COLUMNS),
        CommandSpec::update(
            "oauth token update",
            "Set the SSH key of an OAuth token",
            "/oauth-tokens/{id}",
            "oauth-tokens",
        )
        .flag(token_id())
        .flag(FlagSpec::attr("ssh-key", "Private SSH key").required())
        .columns(OAUTH_TOKEN_COLUMNS),
        CommandSpec::delete("oauth token delete", "Delete an OAuth token", "/oauth-tokens/{id}")
            .flag(token_id())
            .done("OAuth token deleted"),
    ]
}
