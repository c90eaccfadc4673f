//! Agent pools, their tokens and agents

use super::{id, organization};
use crate::commands::{CommandSpec, FlagSpec};

const POOL_COLUMNS: &[&str] = &["name", "agent-count", "organization-scoped", "created-at"];
const TOKEN_COLUMNS: &[&str] = &["description", "created-at", "last-used-at"];
const AGENT_COLUMNS: &[&str] = &["name", "status", "ip-address", "last-ping-at"];

pub fn commands() -> Vec<CommandSpec> {
    let pool_id = || id("Agent pool ID (apool-...)");
    vec![
        CommandSpec::list(
            "agentpool list",
            "List agent pools in an organization",
            "/organizations/{organization}/agent-pools",
        )
        .flag(organization())
        .flag(FlagSpec::query("search", "q", "Only show pools matching this name"))
        .columns(POOL_COLUMNS),
        CommandSpec::create(
            "agentpool create",
            "Create an agent pool",
            "/organizations/{organization}/agent-pools",
            "agent-pools",
        )
        .flag(organization())
        .flag(FlagSpec::attr("name", "Agent pool name").required())
        .flag(FlagSpec::attr("organization-scoped", "Usable by every workspace").boolean())
        .columns(POOL_COLUMNS),
        CommandSpec::read("agentpool read", "Show an agent pool", "/agent-pools/{id}")
            .flag(pool_id())
            .columns(POOL_COLUMNS),
        CommandSpec::update(
            "agentpool update",
            "Update an agent pool",
            "/agent-pools/{id}",
            "agent-pools",
        )
        .flag(pool_id())
        .flag(FlagSpec::attr("name", "Agent pool name"))
        .flag(FlagSpec::attr("organization-scoped", "Usable by every workspace").boolean())
        .columns(POOL_COLUMNS),
        CommandSpec::delete("agentpool delete", "Delete an agent pool", "/agent-pools/{id}")
            .flag(pool_id())
            .done("Agent pool deleted"),
        CommandSpec::list(
            "agentpool token-list",
            "List the tokens of an agent pool",
            "/agent-pools/{id}/authentication-tokens",
        )
        .flag(pool_id())
        .columns(TOKEN_COLUMNS),
        CommandSpec::create(
            "agentpool token-create",
            "Create an agent token",
            "/agent-pools/{id}/authentication-tokens",
            "authentication-tokens",
        )
        .flag(pool_id())
        .flag(FlagSpec::attr("description", "Token description").required())
        .columns(&["token", "description", "created-at"]),
        CommandSpec::delete(
            "agentpool token-delete",
            "Delete an agent token",
            "/authentication-tokens/{token-id}",
        )
        .flag(FlagSpec::path("token-id", "Agent token ID (at-...)"))
        .done("Agent token deleted"),
        CommandSpec::list(
            "agent list",
            "List the agents of a pool",
            "/agent-pools/{agent-pool-id}/agents",
        )
        .flag(FlagSpec::path("agent-pool-id", "Agent pool ID (apool-...)"))
        .columns(AGENT_COLUMNS),
        CommandSpec::read("agent read", "Show an agent", "/agents/{id}")
            .flag(id("Agent ID (agent-...)"))
            .columns(AGENT_COLUMNS),
    ]
}
