//! Translate API resource prefixes and actions into command names
//!
//! The resource table uses flat prefixes (`workspacetag`, `teamaccess`) while
//! commands are hierarchical (`workspace tag`, `team access`). These tables are
//! the irregular part of that mapping and are kept as explicit data.

/// Raw resource prefix -> canonical command namespace
pub const NAMESPACE_ALIASES: &[(&str, &str)] = &[
    ("organizationmembership", "organization membership"),
    ("organizationtoken", "organization token"),
    ("organizationtag", "organization tag"),
    ("usertoken", "user token"),
    ("workspacetag", "workspace tag"),
    ("workspaceresource", "workspace resource"),
    ("workspaceruntask", "workspace runtask"),
    ("notificationconfiguration", "workspace notification"),
    ("variablesetvariable", "variableset variable"),
    ("teamaccess", "team access"),
    ("teamprojectaccess", "team project access"),
    ("teammember", "team member"),
    ("teamtoken", "team token"),
    ("comment", "run comment"),
    ("runtask", "run task"),
    ("runtrigger", "run trigger"),
    ("policysetparameter", "policyset parameter"),
    ("policyevaluation", "policy evaluation"),
    ("sshkey", "ssh key"),
    ("oauthclient", "oauth client"),
    ("oauthtoken", "oauth token"),
    ("registrymodule", "registry module"),
    ("registrymoduleversion", "registry module version"),
    ("registryprovider", "registry provider"),
    ("registryproviderversion", "registry provider version"),
    ("registryproviderplatform", "registry provider platform"),
    ("gpgkey", "registry gpgkey"),
    ("awsoidcconfiguration", "oidc aws"),
    ("azureoidcconfiguration", "oidc azure"),
    ("gcpoidcconfiguration", "oidc gcp"),
    ("vaultoidcconfiguration", "oidc vault"),
    ("stackconfiguration", "stack configuration"),
];

/// `(raw prefix, action)` -> commands that satisfy it, for verbs that do not follow the namespace
pub const VERB_OVERRIDES: &[(&str, &str, &[&str])] = &[
    ("workspacetag", "create", &["workspace tag add"]),
    ("workspacetag", "delete", &["workspace tag remove"]),
    ("teammember", "create", &["team member add"]),
    ("teammember", "delete", &["team member remove"]),
    ("variableset", "apply-workspaces", &["variableset apply"]),
    ("variableset", "apply-projects", &["variableset apply"]),
    ("variableset", "apply-stacks", &["variableset apply"]),
    ("variableset", "remove-workspaces", &["variableset remove"]),
    ("variableset", "remove-projects", &["variableset remove"]),
    ("variableset", "remove-stacks", &["variableset remove"]),
];

/// Prefix whose commands are flat `token-<action>` verbs under `agentpool`
const AGENTPOOL_TOKEN: &str = "agentpool_token";

/// Canonical namespace for a raw prefix; unknown prefixes are already canonical
pub fn canonical_namespace(raw_prefix: &str) -> &str {
    NAMESPACE_ALIASES
        .iter()
        .find(|(raw, _)| *raw == raw_prefix)
        .map(|(_, ns)| *ns)
        .unwrap_or(raw_prefix)
}

/// Canonical namespace for a legacy flat command word, if it is one
pub fn legacy_namespace(word: &str) -> Option<&'static str> {
    NAMESPACE_ALIASES
        .iter()
        .find(|(raw, _)| *raw == word)
        .map(|(_, ns)| *ns)
}

/// Command names that would cover `action` on `raw_prefix`; any one registered is enough
pub fn resolve(raw_prefix: &str, action: &str) -> Vec<String> {
    if raw_prefix == AGENTPOOL_TOKEN {
        return vec![format!("agentpool token-{}", action)];
    }

    if let Some((_, _, names)) = VERB_OVERRIDES
        .iter()
        .find(|(raw, verb, _)| *raw == raw_prefix && *verb == action)
    {
        return names.iter().map(|n| n.to_string()).collect();
    }

    let namespace = canonical_namespace(raw_prefix);
    let mut candidates = vec![format!("{} {}", namespace, action)];
    if action == "read" {
        candidates.push(format!("{} show", namespace));
    }
    candidates
}
