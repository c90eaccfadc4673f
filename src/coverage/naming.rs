//! File naming convention for per-command pages

use super::resolve::NAMESPACE_ALIASES;

/// Names whose file does not follow the general rule
const FILE_NAME_OVERRIDES: &[(&str, &str)] = &[
    ("registry module version create", "registrymodule_create_version"),
    ("registry module version delete", "registrymodule_delete_version"),
];

/// Multi-word namespaces, longest first so `registry provider version`
/// wins over `registry provider`
fn multi_word_namespaces() -> Vec<Vec<&'static str>> {
    let mut namespaces: Vec<Vec<&'static str>> = NAMESPACE_ALIASES
        .iter()
        .map(|(_, ns)| ns.split(' ').collect::<Vec<_>>())
        .filter(|words| words.len() > 1)
        .collect();
    namespaces.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    namespaces.dedup();
    namespaces
}

/// File stem for a command: `team access create` -> `teamaccess_create`,
/// `workspace force-unlock` -> `workspace_force_unlock`
pub fn expected_file_name(command_name: &str) -> String {
    if let Some((_, file)) = FILE_NAME_OVERRIDES
        .iter()
        .find(|(name, _)| *name == command_name)
    {
        return file.to_string();
    }

    let words: Vec<&str> = command_name
        .split([' ', '-'])
        .filter(|w| !w.is_empty())
        .collect();

    let namespace = multi_word_namespaces()
        .into_iter()
        .find(|ns| words.len() > ns.len() && words[..ns.len()] == ns[..]);

    let mut parts: Vec<String> = Vec::with_capacity(words.len());
    let rest = match &namespace {
        Some(ns) => {
            parts.push(ns.concat());
            &words[ns.len()..]
        }
        None => &words[..],
    };
    parts.extend(rest.iter().map(|w| w.to_string()));
    parts.join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_namespace() {
        assert_eq!(expected_file_name("workspace list"), "workspace_list");
        assert_eq!(expected_file_name("workspace force-unlock"), "workspace_force_unlock");
        assert_eq!(expected_file_name("agentpool token-list"), "agentpool_token_list");
    }

    #[test]
    fn test_multi_word_namespace_joined() {
        assert_eq!(expected_file_name("team access create"), "teamaccess_create");
        assert_eq!(expected_file_name("team project access read"), "teamprojectaccess_read");
        assert_eq!(expected_file_name("oidc aws update"), "oidcaws_update");
    }

    #[test]
    fn test_longest_namespace_first() {
        assert_eq!(
            expected_file_name("registry provider version create"),
            "registryproviderversion_create"
        );
        assert_eq!(
            expected_file_name("registry provider create"),
            "registryprovider_create"
        );
    }

    #[test]
    fn test_overrides() {
        assert_eq!(
            expected_file_name("registry module version create"),
            "registrymodule_create_version"
        );
        assert_eq!(
            expected_file_name("registry module version delete"),
            "registrymodule_delete_version"
        );
    }

    #[test]
    fn test_namespace_alone_is_not_joined() {
        assert_eq!(expected_file_name("team access"), "team_access");
    }
}
