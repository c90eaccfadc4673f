//! Private registry: modules, providers, provider versions, platforms and GPG keys

use super::organization;
use crate::commands::{CommandSpec, FlagSpec};

const MODULE_COLUMNS: &[&str] = &["name", "provider", "namespace", "registry-name", "status"];
const PROVIDER_COLUMNS: &[&str] = &["name", "namespace", "registry-name", "created-at"];
const VERSION_COLUMNS: &[&str] = &["version", "protocols", "key-id", "shasums-uploaded"];
const PLATFORM_COLUMNS: &[&str] = &["os", "arch", "filename", "shasum"];
const GPG_COLUMNS: &[&str] = &["key-id", "namespace", "created-at"];

const REGISTRY_NAMES: &[&str] = &["private", "public"];

const MODULE_PATH: &str =
    "/organizations/{organization}/registry-modules/{registry-name}/{namespace}/{name}/{provider}";
const PROVIDER_PATH: &str =
    "/organizations/{organization}/registry-providers/{registry-name}/{namespace}/{name}";
const VERSIONS_PATH: &str =
    "/organizations/{organization}/registry-providers/{registry-name}/{namespace}/{name}/versions";
const VERSION_PATH: &str =
    "/organizations/{organization}/registry-providers/{registry-name}/{namespace}/{name}/versions/{version}";
const PLATFORMS_PATH: &str = "/organizations/{organization}/registry-providers/{registry-name}/{namespace}/{name}/versions/{version}/platforms";
const PLATFORM_PATH: &str = "/organizations/{organization}/registry-providers/{registry-name}/{namespace}/{name}/versions/{version}/platforms/{os}/{arch}";
const GPG_KEYS_PATH: &str = "/api/registry/private/v2/gpg-keys";
const GPG_KEY_PATH: &str = "/api/registry/private/v2/gpg-keys/{namespace}/{key-id}";

pub fn commands() -> Vec<CommandSpec> {
    let mut commands = module_commands();
    commands.extend(provider_commands());
    commands.extend(provider_version_commands());
    commands.extend(platform_commands());
    commands.extend(gpg_key_commands());
    commands
}

fn registry_name_path() -> FlagSpec {
    FlagSpec::path("registry-name", "Registry the resource lives in")
        .one_of(REGISTRY_NAMES)
        .default_value("private")
}

/// Flags addressing one module
fn module_address(spec: CommandSpec) -> CommandSpec {
    spec.flag(organization())
        .flag(registry_name_path())
        .flag(FlagSpec::path("namespace", "Module namespace"))
        .flag(FlagSpec::path("name", "Module name"))
        .flag(FlagSpec::path("provider", "Module provider, e.g. aws"))
}

/// Flags addressing one provider
fn provider_address(spec: CommandSpec) -> CommandSpec {
    spec.flag(organization())
        .flag(registry_name_path())
        .flag(FlagSpec::path("namespace", "Provider namespace"))
        .flag(FlagSpec::path("name", "Provider name"))
}

fn module_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "registry module list",
            "List registry modules in an organization",
            "/organizations/{organization}/registry-modules",
        )
        .flag(organization())
        .flag(FlagSpec::query("search", "q", "Only show modules matching this text"))
        .flag(FlagSpec::query("provider", "filter[provider]", "Only show modules for this provider"))
        .columns(MODULE_COLUMNS),
        CommandSpec::create(
            "registry module create",
            "Create a module without a VCS connection",
            "/organizations/{organization}/registry-modules",
            "registry-modules",
        )
        .flag(organization())
        .flag(FlagSpec::attr("name", "Module name").required())
        .flag(FlagSpec::attr("provider", "Module provider, e.g. aws").required())
        .flag(FlagSpec::attr("namespace", "Module namespace (public registry)"))
        .flag(
            FlagSpec::attr("registry-name", "Registry to publish to")
                .one_of(REGISTRY_NAMES)
                .default_value("private"),
        )
        .columns(MODULE_COLUMNS),
        module_address(CommandSpec::read(
            "registry module read",
            "Show a registry module",
            MODULE_PATH,
        ))
        .columns(MODULE_COLUMNS),
        module_address(CommandSpec::delete(
            "registry module delete",
            "Delete a registry module and all its versions",
            MODULE_PATH,
        ))
        .done("Module deleted"),
        module_address(CommandSpec::create(
            "registry module version create",
            "Create a module version to upload",
            "/organizations/{organization}/registry-modules/{registry-name}/{namespace}/{name}/{provider}/versions",
            "registry-module-versions",
        ))
        .flag(FlagSpec::attr("version", "Semantic version").required())
        .flag(FlagSpec::attr("commit-sha", "Commit the version was built from"))
        .columns(&["version", "status", "source"]),
        module_address(CommandSpec::delete(
            "registry module version delete",
            "Delete one version of a registry module",
            "/organizations/{organization}/registry-modules/{registry-name}/{namespace}/{name}/{provider}/{version}",
        ))
        .flag(FlagSpec::path("version", "Version to delete"))
        .done("Module version deleted"),
    ]
}

fn provider_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::list(
            "registry provider list",
            "List registry providers in an organization",
            "/organizations/{organization}/registry-providers",
        )
        .flag(organization())
        .flag(FlagSpec::query("search", "q", "Only show providers matching this text"))
        .columns(PROVIDER_COLUMNS),
        CommandSpec::create(
            "registry provider create",
            "Create a registry provider",
            "/organizations/{organization}/registry-providers",
            "registry-providers",
        )
        .flag(organization())
        .flag(FlagSpec::attr("name", "Provider name").required())
        .flag(FlagSpec::attr("namespace", "Provider namespace").required())
        .flag(
            FlagSpec::attr("registry-name", "Registry to publish to")
                .one_of(REGISTRY_NAMES)
                .default_value("private"),
        )
        .columns(PROVIDER_COLUMNS),
        provider_address(CommandSpec::read(
            "registry provider read",
            "Show a registry provider",
            PROVIDER_PATH,
        ))
        .columns(PROVIDER_COLUMNS),
        provider_address(CommandSpec::delete(
            "registry provider delete",
            "Delete a registry provider",
            PROVIDER_PATH,
        ))
        .done("Provider deleted"),
    ]
}

fn provider_version_commands() -> Vec<CommandSpec> {
    vec![
        provider_address(CommandSpec::list(
            "registry provider version list",
            "List the versions of a provider",
            VERSIONS_PATH,
        ))
        .columns(VERSION_COLUMNS),
        provider_address(CommandSpec::create(
            "registry provider version create",
            "Create a provider version to upload",
            VERSIONS_PATH,
            "registry-provider-versions",
        ))
        .flag(FlagSpec::attr("version", "Semantic version").required())
        .flag(FlagSpec::attr("key-id", "GPG key ID used to sign the release").required())
        .flag(FlagSpec::attr("protocols", "Supported plugin protocols, e.g. 5.0,6.0").list())
        .columns(&["version", "key-id", "shasums-upload-url", "shasums-sig-upload-url"]),
        provider_address(CommandSpec::read(
            "registry provider version read",
            "Show a provider version",
            VERSION_PATH,
        ))
        .flag(FlagSpec::path("version", "Provider version"))
        .columns(VERSION_COLUMNS),
        provider_address(CommandSpec::delete(
            "registry provider version delete",
            "Delete a provider version",
            VERSION_PATH,
        ))
        .flag(FlagSpec::path("version", "Provider version"))
        .done("Provider version deleted"),
    ]
}

fn platform_commands() -> Vec<CommandSpec> {
    let version = || FlagSpec::path("version", "Provider version");
    vec![
        provider_address(CommandSpec::list(
            "registry provider platform list",
            "List the platforms of a provider version",
            PLATFORMS_PATH,
        ))
        .flag(version())
        .columns(PLATFORM_COLUMNS),
        provider_address(CommandSpec::create(
            "registry provider platform create",
            "Create a provider platform to upload",
            PLATFORMS_PATH,
            "registry-provider-version-platforms",
        ))
        .flag(version())
        .flag(FlagSpec::attr("os", "Operating system, e.g. linux").required())
        .flag(FlagSpec::attr("arch", "Architecture, e.g. amd64").required())
        .flag(FlagSpec::attr("shasum", "SHA-256 of the archive").required())
        .flag(FlagSpec::attr("filename", "Archive file name").required())
        .columns(&["os", "arch", "filename", "provider-binary-upload-url"]),
        provider_address(CommandSpec::read(
            "registry provider platform read",
            "Show a provider platform",
            PLATFORM_PATH,
        ))
        .flag(version())
        .flag(FlagSpec::path("os", "Operating system"))
        .flag(FlagSpec::path("arch", "Architecture"))
        .columns(PLATFORM_COLUMNS),
        provider_address(CommandSpec::delete(
            "registry provider platform delete",
            "Delete a provider platform",
            PLATFORM_PATH,
        ))
        .flag(version())
        .flag(FlagSpec::path("os", "Operating system"))
        .flag(FlagSpec::path("arch", "Architecture"))
        .done("Provider platform deleted"),
    ]
}

fn gpg_key_commands() -> Vec<CommandSpec> {
    let key_address = |spec: CommandSpec| {
        spec.flag(FlagSpec::path("namespace", "Namespace (organization name)"))
            .flag(FlagSpec::path("key-id", "GPG key ID"))
    };
    vec![
        CommandSpec::list("registry gpgkey list", "List GPG keys", GPG_KEYS_PATH)
            .flag(
                FlagSpec::query("namespace", "filter[namespace]", "Namespace (organization name)")
                    .required(),
            )
            .columns(GPG_COLUMNS),
        CommandSpec::create(
            "registry gpgkey create",
            "Add a GPG key for signing providers",
            GPG_KEYS_PATH,
            "gpg-keys",
        )
        .flag(FlagSpec::attr("namespace", "Namespace (organization name)").required())
        .flag(FlagSpec::attr("ascii-armor", "ASCII-armored public key").required())
        .columns(GPG_COLUMNS),
        key_address(CommandSpec::read(
            "registry gpgkey read",
            "Show a GPG key",
            GPG_KEY_PATH,
        ))
        .columns(GPG_COLUMNS),
        key_address(CommandSpec::update(
            "registry gpgkey update",
            "Move a GPG key to another namespace",
            GPG_KEY_PATH,
            "gpg-keys",
        ))
        .flag(FlagSpec::attr_as("new-namespace", "namespace", "Namespace to move the key to").required())
        .columns(GPG_COLUMNS),
        key_address(CommandSpec::delete(
            "registry gpgkey delete",
            "Delete a GPG key",
            GPG_KEY_PATH,
        ))
        .done("GPG key deleted"),
    ]
}
