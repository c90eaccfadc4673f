//! OIDC configurations for dynamic provider credentials (HYOK)

use super::{id, organization};
use crate::commands::{CommandSpec, FlagSpec};

const CREATE_PATH: &str = "/organizations/{organization}/oidc-configurations";
const CONFIG_PATH: &str = "/oidc-configurations/{id}";

/// Names and attributes of one cloud's configuration commands
struct OidcProvider {
    create: &'static str,
    read: &'static str,
    update: &'static str,
    delete: &'static str,
    deleted: &'static str,
    kind: &'static str,
    columns: &'static [&'static str],
    /// `(flag, help)` attributes sent on create and update
    attributes: &'static [(&'static str, &'static str)],
}

const PROVIDERS: &[OidcProvider] = &[
    OidcProvider {
        create: "oidc aws create",
        read: "oidc aws read",
        update: "oidc aws update",
        delete: "oidc aws delete",
        deleted: "AWS OIDC configuration deleted",
        kind: "aws-oidc-configurations",
        columns: &["role-arn"],
        attributes: &[("role-arn", "IAM role to assume")],
    },
    OidcProvider {
        create: "oidc azure create",
        read: "oidc azure read",
        update: "oidc azure update",
        delete: "oidc azure delete",
        deleted: "Azure OIDC configuration deleted",
        kind: "azure-oidc-configurations",
        columns: &["client-id", "subscription-id", "tenant-id"],
        attributes: &[
            ("client-id", "Application (client) ID"),
            ("subscription-id", "Subscription ID"),
            ("tenant-id", "Tenant ID"),
        ],
    },
    OidcProvider {
        create: "oidc gcp create",
        read: "oidc gcp read",
        update: "oidc gcp update",
        delete: "oidc gcp delete",
        deleted: "GCP OIDC configuration deleted",
        kind: "gcp-oidc-configurations",
        columns: &["service-account-email", "project-number", "workload-provider-name"],
        attributes: &[
            ("service-account-email", "Service account to impersonate"),
            ("project-number", "Project number"),
            ("workload-provider-name", "Workload identity provider resource name"),
        ],
    },
    OidcProvider {
        create: "oidc vault create",
        read: "oidc vault read",
        update: "oidc vault update",
        delete: "oidc vault delete",
        deleted: "Vault OIDC configuration deleted",
        kind: "vault-oidc-configurations",
        columns: &["address", "role", "namespace"],
        attributes: &[
            ("address", "Vault address"),
            ("role", "JWT auth role"),
            ("namespace", "Vault namespace"),
            ("encoded-cacert", "Base64-encoded CA certificate"),
        ],
    },
];

/// Attributes that are optional even on create
const OPTIONAL_ON_CREATE: &[&str] = &["namespace", "encoded-cacert"];

pub fn commands() -> Vec<CommandSpec> {
    PROVIDERS.iter().flat_map(provider_commands).collect()
}

fn provider_commands(provider: &OidcProvider) -> Vec<CommandSpec> {
    let config_id = || id("OIDC configuration ID");

    let mut create = CommandSpec::create(
        provider.create,
        "Create an OIDC configuration",
        CREATE_PATH,
        provider.kind,
    )
    .flag(organization());
    let mut update = CommandSpec::update(
        provider.update,
        "Update an OIDC configuration",
        CONFIG_PATH,
        provider.kind,
    )
    .flag(config_id());

    for (name, help) in provider.attributes {
        let flag = FlagSpec::attr(name, help);
        create = if OPTIONAL_ON_CREATE.contains(name) {
            create.flag(flag.clone())
        } else {
            create.flag(flag.clone().required())
        };
        update = update.flag(flag);
    }

    vec![
        create.columns(provider.columns),
        CommandSpec::read(provider.read, "Show an OIDC configuration", CONFIG_PATH)
            .flag(config_id())
            .columns(provider.columns),
        update.columns(provider.columns),
        CommandSpec::delete(provider.delete, "Delete an OIDC configuration", CONFIG_PATH)
            .flag(config_id())
            .done(provider.deleted),
    ]
}
