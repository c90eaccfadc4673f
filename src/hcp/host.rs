//! API address resolution from multiple sources

use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;
use std::path::Path;

use crate::config::host as host_config;
use crate::error::{Result, TfeError};
use crate::hcp::credentials::CredentialsFile;

/// Address resolution with fallback logic
pub struct HostResolver;

impl HostResolver {
    /// Resolve the API address from multiple sources with fallback:
    /// 1. CLI argument (`--address`)
    /// 2. Environment variables (TFE_ADDRESS, TFE_HOSTNAME - in order)
    /// 3. Credentials file:
    ///    - If 1 host: use it
    ///    - If multiple hosts: interactive selection (or error in batch mode)
    ///    - If no hosts: error
    pub fn resolve(cli_address: Option<&str>, batch_mode: bool) -> Result<String> {
        if let Some(address) = cli_address {
            debug!("Using address from CLI argument: {}", address);
            return Ok(address.to_string());
        }

        for env_var in host_config::ENV_VARS {
            if let Ok(address) = std::env::var(env_var) {
                if !address.is_empty() {
                    debug!("Using address from {} environment variable: {}", env_var, address);
                    return Ok(address);
                }
            }
        }

        debug!(
            "No address in CLI or {:?}, trying credentials file",
            host_config::ENV_VARS
        );
        let file = CredentialsFile::load_default()?;
        Self::pick_from_file(file.as_ref(), batch_mode)
    }

    fn pick_from_file(file: Option<&CredentialsFile>, batch_mode: bool) -> Result<String> {
        let Some(file) = file else {
            return Err(TfeError::HostNotFound(Self::host_not_found_message(
                None, None,
            )));
        };

        let hosts = file.hosts();
        match hosts.as_slice() {
            [] => Err(TfeError::HostNotFound(Self::host_not_found_message(
                Some(&file.path),
                None,
            ))),
            [single] => {
                debug!(
                    "Using single host from credentials file {}: {}",
                    file.path.display(),
                    single
                );
                Ok(single.clone())
            }
            _ if batch_mode => Err(TfeError::HostNotFound(Self::host_not_found_message(
                Some(&file.path),
                Some(&hosts),
            ))),
            _ => Self::interactive_host_selection(&hosts, &file.path),
        }
    }

    /// Prompt user to select a host interactively
    fn interactive_host_selection(hosts: &[String], credentials_path: &Path) -> Result<String> {
        eprintln!("\nMultiple hosts found in {}:", credentials_path.display());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a host")
            .items(hosts)
            .default(0)
            .interact()
            .map_err(|e| TfeError::HostNotFound(format!("Failed to select host: {}", e)))?;

        let host = hosts[selection].clone();
        debug!("User selected host: {}", host);
        Ok(host)
    }

    /// Generate helpful error message when no address is found
    fn host_not_found_message(
        credentials_path: Option<&Path>,
        available_hosts: Option<&[String]>,
    ) -> String {
        let creds_info = match (credentials_path, available_hosts) {
            (Some(p), Some(hosts)) => format!(
                "\n   Credentials file: {} ({} hosts found)\n   Available hosts: {}",
                p.display(),
                hosts.len(),
                hosts.join(", ")
            ),
            (Some(p), None) => {
                format!("\n   Credentials file: {} (no hosts found)", p.display())
            }
            (None, _) => "\n   Credentials file: not found".to_string(),
        };

        format!(
            "No API address specified. Provide one using:\n\
             \n\
             1. CLI argument:      tfectl --address <HOST|URL> ...\n\
             2. Environment var:   export {}=<HOST|URL>\n\
             3. Terraform login:   terraform login <HOST>\n\
             \n\
             Checked:{}\n",
            host_config::ENV_VARS[0],
            creds_info
        )
    }
}
