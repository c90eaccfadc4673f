//! API token resolution and the Terraform credentials file

use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, TfeError};

/// On-disk layout of `credentials.tfrc.json`
#[derive(Deserialize, Debug)]
struct CredentialsDocument {
    #[serde(default)]
    credentials: BTreeMap<String, CredentialEntry>,
}

#[derive(Deserialize, Debug)]
struct CredentialEntry {
    token: Option<String>,
}

/// Parsed Terraform credentials file
#[derive(Debug)]
pub struct CredentialsFile {
    pub path: PathBuf,
    entries: BTreeMap<String, Option<String>>,
}

impl CredentialsFile {
    /// Load the file from the platform default location.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load_default() -> Result<Option<Self>> {
        match default_path() {
            Some(path) => Self::load(&path),
            None => Ok(None),
        }
    }

    /// Load the file from an explicit path
    pub fn load(path: &Path) -> Result<Option<Self>> {
        debug!("Looking for credentials file at: {}", path.display());
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(TfeError::Credentials(format!(
                    "Could not read credentials file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let doc: CredentialsDocument = serde_json::from_str(&content).map_err(|e| {
            TfeError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Some(Self {
            path: path.to_path_buf(),
            entries: doc
                .credentials
                .into_iter()
                .map(|(host, entry)| (host, entry.token))
                .collect(),
        }))
    }

    /// Hostnames with an entry, sorted
    pub fn hosts(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Token stored for a hostname
    pub fn token_for(&self, host: &str) -> Option<&str> {
        self.entries.get(host).and_then(|t| t.as_deref())
    }
}

/// Path to the Terraform credentials file (platform-specific)
/// - Windows: %APPDATA%\terraform.d\credentials.tfrc.json
/// - Linux/macOS: ~/.terraform.d/credentials.tfrc.json
pub fn default_path() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        dirs::config_dir().map(|p| p.join(credentials::FILE_NAME))
    }

    #[cfg(not(windows))]
    {
        dirs::home_dir().map(|p| p.join(credentials::FILE_PATH_UNIX))
    }
}

/// Strip scheme and path so an address can key the credentials file
pub fn hostname_of(address: &str) -> &str {
    let without_scheme = address
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    without_scheme.split('/').next().unwrap_or(without_scheme)
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given address
    pub fn new(address: &str) -> Self {
        Self {
            host: hostname_of(address).to_string(),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (TFE_TOKEN, TFC_TOKEN, HCP_TOKEN - in order)
    /// 3. Credentials file entry for the host
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                if !token.is_empty() {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
            }
        }

        debug!(
            "No token in environment variables {:?}, trying credentials file",
            credentials::TOKEN_ENV_VARS
        );
        let file = CredentialsFile::load_default()?;
        self.token_from_file(file.as_ref())
    }

    fn token_from_file(&self, file: Option<&CredentialsFile>) -> Result<String> {
        let Some(file) = file else {
            return Err(TfeError::TokenNotFound(self.token_not_found_message(None)));
        };

        match file.token_for(&self.host) {
            Some(token) => {
                debug!(
                    "Using token from credentials file {} for host: {}",
                    file.path.display(),
                    self.host
                );
                Ok(token.to_string())
            }
            None => Err(TfeError::TokenNotFound(
                self.token_not_found_message(Some(&file.path)),
            )),
        }
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let creds_info = credentials_path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found for host '{}'. Provide one using:\n\
             \n\
             1. CLI argument:      tfectl --token <TOKEN> ...\n\
             2. Environment var:   export TFE_TOKEN=<TOKEN>  (also: TFC_TOKEN, HCP_TOKEN)\n\
             3. Terraform login:   terraform login {}\n\
             \n\
             Checked: env vars [{}]{}",
            self.host, self.host, env_vars, creds_info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_credentials(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolver_cli_token_takes_precedence() {
        let resolver = TokenResolver::new("test.example.com");
        assert_eq!(resolver.resolve(Some("cli-token-123")).unwrap(), "cli-token-123");
    }

    #[test]
    fn test_resolver_strips_scheme() {
        let resolver = TokenResolver::new("https://tfe.example.com/");
        assert_eq!(resolver.host, "tfe.example.com");
    }

    #[test]
    fn test_hostname_of() {
        assert_eq!(hostname_of("app.terraform.io"), "app.terraform.io");
        assert_eq!(hostname_of("http://127.0.0.1:9000"), "127.0.0.1:9000");
        assert_eq!(hostname_of("https://tfe.local/api"), "tfe.local");
    }

    #[test]
    fn test_load_credentials_file() {
        let file = write_credentials(
            r#"{
                "credentials": {
                    "app.terraform.io": { "token": "test-token-123" },
                    "custom.host.com": { "token": "custom-token-456" }
                }
            }"#,
        );
        let creds = CredentialsFile::load(file.path()).unwrap().unwrap();
        assert_eq!(creds.hosts(), vec!["app.terraform.io", "custom.host.com"]);
        assert_eq!(creds.token_for("custom.host.com"), Some("custom-token-456"));
        assert_eq!(creds.token_for("missing.host"), None);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = CredentialsFile::load(&dir.path().join("nope.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_file_is_error() {
        let file = write_credentials("not json");
        let err = CredentialsFile::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Could not parse credentials file"));
    }

    #[test]
    fn test_token_from_credentials_for_host() {
        let file = write_credentials(r#"{"credentials": {"tfe.local": {"token": "abc"}}}"#);
        let creds = CredentialsFile::load(file.path()).unwrap();
        let resolver = TokenResolver::new("https://tfe.local");
        assert_eq!(resolver.token_from_file(creds.as_ref()).unwrap(), "abc");
    }

    #[test]
    fn test_token_missing_for_host() {
        let file = write_credentials(r#"{"credentials": {"other.host": {"token": "abc"}}}"#);
        let creds = CredentialsFile::load(file.path()).unwrap();
        let resolver = TokenResolver::new("tfe.local");
        match resolver.token_from_file(creds.as_ref()).unwrap_err() {
            TfeError::TokenNotFound(msg) => {
                assert!(msg.contains("tfe.local"));
                assert!(msg.contains("TFE_TOKEN"));
            }
            other => panic!("Expected TokenNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_default_path() {
        let path = default_path().unwrap();
        assert!(path.to_string_lossy().contains("credentials.tfrc.json"));
    }
}
