/// Configuration constants for the TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Media type for JSON:API requests
    pub const CONTENT_TYPE: &str = "application/vnd.api+json";

    /// Request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 30;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file name
    pub const FILE_NAME: &str = "terraform.d/credentials.tfrc.json";

    /// Path to Terraform credentials file on Unix (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["TFE_TOKEN", "TFC_TOKEN", "HCP_TOKEN"];
}

/// Configuration constants for host resolution
pub mod host {
    /// Environment variables for the API address (checked in order)
    pub const ENV_VARS: &[&str] = &["TFE_ADDRESS", "TFE_HOSTNAME"];
}

/// Configuration constants for command flags
pub mod flags {
    /// Environment variable providing the default for `-organization`
    pub const ORGANIZATION_ENV_VAR: &str = "TFE_ORGANIZATION";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Binary name used in usage lines
    pub const BIN_NAME: &str = "tfectl";
}
