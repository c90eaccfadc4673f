//! tfectl - a command per HCP Terraform / Terraform Enterprise API operation
//!
//! Commands are registered under hierarchical names (`team access create`)
//! and each one performs a single JSON:API request.
//!
//! # Example
//!
//! ```bash
//! # List teams in an organization
//! tfectl team list -organization my-org
//!
//! # Grant a team write access to a workspace
//! tfectl team access create -team-id team-123 -workspace-id ws-456 -access write
//!
//! # Show what a namespace offers
//! tfectl registry provider
//!
//! # Output as YAML
//! tfectl workspace read -id ws-456 -output yaml
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod coverage;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;

pub use cli::{dispatch, Cli, OutputFormat};
pub use commands::{build_registry, Command, CommandFactory, CommandRegistry, Context};
pub use coverage::{expected_file_name, resolve, validate, RESOURCE_OPERATIONS};
pub use error::{Result, TfeError};
pub use hcp::{HostResolver, TfeClient, TokenResolver};
