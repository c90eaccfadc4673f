//! TFE API access
//!
//! Address and token resolution plus the HTTP client every command shares.

mod client;
mod credentials;
mod host;

pub use client::{ApiRequest, ApiResponse, TfeClient};
pub use credentials::{CredentialsFile, TokenResolver};
pub use host::HostResolver;
