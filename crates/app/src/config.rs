//! Storefront configuration

use std::path::PathBuf;

use clap::Args;

/// Connection and state settings shared by every CLI command.
#[derive(Debug, Args)]
pub struct StorefrontConfig {
    /// Base URL of the storefront API.
    #[arg(
        long,
        env = "DHABA_API_BASE_URL",
        default_value = "http://localhost:3000"
    )]
    pub api_base_url: String,

    /// Path of the mirrored cart state file.
    #[arg(long, env = "DHABA_STATE_PATH", default_value = ".dhaba-state.json")]
    pub state_path: PathBuf,

    /// Log level used when `RUST_LOG` is unset.
    #[arg(long, env = "DHABA_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
