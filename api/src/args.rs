use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use skinscan_core::domain::common::{
    DEFAULT_EWG_SEARCH_URL, ProductLookupConfig, SkinScanConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "skinscan", version, about = "SkinScan ingredient and product safety API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub ewg: EwgArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated origins; `*` allows any origin
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct EwgArgs {
    #[arg(long = "ewg-search-url", env = "EWG_SEARCH_URL", default_value = DEFAULT_EWG_SEARCH_URL)]
    pub search_url: String,

    /// Outbound request timeout; unset keeps the HTTP client default
    #[arg(long = "ewg-timeout-secs", env = "EWG_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[arg(long = "ewg-user-agent", env = "EWG_USER_AGENT")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// tracing-subscriber filter directive
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for SkinScanConfig {
    fn from(args: Args) -> Self {
        let defaults = ProductLookupConfig::default();

        SkinScanConfig {
            product_lookup: ProductLookupConfig {
                search_url: args.ewg.search_url,
                user_agent: args.ewg.user_agent.unwrap_or(defaults.user_agent),
                timeout: args.ewg.timeout_secs.map(Duration::from_secs),
            },
        }
    }
}
