use clap::Parser;

/// MXSEC API — demo backend for the security dashboard.
#[derive(Parser, Debug, Clone)]
#[command(name = "mxsec-api")]
pub struct CliArgs {
    /// HTTP port to listen on
    #[arg(long = "port", default_value_t = DEFAULT_API_PORT)]
    pub port: u16,

    /// Bind address
    #[arg(long = "bind", default_value = "0.0.0.0")]
    pub bind: String,
}

pub struct ApiConfig {
    pub port: u16,
    pub bind: String,
}

// Port constants
pub const DEFAULT_API_PORT: u16 = 8000;

// Alert list constants
pub const DEFAULT_ALERT_LIMIT: i64 = 10;

// Service identity reported by the root healthcheck
pub const SERVICE_NAME: &str = "mxsec-api";

impl ApiConfig {
    pub fn from_args(args: CliArgs) -> Self {
        ApiConfig {
            port: args.port,
            bind: args.bind,
        }
    }
}
