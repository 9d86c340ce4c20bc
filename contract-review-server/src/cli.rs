use clap::{Parser, ValueEnum};
use contract_review_core::config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};
use contract_review_core::RuntimeEnvironment;

#[derive(Parser, Debug)]
#[command(
    name = "contract-review-server",
    about = "Trade contract review service - relays contract text to Qwen for risk analysis",
    version = env!("CARGO_PKG_VERSION"),
    author
)]
pub struct Cli {
    #[arg(short, long, env = "CONTRACT_REVIEW_PORT", default_value = "3000")]
    pub port: u16,

    #[arg(short, long, env = "CONTRACT_REVIEW_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    #[arg(long, env = "TONGYI_API_KEY", hide_env_values = true, help = "DashScope API key")]
    pub api_key: Option<String>,

    #[arg(long, env = "TONGYI_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, env = "TONGYI_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    #[arg(
        short,
        long,
        env = "APP_ENV",
        value_enum,
        default_value_t = EnvironmentArg::Production,
        help = "development adds raw error text to failure responses"
    )]
    pub environment: EnvironmentArg,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvironmentArg {
    Production,
    Development,
}

impl From<EnvironmentArg> for RuntimeEnvironment {
    fn from(arg: EnvironmentArg) -> Self {
        match arg {
            EnvironmentArg::Production => Self::Production,
            EnvironmentArg::Development => Self::Development,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "contract-review-server",
            "--port",
            "8080",
            "--api-key",
            "sk-live",
            "--environment",
            "development",
            "--timeout-ms",
            "1500",
        ])
        .unwrap_or_else(|e| panic!("parse failed: {}", e));

        assert_eq!(cli.port, 8080);
        assert_eq!(cli.api_key.as_deref(), Some("sk-live"));
        assert_eq!(cli.timeout_ms, 1500);
        assert_eq!(RuntimeEnvironment::from(cli.environment), RuntimeEnvironment::Development);
    }
}
