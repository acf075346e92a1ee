use clap::Args;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Logging controls.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Set a single global log level (error|warn|info|debug|trace)
    #[arg(long, global = true, conflicts_with = "log_filter")]
    pub log_level: Option<String>,

    /// Set an explicit tracing filter directive, e.g. "fpcompare_cli=trace"
    #[arg(long, global = true)]
    pub log_filter: Option<String>,
}
impl LogArgs {
    /// Filter precedence: `--log-filter`, `--log-level`, `RUST_LOG`, then `warn`.
    pub fn env_filter(&self) -> EnvFilter {
        if let Some(directives) = &self.log_filter {
            return EnvFilter::new(directives);
        }
        if let Some(level) = &self.log_level {
            return EnvFilter::new(level.to_ascii_lowercase());
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }

    /// Install a stderr subscriber. Does nothing if one is already installed.
    pub fn init(&self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .try_init();
    }
}
