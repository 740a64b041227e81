use clap::Parser;
use std::time::Duration;

use crate::jtl::LogFormat;
use crate::metrics::ReportMode;

use super::parsers::{parse_bool_env, parse_duration_arg};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Summarize JMeter JTL results and post the report to a chat webhook."
)]
pub struct ReportArgs {
    /// Results log to summarize (JTL as XML or CSV)
    #[arg(long, short = 'r', env = "JTL_FILE_PATH")]
    pub results: Option<String>,

    /// Test plan file the results came from; its file name labels the report
    #[arg(long, env = "JMX_FILE_PATH")]
    pub jmx: Option<String>,

    /// Report label (overrides the name derived from --jmx)
    #[arg(long = "test-plan")]
    pub test_plan: Option<String>,

    /// Report full metrics or only a pass/fail verdict
    #[arg(long, short = 'm', default_value = "full", ignore_case = true)]
    pub mode: ReportMode,

    /// Results log format
    #[arg(long, default_value = "auto", ignore_case = true)]
    pub format: LogFormat,

    /// Incoming webhook URL to post the report to
    #[arg(long = "webhook-url", env = "SLACK_WEBHOOK_URL", hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// Webhook request timeout (supports ms/s/m/h)
    #[arg(long, default_value = "10s", value_parser = parse_duration_arg)]
    pub timeout: Duration,

    /// Channel override sent with the message
    #[arg(long)]
    pub channel: Option<String>,

    /// Username override sent with the message
    #[arg(long)]
    pub username: Option<String>,

    /// Emoji icon override sent with the message (e.g. :rocket:)
    #[arg(long = "icon-emoji")]
    pub icon_emoji: Option<String>,

    /// Print the webhook payload instead of sending it
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also print the computed report as JSON
    #[arg(long = "print-summary")]
    pub print_summary: bool,

    /// Path to config file (TOML/JSON). Defaults to ./jtl-report.toml or ./jtl-report.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by JTL_REPORT_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
